use crate::ui::amount::intent::AmountIntent;
use crate::ui::amount::state::AmountEditorState;
use crate::ui::mvi::Reducer;

pub struct AmountReducer;

impl Reducer for AmountReducer {
    type State = AmountEditorState;
    type Intent = AmountIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AmountIntent::Sync { requested: None } => AmountEditorState::Hidden,
            AmountIntent::Sync {
                requested: Some((dialog, seconds)),
            } => match state {
                // Same dialog still requested: keep the in-progress edit.
                AmountEditorState::Editing { dialog: current, .. } if current == dialog => state,
                _ => AmountEditorState::Editing {
                    dialog,
                    seconds: dialog.clamp(seconds),
                },
            },
            AmountIntent::Increase => match state {
                AmountEditorState::Editing { dialog, seconds } => AmountEditorState::Editing {
                    dialog,
                    seconds: dialog.clamp(seconds.saturating_add(1)),
                },
                other => other,
            },
            AmountIntent::Decrease => match state {
                AmountEditorState::Editing { dialog, seconds } => AmountEditorState::Editing {
                    dialog,
                    seconds: dialog.clamp(seconds.saturating_sub(1)),
                },
                other => other,
            },
        }
    }
}
