use crate::ui::auto_sleep::intent::AutoSleepIntent;
use crate::ui::auto_sleep::state::{AutoSleepDialogState, AutoSleepField};
use crate::ui::mvi::Reducer;

pub struct AutoSleepReducer;

impl Reducer for AutoSleepReducer {
    type State = AutoSleepDialogState;
    type Intent = AutoSleepIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AutoSleepIntent::Open { draft } => AutoSleepDialogState::Open {
                draft,
                focus: AutoSleepField::Enabled,
            },
            AutoSleepIntent::Cancel | AutoSleepIntent::Saved => AutoSleepDialogState::Closed,
            AutoSleepIntent::ToggleEnabled => match state {
                AutoSleepDialogState::Open { mut draft, focus } => {
                    draft.enabled = !draft.enabled;
                    // Unchecking hides the text fields; focus must not stay on one.
                    let focus = if !draft.enabled && focus.is_text() {
                        AutoSleepField::Enabled
                    } else {
                        focus
                    };
                    AutoSleepDialogState::Open { draft, focus }
                }
                other => other,
            },
            AutoSleepIntent::FocusNext => cycle_focus(state, 1),
            AutoSleepIntent::FocusPrev => cycle_focus(state, -1),
            AutoSleepIntent::Input(ch) => match state {
                AutoSleepDialogState::Open { mut draft, focus } => {
                    if draft.enabled && !ch.is_control() {
                        if let Some(text) = draft.text_mut(focus) {
                            text.push(ch);
                        }
                    }
                    AutoSleepDialogState::Open { draft, focus }
                }
                other => other,
            },
            AutoSleepIntent::Backspace => match state {
                AutoSleepDialogState::Open { mut draft, focus } => {
                    if draft.enabled {
                        if let Some(text) = draft.text_mut(focus) {
                            text.pop();
                        }
                    }
                    AutoSleepDialogState::Open { draft, focus }
                }
                other => other,
            },
            AutoSleepIntent::SetText { field, text } => match state {
                AutoSleepDialogState::Open { mut draft, focus } => {
                    if draft.enabled {
                        if let Some(slot) = draft.text_mut(field) {
                            *slot = text;
                        }
                    }
                    AutoSleepDialogState::Open { draft, focus }
                }
                other => other,
            },
        }
    }
}

fn cycle_focus(state: AutoSleepDialogState, step: isize) -> AutoSleepDialogState {
    match state {
        AutoSleepDialogState::Open { draft, focus } => {
            let order = AutoSleepField::focus_order(draft.enabled);
            let current = order.iter().position(|f| *f == focus).unwrap_or(0) as isize;
            let next = (current + step).rem_euclid(order.len() as isize) as usize;
            AutoSleepDialogState::Open {
                draft,
                focus: order[next],
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AutoSleepDraft;

    fn open(enabled: bool) -> AutoSleepDialogState {
        AutoSleepReducer::reduce(
            AutoSleepDialogState::Closed,
            AutoSleepIntent::Open {
                draft: AutoSleepDraft {
                    enabled,
                    start_time: "22:00".into(),
                    end_time: "06:00".into(),
                    duration_minutes: "20".into(),
                },
            },
        )
    }

    fn reduce_all(state: AutoSleepDialogState, intents: Vec<AutoSleepIntent>) -> AutoSleepDialogState {
        intents.into_iter().fold(state, AutoSleepReducer::reduce)
    }

    #[test]
    fn open_focuses_checkbox() {
        assert_eq!(open(true).focus(), Some(AutoSleepField::Enabled));
    }

    #[test]
    fn open_reseeds_over_existing_draft() {
        let state = reduce_all(
            open(true),
            vec![AutoSleepIntent::SetText {
                field: AutoSleepField::Duration,
                text: "99".into(),
            }],
        );
        let state = AutoSleepReducer::reduce(
            state,
            AutoSleepIntent::Open {
                draft: AutoSleepDraft::default(),
            },
        );
        assert_eq!(state.draft(), Some(&AutoSleepDraft::default()));
    }

    #[test]
    fn focus_cycles_through_visible_fields() {
        let state = reduce_all(open(false), vec![AutoSleepIntent::FocusNext]);
        assert_eq!(state.focus(), Some(AutoSleepField::Save));
        let state = reduce_all(state, vec![AutoSleepIntent::FocusNext, AutoSleepIntent::FocusNext]);
        assert_eq!(state.focus(), Some(AutoSleepField::Enabled));
        let state = reduce_all(state, vec![AutoSleepIntent::FocusPrev]);
        assert_eq!(state.focus(), Some(AutoSleepField::Cancel));
    }

    #[test]
    fn typing_edits_focused_field() {
        let state = reduce_all(
            open(true),
            vec![
                AutoSleepIntent::FocusNext,
                AutoSleepIntent::FocusNext,
                AutoSleepIntent::FocusNext,
                AutoSleepIntent::Backspace,
                AutoSleepIntent::Backspace,
                AutoSleepIntent::Input('4'),
                AutoSleepIntent::Input('5'),
            ],
        );
        assert_eq!(state.focus(), Some(AutoSleepField::Duration));
        assert_eq!(state.draft().unwrap().duration_minutes, "45");
    }

    #[test]
    fn typing_on_checkbox_is_ignored() {
        let state = reduce_all(open(true), vec![AutoSleepIntent::Input('x')]);
        assert_eq!(state, open(true));
    }

    #[test]
    fn long_text_is_kept_verbatim() {
        let long = "22:00 local time (CET)";
        let state = reduce_all(
            open(true),
            vec![
                AutoSleepIntent::SetText {
                    field: AutoSleepField::StartTime,
                    text: long.into(),
                },
                AutoSleepIntent::FocusNext,
                AutoSleepIntent::FocusNext,
                AutoSleepIntent::FocusNext,
            ],
        );
        let state = reduce_all(state, "0 minutes or so".chars().map(AutoSleepIntent::Input).collect());
        let draft = state.draft().unwrap();
        assert_eq!(draft.start_time, long);
        assert_eq!(draft.duration_minutes, "200 minutes or so");
    }

    #[test]
    fn hidden_fields_are_not_editable() {
        let state = reduce_all(
            open(false),
            vec![AutoSleepIntent::SetText {
                field: AutoSleepField::StartTime,
                text: "01:00".into(),
            }],
        );
        assert_eq!(state.draft().unwrap().start_time, "22:00");
    }

    #[test]
    fn unchecking_moves_focus_off_text_field() {
        let state = reduce_all(open(true), vec![AutoSleepIntent::FocusNext]);
        assert_eq!(state.focus(), Some(AutoSleepField::StartTime));
        let state = reduce_all(state, vec![AutoSleepIntent::ToggleEnabled]);
        assert_eq!(state.focus(), Some(AutoSleepField::Enabled));
        assert!(!state.draft().unwrap().enabled);
    }

    #[test]
    fn cancel_and_saved_close() {
        assert!(!reduce_all(open(true), vec![AutoSleepIntent::Cancel]).is_open());
        assert!(!reduce_all(open(true), vec![AutoSleepIntent::Saved]).is_open());
    }

    #[test]
    fn edits_on_closed_are_noop() {
        let state = reduce_all(
            AutoSleepDialogState::Closed,
            vec![
                AutoSleepIntent::ToggleEnabled,
                AutoSleepIntent::Input('1'),
                AutoSleepIntent::FocusNext,
            ],
        );
        assert_eq!(state, AutoSleepDialogState::Closed);
    }
}
