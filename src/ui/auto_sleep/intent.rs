use crate::settings::AutoSleepDraft;
use crate::ui::auto_sleep::state::AutoSleepField;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AutoSleepIntent {
    /// Label or settings icon on the summary row. Always reseeds.
    Open { draft: AutoSleepDraft },
    /// Dialog checkbox. Draft only.
    ToggleEnabled,
    FocusNext,
    FocusPrev,
    /// Typed character for the focused text field.
    Input(char),
    Backspace,
    /// Replace a text field's content.
    SetText { field: AutoSleepField, text: String },
    /// Backdrop, Esc or the Cancel button. Draft is dropped.
    Cancel,
    /// Commit has been raised; close and drop the draft.
    Saved,
}

impl Intent for AutoSleepIntent {}
