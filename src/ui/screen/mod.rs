//! The settings screen: row list, overlays and the local interaction state
//! that sits between a [`SettingsViewState`] and a [`SettingsListener`].
//!
//! - `rows.rs` - row model and trigger semantics
//! - `tree.rs` - backend-independent render tree
//! - `draw.rs` - ratatui drawing of the tree

mod draw;
mod rows;
mod tree;

pub use draw::draw;
pub use rows::{RowAction, RowTrigger, SettingsRow};
pub use tree::{AmountView, AutoSleepView, Overlay, ScreenTree, TextFieldView};

use crate::settings::{SettingsDialog, SettingsIntent, SettingsListener, SettingsViewState};
use crate::ui::amount::{AmountEditorState, AmountIntent, AmountReducer};
use crate::ui::auto_sleep::{AutoSleepDialogState, AutoSleepField, AutoSleepIntent, AutoSleepReducer};
use crate::ui::mvi::Reducer;

macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct SettingsScreen<L: SettingsListener> {
    listener: L,
    focused: usize,
    auto_sleep: AutoSleepDialogState,
    amount: AmountEditorState,
}

impl<L: SettingsListener> SettingsScreen<L> {
    pub fn new(listener: L) -> Self {
        Self {
            listener,
            focused: 0,
            auto_sleep: AutoSleepDialogState::default(),
            amount: AmountEditorState::default(),
        }
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn auto_sleep_state(&self) -> &AutoSleepDialogState {
        &self.auto_sleep
    }

    pub fn amount_state(&self) -> &AmountEditorState {
        &self.amount
    }

    fn raise(&mut self, intent: SettingsIntent) {
        tracing::debug!(intent = intent.name(), "Raising settings intent");
        self.listener.on_intent(intent);
    }

    /// Align local state with a new view-state. Call before rendering or
    /// handling input.
    pub fn sync(&mut self, view: &SettingsViewState) {
        let requested = view
            .dialog
            .map(|dialog| (dialog, view.seconds_for(dialog)));
        dispatch_mvi!(self, amount, AmountReducer, AmountIntent::Sync { requested });
        let rows = SettingsRow::visible_rows(view).len();
        self.focused = self.focused.min(rows.saturating_sub(1));
    }

    pub fn tree(&self, view: &SettingsViewState) -> ScreenTree {
        ScreenTree::build(view, self.focused, &self.auto_sleep, &self.amount)
    }

    // Row list

    pub fn move_focus(&mut self, view: &SettingsViewState, delta: isize) {
        let rows = SettingsRow::visible_rows(view).len();
        if rows == 0 {
            return;
        }
        let current = self.focused.min(rows - 1) as isize;
        self.focused = (current + delta).rem_euclid(rows as isize) as usize;
    }

    /// Apply `trigger` to `row`.
    pub fn activate(&mut self, view: &SettingsViewState, row: &SettingsRow, trigger: RowTrigger) {
        match row.action(trigger) {
            RowAction::Raise(intent) => self.raise(intent),
            RowAction::OpenAutoSleepDialog => self.open_auto_sleep_dialog(view),
            RowAction::Ignore => {}
        }
    }

    pub fn activate_focused(&mut self, view: &SettingsViewState, trigger: RowTrigger) {
        let rows = SettingsRow::visible_rows(view);
        if let Some(row) = rows.get(self.focused) {
            self.activate(view, row, trigger);
        }
    }

    pub fn close(&mut self) {
        self.raise(SettingsIntent::Close);
    }

    // Auto-sleep dialog

    /// Open the dialog with a draft seeded from `view`, replacing any
    /// draft already open.
    pub fn open_auto_sleep_dialog(&mut self, view: &SettingsViewState) {
        let draft = view.auto_sleep_draft();
        dispatch_mvi!(self, auto_sleep, AutoSleepReducer, AutoSleepIntent::Open { draft });
    }

    pub fn toggle_auto_sleep_draft(&mut self) {
        dispatch_mvi!(self, auto_sleep, AutoSleepReducer, AutoSleepIntent::ToggleEnabled);
    }

    pub fn focus_next_field(&mut self) {
        dispatch_mvi!(self, auto_sleep, AutoSleepReducer, AutoSleepIntent::FocusNext);
    }

    pub fn focus_prev_field(&mut self) {
        dispatch_mvi!(self, auto_sleep, AutoSleepReducer, AutoSleepIntent::FocusPrev);
    }

    /// Type into the focused text field.
    pub fn input_char(&mut self, ch: char) {
        self.edit_draft(AutoSleepIntent::Input(ch));
    }

    pub fn backspace(&mut self) {
        self.edit_draft(AutoSleepIntent::Backspace);
    }

    /// Replace one text field of the open draft.
    pub fn edit_auto_sleep_field(&mut self, field: AutoSleepField, text: impl Into<String>) {
        self.edit_draft(AutoSleepIntent::SetText {
            field,
            text: text.into(),
        });
    }

    fn edit_draft(&mut self, intent: AutoSleepIntent) {
        let before = self.auto_sleep.draft().cloned();
        dispatch_mvi!(self, auto_sleep, AutoSleepReducer, intent);
        let (Some(before), Some(after)) = (before, self.auto_sleep.draft().cloned()) else {
            return;
        };
        if before.start_time != after.start_time {
            self.raise(SettingsIntent::AutoSleepStartTimeChanged(after.start_time));
        }
        if before.end_time != after.end_time {
            self.raise(SettingsIntent::AutoSleepEndTimeChanged(after.end_time));
        }
        if before.duration_minutes != after.duration_minutes {
            self.raise(SettingsIntent::AutoSleepDurationChanged(after.duration_minutes));
        }
    }

    /// Discard the draft. Nothing is raised.
    pub fn cancel_auto_sleep_dialog(&mut self) {
        dispatch_mvi!(self, auto_sleep, AutoSleepReducer, AutoSleepIntent::Cancel);
    }

    /// Commit the draft, then close.
    pub fn save_auto_sleep_dialog(&mut self) {
        let Some(draft) = self.auto_sleep.draft().cloned() else {
            return;
        };
        self.raise(SettingsIntent::SaveAutoSleep(draft));
        dispatch_mvi!(self, auto_sleep, AutoSleepReducer, AutoSleepIntent::Saved);
    }

    /// Press whatever the dialog focus is on.
    pub fn press_auto_sleep_focus(&mut self) {
        match self.auto_sleep.focus() {
            Some(AutoSleepField::Enabled) => self.toggle_auto_sleep_draft(),
            Some(AutoSleepField::Cancel) => self.cancel_auto_sleep_dialog(),
            Some(AutoSleepField::Save) => self.save_auto_sleep_dialog(),
            Some(_) | None => {}
        }
    }

    // Simple dialog

    pub fn adjust_amount(&mut self, delta: i32) {
        let intent = if delta >= 0 {
            AmountIntent::Increase
        } else {
            AmountIntent::Decrease
        };
        for _ in 0..delta.unsigned_abs() {
            dispatch_mvi!(self, amount, AmountReducer, intent.clone());
        }
    }

    /// Raise the edited amount for the dialog being shown.
    pub fn confirm_amount(&mut self) {
        if let AmountEditorState::Editing { dialog, seconds } = self.amount {
            let intent = match dialog {
                SettingsDialog::SeekTime => SettingsIntent::SeekAmountChanged(seconds),
                SettingsDialog::AutoRewindAmount => SettingsIntent::AutoRewindAmountChanged(seconds),
            };
            self.raise(intent);
        }
    }

    pub fn dismiss_amount(&mut self) {
        if matches!(self.amount, AmountEditorState::Editing { .. }) {
            self.raise(SettingsIntent::DismissDialog);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_view() -> SettingsViewState {
        SettingsViewState {
            is_auto_sleep_enabled: true,
            auto_sleep_start_time: "22:00".into(),
            auto_sleep_end_time: "06:00".into(),
            auto_sleep_duration_minutes: "20".into(),
            ..Default::default()
        }
    }

    #[test]
    fn unchanged_edit_raises_nothing() {
        let mut screen = SettingsScreen::new(Vec::<SettingsIntent>::new());
        screen.open_auto_sleep_dialog(&enabled_view());
        screen.edit_auto_sleep_field(AutoSleepField::EndTime, "06:00");
        screen.input_char('x');
        assert!(screen.listener().is_empty());
    }

    #[test]
    fn edits_without_dialog_are_ignored() {
        let mut screen = SettingsScreen::new(Vec::<SettingsIntent>::new());
        screen.edit_auto_sleep_field(AutoSleepField::EndTime, "07:00");
        screen.save_auto_sleep_dialog();
        assert!(screen.listener().is_empty());
    }

    #[test]
    fn confirm_without_simple_dialog_raises_nothing() {
        let mut screen = SettingsScreen::new(Vec::<SettingsIntent>::new());
        screen.confirm_amount();
        screen.dismiss_amount();
        assert!(screen.listener().is_empty());
    }

    #[test]
    fn sync_clamps_focus_when_rows_shrink() {
        let mut screen = SettingsScreen::new(Vec::<SettingsIntent>::new());
        let mut view = enabled_view();
        view.show_dark_theme_pref = true;
        screen.move_focus(&view, -1);
        assert_eq!(screen.focused(), 8);

        view.show_dark_theme_pref = false;
        screen.sync(&view);
        assert_eq!(screen.focused(), 7);
    }

    #[test]
    fn confirm_raises_kind_specific_change() {
        let mut screen = SettingsScreen::new(Vec::<SettingsIntent>::new());
        let view = SettingsViewState {
            auto_rewind_seconds: 2,
            dialog: Some(SettingsDialog::AutoRewindAmount),
            ..Default::default()
        };
        screen.sync(&view);
        screen.adjust_amount(-5);
        screen.confirm_amount();
        assert_eq!(
            screen.into_listener(),
            vec![SettingsIntent::AutoRewindAmountChanged(0)]
        );
    }
}
