use crate::settings::auto_sleep::AutoSleepDraft;

/// Everything the settings screen can ask of its behavior owner.
///
/// All variants are one-way signals: the screen never waits for, or
/// observes, the outcome. State changes come back as a new
/// [`SettingsViewState`](crate::settings::SettingsViewState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsIntent {
    /// Close icon in the title bar.
    Close,
    ToggleDarkTheme,
    /// Seek dialog confirmed with a new amount.
    SeekAmountChanged(u32),
    /// Seek row activated. A request only: the owner decides whether the
    /// dialog opens.
    SeekAmountRowClicked,
    /// Auto-rewind dialog confirmed with a new amount.
    AutoRewindAmountChanged(u32),
    AutoRewindRowClicked,
    /// Simple dialog dismissed without confirming.
    DismissDialog,
    OpenTranslations,
    GetSupport,
    SuggestIdea,
    OpenBugReport,
    /// Flip the grid/list layout. Carries no value on purpose: both the
    /// row and its switch raise the same toggle.
    ToggleGrid,
    /// Draft edit notification. Must not be persisted.
    AutoSleepStartTimeChanged(String),
    /// Draft edit notification. Must not be persisted.
    AutoSleepEndTimeChanged(String),
    /// Draft edit notification. Must not be persisted.
    AutoSleepDurationChanged(String),
    /// Commit the complete edited auto-sleep set in one step.
    SaveAutoSleep(AutoSleepDraft),
    /// Summary-row switch. Persists immediately.
    ToggleAutoSleep(bool),
}

impl SettingsIntent {
    /// Short stable name, used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::ToggleDarkTheme => "toggle_dark_theme",
            Self::SeekAmountChanged(_) => "seek_amount_changed",
            Self::SeekAmountRowClicked => "seek_amount_row_clicked",
            Self::AutoRewindAmountChanged(_) => "auto_rewind_amount_changed",
            Self::AutoRewindRowClicked => "auto_rewind_row_clicked",
            Self::DismissDialog => "dismiss_dialog",
            Self::OpenTranslations => "open_translations",
            Self::GetSupport => "get_support",
            Self::SuggestIdea => "suggest_idea",
            Self::OpenBugReport => "open_bug_report",
            Self::ToggleGrid => "toggle_grid",
            Self::AutoSleepStartTimeChanged(_) => "auto_sleep_start_time_changed",
            Self::AutoSleepEndTimeChanged(_) => "auto_sleep_end_time_changed",
            Self::AutoSleepDurationChanged(_) => "auto_sleep_duration_changed",
            Self::SaveAutoSleep(_) => "save_auto_sleep",
            Self::ToggleAutoSleep(_) => "toggle_auto_sleep",
        }
    }
}
