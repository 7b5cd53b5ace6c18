use std::ops::RangeInclusive;

use crate::settings::auto_sleep::AutoSleepDraft;

/// Allowed seek increments, in seconds.
pub const SEEK_TIME_RANGE: RangeInclusive<u32> = 3..=60;
/// Allowed auto-rewind amounts, in seconds.
pub const AUTO_REWIND_RANGE: RangeInclusive<u32> = 0..=20;

/// The exclusive "simple" dialogs. `None` in
/// [`SettingsViewState::dialog`] means neither is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsDialog {
    SeekTime,
    AutoRewindAmount,
}

impl SettingsDialog {
    pub fn title(self) -> &'static str {
        match self {
            Self::SeekTime => "Seek time",
            Self::AutoRewindAmount => "Auto rewind",
        }
    }

    pub fn seconds_range(self) -> RangeInclusive<u32> {
        match self {
            Self::SeekTime => SEEK_TIME_RANGE,
            Self::AutoRewindAmount => AUTO_REWIND_RANGE,
        }
    }

    /// Clamp a value into this dialog's range.
    pub fn clamp(self, seconds: u32) -> u32 {
        let range = self.seconds_range();
        seconds.clamp(*range.start(), *range.end())
    }
}

/// Immutable snapshot of everything the settings screen renders.
///
/// Produced by the behavior owner; the screen only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsViewState {
    pub use_dark_theme: bool,
    /// Some environments forbid overriding the theme.
    pub show_dark_theme_pref: bool,
    pub seek_time_seconds: u32,
    pub auto_rewind_seconds: u32,
    pub use_grid: bool,
    pub is_auto_sleep_enabled: bool,
    /// Free-form text. Format checks belong to the owner.
    pub auto_sleep_start_time: String,
    pub auto_sleep_end_time: String,
    pub auto_sleep_duration_minutes: String,
    pub app_version: String,
    pub dialog: Option<SettingsDialog>,
    /// Message the owner wants surfaced, e.g. a rejected commit.
    pub error: Option<String>,
}

impl SettingsViewState {
    /// Current persisted amount for a simple dialog.
    pub fn seconds_for(&self, dialog: SettingsDialog) -> u32 {
        match dialog {
            SettingsDialog::SeekTime => self.seek_time_seconds,
            SettingsDialog::AutoRewindAmount => self.auto_rewind_seconds,
        }
    }

    /// Fresh draft seeded from the persisted auto-sleep values.
    pub fn auto_sleep_draft(&self) -> AutoSleepDraft {
        AutoSleepDraft {
            enabled: self.is_auto_sleep_enabled,
            start_time: self.auto_sleep_start_time.clone(),
            end_time: self.auto_sleep_end_time.clone(),
            duration_minutes: self.auto_sleep_duration_minutes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_dialog_range() {
        assert_eq!(SettingsDialog::SeekTime.clamp(1), 3);
        assert_eq!(SettingsDialog::SeekTime.clamp(90), 60);
        assert_eq!(SettingsDialog::AutoRewindAmount.clamp(0), 0);
        assert_eq!(SettingsDialog::AutoRewindAmount.clamp(21), 20);
    }

    #[test]
    fn seconds_for_reads_matching_field() {
        let view = SettingsViewState {
            seek_time_seconds: 42,
            auto_rewind_seconds: 12,
            ..Default::default()
        };
        assert_eq!(view.seconds_for(SettingsDialog::SeekTime), 42);
        assert_eq!(view.seconds_for(SettingsDialog::AutoRewindAmount), 12);
    }

    #[test]
    fn draft_copies_persisted_values() {
        let view = SettingsViewState {
            is_auto_sleep_enabled: true,
            auto_sleep_start_time: "22:00".into(),
            auto_sleep_end_time: "06:00".into(),
            auto_sleep_duration_minutes: "20".into(),
            ..Default::default()
        };
        let draft = view.auto_sleep_draft();
        assert!(draft.enabled);
        assert_eq!(draft.start_time, "22:00");
        assert_eq!(draft.end_time, "06:00");
        assert_eq!(draft.duration_minutes, "20");
    }
}
