use crate::settings::{SettingsIntent, SettingsViewState};

/// One entry of the settings list, carrying what it needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsRow {
    DarkTheme { enabled: bool },
    Grid { use_grid: bool },
    SeekTime { seconds: u32 },
    AutoRewind { seconds: u32 },
    SuggestIdea,
    GetSupport,
    ReportBug,
    Translations,
    AutoSleep { enabled: bool, window: String },
}

/// Which part of a row the user activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTrigger {
    /// The row itself (label).
    Primary,
    /// Trailing switch.
    Switch,
    /// Trailing settings icon.
    SettingsIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Raise(SettingsIntent),
    OpenAutoSleepDialog,
    Ignore,
}

impl SettingsRow {
    /// Rows in display order for a view-state.
    pub fn visible_rows(view: &SettingsViewState) -> Vec<SettingsRow> {
        let mut rows = Vec::with_capacity(9);
        if view.show_dark_theme_pref {
            rows.push(Self::DarkTheme {
                enabled: view.use_dark_theme,
            });
        }
        rows.push(Self::Grid {
            use_grid: view.use_grid,
        });
        rows.push(Self::SeekTime {
            seconds: view.seek_time_seconds,
        });
        rows.push(Self::AutoRewind {
            seconds: view.auto_rewind_seconds,
        });
        rows.push(Self::SuggestIdea);
        rows.push(Self::GetSupport);
        rows.push(Self::ReportBug);
        rows.push(Self::Translations);
        rows.push(Self::AutoSleep {
            enabled: view.is_auto_sleep_enabled,
            window: format!(
                "{} - {}, {} min",
                view.auto_sleep_start_time,
                view.auto_sleep_end_time,
                view.auto_sleep_duration_minutes
            ),
        });
        rows
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::DarkTheme { .. } => "Dark theme",
            Self::Grid { .. } => "Display mode",
            Self::SeekTime { .. } => "Skip forward / back",
            Self::AutoRewind { .. } => "Auto rewind on resume",
            Self::SuggestIdea => "Suggest an idea",
            Self::GetSupport => "Get support",
            Self::ReportBug => "Report a bug",
            Self::Translations => "Help translate",
            Self::AutoSleep { .. } => "Auto sleep timer",
        }
    }

    /// Secondary text under the title.
    pub fn summary(&self) -> Option<String> {
        match self {
            Self::Grid { use_grid } => Some(if *use_grid { "Grid" } else { "List" }.to_string()),
            Self::SeekTime { seconds } | Self::AutoRewind { seconds } => {
                Some(format!("{seconds} s"))
            }
            Self::AutoSleep { window, .. } => Some(window.clone()),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::DarkTheme { .. } => "◐",
            Self::Grid { use_grid: true } => "▦",
            Self::Grid { use_grid: false } => "☰",
            Self::SeekTime { .. } => "⇆",
            Self::AutoRewind { .. } => "↺",
            Self::SuggestIdea => "✦",
            Self::GetSupport => "♥",
            Self::ReportBug => "⚠",
            Self::Translations => "⌘",
            Self::AutoSleep { .. } => "☾",
        }
    }

    /// Switch value, for rows that have one.
    pub fn switch(&self) -> Option<bool> {
        match self {
            Self::DarkTheme { enabled } => Some(*enabled),
            Self::Grid { use_grid } => Some(*use_grid),
            Self::AutoSleep { enabled, .. } => Some(*enabled),
            _ => None,
        }
    }

    pub fn has_settings_icon(&self) -> bool {
        matches!(self, Self::AutoSleep { .. })
    }

    /// What activating `trigger` on this row does.
    pub fn action(&self, trigger: RowTrigger) -> RowAction {
        use RowTrigger::*;
        match (self, trigger) {
            (Self::DarkTheme { .. }, Primary | Switch) => {
                RowAction::Raise(SettingsIntent::ToggleDarkTheme)
            }
            // The grid switch carries no value; the owner flips it.
            (Self::Grid { .. }, Primary | Switch) => RowAction::Raise(SettingsIntent::ToggleGrid),
            (Self::SeekTime { .. }, Primary) => {
                RowAction::Raise(SettingsIntent::SeekAmountRowClicked)
            }
            (Self::AutoRewind { .. }, Primary) => {
                RowAction::Raise(SettingsIntent::AutoRewindRowClicked)
            }
            (Self::SuggestIdea, Primary) => RowAction::Raise(SettingsIntent::SuggestIdea),
            (Self::GetSupport, Primary) => RowAction::Raise(SettingsIntent::GetSupport),
            (Self::ReportBug, Primary) => RowAction::Raise(SettingsIntent::OpenBugReport),
            (Self::Translations, Primary) => RowAction::Raise(SettingsIntent::OpenTranslations),
            (Self::AutoSleep { .. }, Primary | SettingsIcon) => RowAction::OpenAutoSleepDialog,
            (Self::AutoSleep { enabled, .. }, Switch) => {
                RowAction::Raise(SettingsIntent::ToggleAutoSleep(!enabled))
            }
            _ => RowAction::Ignore,
        }
    }
}
