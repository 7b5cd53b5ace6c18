use serde::{Deserialize, Serialize};

use crate::settings::AutoSleepDraft;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Host and terminal options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Whether the user may override the theme from the settings screen.
    #[serde(default = "default_allow_theme_override")]
    pub allow_theme_override: bool,
    /// Event poll / redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Destinations for the one-way support actions. Unset entries are
/// reported as not configured when triggered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default)]
    pub translations: Option<String>,
    #[serde(default)]
    pub support: Option<String>,
    #[serde(default)]
    pub bug_report: Option<String>,
    #[serde(default)]
    pub suggest_idea: Option<String>,
}

/// Persisted user preferences. This is the only table the app writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_theme: bool,
    #[serde(default = "default_grid")]
    pub grid: bool,
    /// Seek increment in seconds (default: 20).
    #[serde(default = "default_seek_time_seconds")]
    pub seek_time_seconds: u32,
    /// Rewind applied when playback resumes, in seconds (default: 2).
    #[serde(default = "default_auto_rewind_seconds")]
    pub auto_rewind_seconds: u32,
    #[serde(default)]
    pub auto_sleep: AutoSleepPreferences,
}

/// Quiet-hours timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoSleepPreferences {
    #[serde(default)]
    pub enabled: bool,
    /// `HH:MM`, local time.
    #[serde(default = "default_auto_sleep_start")]
    pub start_time: String,
    /// `HH:MM`, local time. May be earlier than `start_time` (overnight).
    #[serde(default = "default_auto_sleep_end")]
    pub end_time: String,
    #[serde(default = "default_auto_sleep_duration")]
    pub duration_minutes: u32,
}

fn default_allow_theme_override() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_grid() -> bool {
    true
}

fn default_seek_time_seconds() -> u32 {
    20
}

fn default_auto_rewind_seconds() -> u32 {
    2
}

fn default_auto_sleep_start() -> String {
    "22:00".to_string()
}

fn default_auto_sleep_end() -> String {
    "06:00".to_string()
}

fn default_auto_sleep_duration() -> u32 {
    20
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            allow_theme_override: default_allow_theme_override(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_theme: false,
            grid: default_grid(),
            seek_time_seconds: default_seek_time_seconds(),
            auto_rewind_seconds: default_auto_rewind_seconds(),
            auto_sleep: AutoSleepPreferences::default(),
        }
    }
}

impl Default for AutoSleepPreferences {
    fn default() -> Self {
        Self {
            enabled: false,
            start_time: default_auto_sleep_start(),
            end_time: default_auto_sleep_end(),
            duration_minutes: default_auto_sleep_duration(),
        }
    }
}

impl From<&AutoSleepPreferences> for AutoSleepDraft {
    fn from(prefs: &AutoSleepPreferences) -> Self {
        Self {
            enabled: prefs.enabled,
            start_time: prefs.start_time.clone(),
            end_time: prefs.end_time.clone(),
            duration_minutes: prefs.duration_minutes.to_string(),
        }
    }
}
