//! Auto-sleep (quiet hours) values as the screen edits them and as the
//! owner validates them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Longest accepted sleep duration: one day.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Unvalidated auto-sleep values, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutoSleepDraft {
    pub enabled: bool,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutoSleepError {
    #[error("Invalid {field} '{value}': expected HH:MM")]
    InvalidTime { field: &'static str, value: String },

    #[error("Invalid duration '{value}': expected 1-{max} minutes", max = MAX_DURATION_MINUTES)]
    InvalidDuration { value: String },
}

/// A wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }
}

impl FromStr for TimeOfDay {
    type Err = ();

    /// Accepts `H:MM` and `HH:MM`, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s.trim().split_once(':').ok_or(())?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(());
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(());
        }
        let hour = hour.parse().map_err(|_| ())?;
        let minute = minute.parse().map_err(|_| ())?;
        Self::new(hour, minute).ok_or(())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Validated auto-sleep settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSleepSchedule {
    pub enabled: bool,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub duration_minutes: u32,
}

impl TryFrom<&AutoSleepDraft> for AutoSleepSchedule {
    type Error = AutoSleepError;

    fn try_from(draft: &AutoSleepDraft) -> Result<Self, Self::Error> {
        let start = parse_time("start time", &draft.start_time)?;
        let end = parse_time("end time", &draft.end_time)?;
        let duration_minutes = parse_duration(&draft.duration_minutes)?;
        Ok(Self {
            enabled: draft.enabled,
            start,
            end,
            duration_minutes,
        })
    }
}

fn parse_time(field: &'static str, value: &str) -> Result<TimeOfDay, AutoSleepError> {
    value.parse().map_err(|_| AutoSleepError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

fn parse_duration(value: &str) -> Result<u32, AutoSleepError> {
    match value.trim().parse::<u32>() {
        Ok(minutes) if (1..=MAX_DURATION_MINUTES).contains(&minutes) => Ok(minutes),
        _ => Err(AutoSleepError::InvalidDuration {
            value: value.to_string(),
        }),
    }
}
