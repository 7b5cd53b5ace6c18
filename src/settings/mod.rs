//! The settings screen's contract with its behavior owner, plus the
//! reference owner used by the binary.

mod auto_sleep;
mod intent;
mod listener;
mod model;
mod view_state;

pub use auto_sleep::{
    AutoSleepDraft, AutoSleepError, AutoSleepSchedule, TimeOfDay, MAX_DURATION_MINUTES,
};
pub use intent::SettingsIntent;
pub use listener::SettingsListener;
pub use model::SettingsModel;
pub use view_state::{SettingsDialog, SettingsViewState, AUTO_REWIND_RANGE, SEEK_TIME_RANGE};
