//! Auto-sleep configuration dialog.
//!
//! Holds an unsaved draft of the four auto-sleep values while open. The
//! draft is seeded from the view-state on every open and only leaves the
//! dialog through an explicit save.
//!
//! - `state.rs` - dialog state and focusable fields
//! - `intent.rs` - user actions
//! - `reducer.rs` - state transitions
//! - `dialog.rs` - rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_auto_sleep_dialog;
pub use intent::AutoSleepIntent;
pub use reducer::AutoSleepReducer;
pub use state::{AutoSleepDialogState, AutoSleepField};
