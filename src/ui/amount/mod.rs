//! Editor for the seek-time and auto-rewind dialogs.
//!
//! Which dialog is shown belongs to the behavior owner; this module only
//! keeps the slider value while one is on screen.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_amount_dialog;
pub use intent::AmountIntent;
pub use reducer::AmountReducer;
pub use state::AmountEditorState;
