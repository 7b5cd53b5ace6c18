//! Unidirectional state primitives for the screen's local state.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ UiState ──→ ScreenTree
//! ```
//!
//! Only state the screen owns goes through here (dialog drafts, editor
//! values). The view-state is owned elsewhere and never reduced locally.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
