/// Marker for locally owned UI state.
///
/// `Default` is the closed/idle state; states are replaced, never mutated
/// in place, so `Clone + PartialEq` makes transitions easy to assert.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
