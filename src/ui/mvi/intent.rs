/// Marker for local state-machine inputs (key presses already decoded
/// into meaning, seeding requests, confirmations).
pub trait Intent: Send + 'static {}
