/// Marker trait for intents.
///
/// Intents are either user actions (typing, choosing a tone, submitting)
/// or system events (a generation request finishing, a timer tick).
pub trait Intent: Send + 'static {}
