/// Marker trait for UI state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and carry all data the view needs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
