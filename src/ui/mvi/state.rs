//! Marker trait for UI state snapshots.

/// Snapshots are cloned rather than shared, compared to detect changes,
/// and start from `Default` when a component mounts.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
