//! Marker trait for intents.

/// An intent describes a requested state transition.
///
/// Intents come from key presses, pastes and replayed scripts, and
/// carry only the payload their transition needs.
pub trait Intent: Send + 'static {}
