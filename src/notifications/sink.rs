//! Toast sink trait definition.

use super::Toast;

/// Trait for toast destinations.
///
/// Sinks are shared behind `Arc` and take `&self`; implementations that keep
/// state use interior mutability.
pub trait ToastSink: Send + Sync {
    /// Sink name (for logging)
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool {
        true
    }

    /// Deliver one toast. Must not fail the caller.
    fn push(&self, toast: &Toast);
}
