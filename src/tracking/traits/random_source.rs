use crate::tracking::errors::TrackingError;

/// Fills buffers with cryptographically secure random bytes.
///
/// Implementations must be safe to share between request workers. A failure
/// is fatal for the request: callers never fall back to a weaker generator.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    fn fill_bytes(&self, buffer: &mut [u8]) -> Result<(), TrackingError>;
}
