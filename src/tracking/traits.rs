//! Tracking traits.

/// Source of cryptographically secure random bytes.
pub mod random_source;
