//! Tracking data structures.

/// Operating system backed random source.
pub mod os_random_source;

/// A `<originalId>_<digest>` identifier.
pub mod tracking_id;

/// Issues and validates identifiers.
pub mod tracking_manager;

/// Result of ensuring a request carries a valid identifier.
pub mod tracking_outcome;
