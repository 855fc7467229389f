//! Security helpers shared by the tracking and http layers.

#[allow(clippy::module_inception)]
pub mod security;
