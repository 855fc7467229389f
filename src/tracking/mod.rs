//! Tracking identifier issuance and validation.
//!
//! Every visitor carries a pseudo-anonymous identifier in the `tracking_id`
//! cookie. An identifier has the shape `<originalId>_<digest>` where
//! `originalId` is a decimal `u64` drawn from the operating system's secure
//! random source and `digest` is the lowercase hex SHA-1 of
//! `originalId ++ userName ++ pepper`.
//!
//! An identifier is only valid for the user name it was issued to, so it can
//! neither be forged without the pepper nor moved to another account. There is
//! no server side state: the identifier is verified offline on each request and
//! simply expires with its cookie after 24 hours.
//!
//! # Example
//!
//! ```rust,ignore
//! use secret_board::tracking::structs::tracking_manager::TrackingManager;
//!
//! let manager = TrackingManager::new("a long process wide pepper");
//! let outcome = manager.ensure_tracking_id(cookie_value, "alice")?;
//! if outcome.should_set_cookie {
//!     // write outcome.tracking_id with outcome.expires
//! }
//! ```

/// Tracking errors.
pub mod errors;

/// Tracking data structures.
pub mod structs;

/// Implementation blocks for tracking types.
pub mod impls;

/// Random source abstraction.
pub mod traits;

/// Digest computation and tracking constants.
#[allow(clippy::module_inception)]
pub mod tracking;
