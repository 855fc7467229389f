use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use chrono::{Duration, Utc};
use log::debug;
use crate::security::security::constant_time_eq;
use crate::tracking::errors::TrackingError;
use crate::tracking::structs::os_random_source::OsRandomSource;
use crate::tracking::structs::tracking_id::TrackingId;
use crate::tracking::structs::tracking_manager::TrackingManager;
use crate::tracking::structs::tracking_outcome::TrackingOutcome;
use crate::tracking::traits::random_source::RandomSource;
use crate::tracking::tracking::{keyed_digest, TRACKING_COOKIE_LIFETIME_HOURS, TRACKING_ID_SEPARATOR, TRACKING_SEED_BYTES};

impl TrackingManager {
    pub fn new(pepper: impl Into<String>) -> TrackingManager
    {
        Self::with_random_source(pepper, Arc::new(OsRandomSource))
    }

    pub fn with_random_source(pepper: impl Into<String>, random_source: Arc<dyn RandomSource>) -> TrackingManager
    {
        TrackingManager {
            pepper: pepper.into(),
            random_source,
        }
    }

    /// Returns the presented identifier when it is valid for `user_name`,
    /// otherwise issues a fresh one that the caller has to write back.
    pub fn ensure_tracking_id(&self, presented: Option<&str>, user_name: &str) -> Result<TrackingOutcome, TrackingError>
    {
        if let Some(tracking_id) = presented.filter(|value| !value.is_empty()) {
            if self.validate(tracking_id, user_name) {
                return Ok(TrackingOutcome {
                    tracking_id: TrackingId(tracking_id.to_string()),
                    should_set_cookie: false,
                    expires: None,
                });
            }
            debug!("[TRACKING] Presented identifier rejected, issuing a new one");
        }
        self.issue(user_name)
    }

    pub fn issue(&self, user_name: &str) -> Result<TrackingOutcome, TrackingError>
    {
        let mut seed = [0u8; TRACKING_SEED_BYTES];
        self.random_source.fill_bytes(&mut seed)?;
        let original_id = u64::from_be_bytes(seed).to_string();
        let digest = keyed_digest(&original_id, user_name, &self.pepper);

        Ok(TrackingOutcome {
            tracking_id: TrackingId(format!("{original_id}{TRACKING_ID_SEPARATOR}{digest}")),
            should_set_cookie: true,
            expires: Some(Utc::now() + Duration::hours(TRACKING_COOKIE_LIFETIME_HOURS)),
        })
    }

    pub fn validate(&self, tracking_id: &str, user_name: &str) -> bool
    {
        let Some((original_id, digest)) = tracking_id.split_once(TRACKING_ID_SEPARATOR) else {
            return false;
        };
        if original_id.is_empty() || digest.is_empty() || digest.contains(TRACKING_ID_SEPARATOR) {
            return false;
        }
        constant_time_eq(&keyed_digest(original_id, user_name, &self.pepper), digest)
    }

    pub fn digest(&self, original_id: &str, user_name: &str) -> String
    {
        keyed_digest(original_id, user_name, &self.pepper)
    }
}

impl fmt::Debug for TrackingManager {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("TrackingManager")
            .field("pepper", &"<redacted>")
            .finish()
    }
}
