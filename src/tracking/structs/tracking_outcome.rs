use chrono::{DateTime, Utc};
use crate::tracking::structs::tracking_id::TrackingId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingOutcome {
    pub tracking_id: TrackingId,
    pub should_set_cookie: bool,
    pub expires: Option<DateTime<Utc>>,
}
