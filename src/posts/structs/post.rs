use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::tracking::structs::tracking_id::TrackingId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub tracking_cookie: TrackingId,
    pub posted_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
