use crate::tracking::structs::tracking_id::TrackingId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub content: String,
    pub tracking_cookie: TrackingId,
    pub posted_by: String,
}
