use std::fmt;
use std::fmt::Formatter;
use crate::tracking::structs::tracking_id::TrackingId;
use crate::tracking::tracking::TRACKING_ID_SEPARATOR;

impl TrackingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Random part of the identifier, shown next to posts.
    pub fn original_id(&self) -> &str {
        match self.0.split_once(TRACKING_ID_SEPARATOR) {
            Some((original_id, _)) => original_id,
            None => &self.0,
        }
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TrackingId {
    fn from(value: String) -> Self {
        TrackingId(value)
    }
}
