use std::sync::Arc;
use crate::tracking::traits::random_source::RandomSource;

pub struct TrackingManager {
    pub(crate) pepper: String,
    pub(crate) random_source: Arc<dyn RandomSource>,
}
