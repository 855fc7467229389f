use crate::tracking::errors::TrackingError;
use crate::tracking::structs::os_random_source::OsRandomSource;
use crate::tracking::traits::random_source::RandomSource;

impl RandomSource for OsRandomSource {
    fn fill_bytes(&self, buffer: &mut [u8]) -> Result<(), TrackingError> {
        getrandom::fill(buffer).map_err(|error| TrackingError::RandomSourceUnavailable(error.to_string()))
    }
}
