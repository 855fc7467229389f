use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}
