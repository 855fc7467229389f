use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;
use crate::database::errors::DatabaseError;
use crate::tracking::errors::TrackingError;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("unsupported request: {0}")]
    BadRequest(String),

    #[error("not permitted")]
    Forbidden,

    #[error("post not found")]
    NotFound,

    #[error("tracking error: {0}")]
    Tracking(#[from] TrackingError),

    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("cookie error: {0}")]
    Cookie(String),
}

impl ResponseError for BoardError {
    fn status_code(&self) -> StatusCode {
        match self {
            BoardError::BadRequest(_) => StatusCode::BAD_REQUEST,
            BoardError::Forbidden => StatusCode::FORBIDDEN,
            BoardError::NotFound => StatusCode::NOT_FOUND,
            BoardError::Tracking(_) | BoardError::Database(_) | BoardError::Cookie(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("[HTTP] {self}");
            sentry::capture_error(self);
            return HttpResponse::build(status)
                .content_type(ContentType::plaintext())
                .body("internal server error");
        }
        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
