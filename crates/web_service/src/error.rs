use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use room_store::StoreError;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session '{0}' not found")]
    SessionNotFound(Uuid),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    r#type: String,
}

#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::BookingNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::RoomUnavailable(_)) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::InvalidBookingState { .. }) => StatusCode::CONFLICT,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_response = JsonErrorWrapper {
            error: JsonError {
                message: self.to_string(),
                r#type: "api_error".to_string(),
            },
        };
        HttpResponse::build(self.status_code()).json(error_response)
    }
}
