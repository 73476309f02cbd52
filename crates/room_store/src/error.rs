use hotel_core::BookingStatus;
use thiserror::Error;
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid seed data: {0}")]
    InvalidSeed(String),

    #[error("invalid stored data: {0}")]
    InvalidData(String),

    #[error("storage task join error: {0}")]
    Task(String),

    #[error("room {0} is not available")]
    RoomUnavailable(i64),

    #[error("booking {0} not found")]
    BookingNotFound(Uuid),

    #[error("booking is {status}, cannot {action}")]
    InvalidBookingState {
        status: BookingStatus,
        action: &'static str,
    },
}
