use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::room::RoomType;

#[derive(Debug, Error)]
#[error("unknown booking status: {0}")]
pub struct ParseBookingStatusError(String);

/// Lifecycle of a guest booking.
///
/// `Reserved` and `CheckedIn` bookings hold their room in `Booked` status;
/// cancelling or checking out releases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Reserved,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    /// Whether the booking still occupies its room.
    pub fn holds_room(&self) -> bool {
        matches!(self, BookingStatus::Reserved | BookingStatus::CheckedIn)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStatus::Reserved => "reserved",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BookingStatus {
    type Err = ParseBookingStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reserved" => Ok(BookingStatus::Reserved),
            "checked_in" => Ok(BookingStatus::CheckedIn),
            "checked_out" => Ok(BookingStatus::CheckedOut),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(ParseBookingStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub room_id: i64,
    pub room_type: RoomType,
    pub price: f64,
    pub guest_name: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(room_id: i64, room_type: RoomType, price: f64, guest_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            room_id,
            room_type,
            price,
            guest_name,
            status: BookingStatus::Reserved,
            created_at: now,
            updated_at: now,
        }
    }
}
