use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown room type: {0}")]
pub struct ParseRoomTypeError(String);

#[derive(Debug, Error)]
#[error("unknown room status: {0}")]
pub struct ParseRoomStatusError(String);

/// The room categories the hotel rents out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    /// All room types, cheapest tier first.
    pub const ALL: [RoomType; 3] = [RoomType::Single, RoomType::Double, RoomType::Suite];

    /// The amenity line printed for this room category.
    pub fn features(&self) -> &'static str {
        match self {
            RoomType::Single => "One queen bed, workspace",
            RoomType::Double => "Two queen beds, workspace",
            RoomType::Suite => "King bed, living area, mini bar, workspace",
        }
    }

    pub fn max_occupancy(&self) -> u8 {
        match self {
            RoomType::Single => 1,
            RoomType::Double => 2,
            RoomType::Suite => 4,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        };
        write!(f, "{name}")
    }
}

impl FromStr for RoomType {
    type Err = ParseRoomTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(RoomType::Single),
            "double" => Ok(RoomType::Double),
            "suite" => Ok(RoomType::Suite),
            other => Err(ParseRoomTypeError(other.to_string())),
        }
    }
}

/// Whether a room can currently be handed to a guest.
///
/// Stored as the strings `Available` / `Booked`, matching the seed data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Booked,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomStatus::Available => "Available",
            RoomStatus::Booked => "Booked",
        };
        write!(f, "{name}")
    }
}

impl FromStr for RoomStatus {
    type Err = ParseRoomStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(RoomStatus::Available),
            "booked" => Ok(RoomStatus::Booked),
            other => Err(ParseRoomStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub room_type: RoomType,
    pub price: f64,
    pub status: RoomStatus,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }
}
