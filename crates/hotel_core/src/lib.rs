//! hotel_core - Core types and configuration for the hotel receptionist
//!
//! This crate provides the foundational types used across all frontdesk crates:
//! - `room` - Room, RoomType, RoomStatus
//! - `booking` - Booking lifecycle records
//! - `message` - Chat transcript types
//! - `config` - Layered configuration (file + environment)
//! - `paths` - Per-user data directory layout

pub mod booking;
pub mod config;
pub mod message;
pub mod paths;
pub mod room;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use config::Config;
pub use message::{Message, Role};
pub use room::{Room, RoomStatus, RoomType};
