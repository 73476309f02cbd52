//! room_store - SQLite-backed room and booking store
//!
//! All database access goes through [`SqliteRoomStore`], which opens a
//! connection per operation on a blocking thread so async callers never
//! hold one across an await point.

mod error;
mod seed;
mod store;

pub use error::{StoreError, StoreResult};
pub use seed::parse_seed_file;
pub use store::{AvailabilityRow, OverviewRow, SqliteRoomStore};
