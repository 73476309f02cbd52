use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use hotel_core::{Booking, BookingStatus, Room, RoomStatus, RoomType};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::seed::parse_seed_file;

/// One line of the availability summary: how many rooms of a (type, price)
/// tier are free right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityRow {
    pub room_type: RoomType,
    pub available_rooms: i64,
    pub price: f64,
}

/// One line of the full room overview shown to guests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewRow {
    pub room_type: RoomType,
    pub price: f64,
    pub available_rooms: i64,
    pub features: &'static str,
    pub max_occupancy: u8,
}

/// SQLite store for rooms and bookings.
///
/// Holds only the database path; every operation opens its own connection
/// inside `spawn_blocking` so the async runtime never blocks on SQLite.
#[derive(Debug, Clone)]
pub struct SqliteRoomStore {
    db_path: PathBuf,
}

impl SqliteRoomStore {
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    async fn with_connection<T, F>(&self, func: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> StoreResult<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = open_connection(&db_path)?;
            func(&mut connection)
        })
        .await
        .map_err(|error| StoreError::Task(error.to_string()))?
    }

    /// Create the schema if it does not exist yet.
    pub async fn init(&self) -> StoreResult<()> {
        self.with_connection(|connection| {
            connection.execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS rooms (
                    id INTEGER PRIMARY KEY,
                    room_type TEXT NOT NULL,
                    price REAL NOT NULL,
                    status TEXT NOT NULL DEFAULT 'Available'
                );

                CREATE TABLE IF NOT EXISTS bookings (
                    id TEXT PRIMARY KEY,
                    room_id INTEGER NOT NULL REFERENCES rooms(id),
                    room_type TEXT NOT NULL,
                    price REAL NOT NULL,
                    guest_name TEXT,
                    status TEXT NOT NULL DEFAULT 'reserved',
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_rooms_status
                    ON rooms(status, room_type);
                "#,
            )?;
            Ok(())
        })
        .await
    }

    /// Replace the rooms table with the contents of a seed CSV.
    /// Returns the number of rooms loaded.
    pub async fn import_csv(&self, path: impl AsRef<Path>) -> StoreResult<usize> {
        let path = path.as_ref().to_path_buf();
        self.with_connection(move |connection| {
            let rooms = parse_seed_file(&path)?;
            let tx = connection.transaction()?;
            tx.execute("DELETE FROM rooms", [])?;
            for room in &rooms {
                tx.execute(
                    "INSERT INTO rooms (id, room_type, price, status) VALUES (?1, ?2, ?3, ?4)",
                    params![
                        room.id,
                        room.room_type.to_string(),
                        room.price,
                        room.status.to_string()
                    ],
                )?;
            }
            tx.commit()?;
            log::info!("seeded {} rooms from CSV", rooms.len());
            Ok(rooms.len())
        })
        .await
    }

    /// All rooms, in id order.
    pub async fn rooms(&self) -> StoreResult<Vec<Room>> {
        self.with_connection(|connection| {
            let mut stmt = connection
                .prepare("SELECT id, room_type, price, status FROM rooms ORDER BY id")?;
            let rows = stmt.query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?;

            let mut rooms = Vec::new();
            for row in rows {
                let (id, room_type, price, status) = row?;
                rooms.push(Room {
                    id,
                    room_type: parse_stored(&room_type)?,
                    price,
                    status: parse_stored(&status)?,
                });
            }
            Ok(rooms)
        })
        .await
    }

    /// Per (type, price) count of available rooms, cheapest first.
    pub async fn availability_summary(&self) -> StoreResult<Vec<AvailabilityRow>> {
        self.with_connection(|connection| {
            let mut stmt = connection.prepare(
                "SELECT room_type, COUNT(*) AS available_rooms, price
                 FROM rooms
                 WHERE status = 'Available'
                 GROUP BY room_type, price
                 ORDER BY price",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, f64>(2)?,
                ))
            })?;

            let mut summary = Vec::new();
            for row in rows {
                let (room_type, available_rooms, price) = row?;
                summary.push(AvailabilityRow {
                    room_type: parse_stored(&room_type)?,
                    available_rooms,
                    price,
                });
            }
            Ok(summary)
        })
        .await
    }

    /// Ids and prices of available rooms of one type, lowest id first.
    pub async fn available_rooms_of_type(
        &self,
        room_type: RoomType,
    ) -> StoreResult<Vec<(i64, f64)>> {
        self.with_connection(move |connection| {
            let mut stmt = connection.prepare(
                "SELECT id, price FROM rooms
                 WHERE room_type = ?1 AND status = 'Available'
                 ORDER BY id",
            )?;
            let rows = stmt.query_map(params![room_type.to_string()], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, f64>(1)?))
            })?;
            rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
        })
        .await
    }

    /// Available rooms grouped by (type, price) inside an inclusive price band.
    pub async fn rooms_in_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> StoreResult<Vec<AvailabilityRow>> {
        self.with_connection(move |connection| {
            let mut stmt = connection.prepare(
                "SELECT room_type, price, COUNT(*) AS room_count
                 FROM rooms
                 WHERE status = 'Available' AND price BETWEEN ?1 AND ?2
                 GROUP BY room_type, price
                 ORDER BY price",
            )?;
            let rows = stmt.query_map(params![min_price, max_price], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, f64>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })?;

            let mut bands = Vec::new();
            for row in rows {
                let (room_type, price, room_count) = row?;
                bands.push(AvailabilityRow {
                    room_type: parse_stored(&room_type)?,
                    available_rooms: room_count,
                    price,
                });
            }
            Ok(bands)
        })
        .await
    }

    /// The single cheapest available (type, price), if any room is free.
    pub async fn cheapest_available(&self) -> StoreResult<Option<(RoomType, f64)>> {
        self.with_connection(|connection| {
            let row = connection
                .query_row(
                    "SELECT room_type, price FROM rooms
                     WHERE status = 'Available'
                     ORDER BY price ASC
                     LIMIT 1",
                    [],
                    |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)),
                )
                .optional()?;
            match row {
                Some((room_type, price)) => Ok(Some((parse_stored(&room_type)?, price))),
                None => Ok(None),
            }
        })
        .await
    }

    /// Availability counts joined with the per-type feature and occupancy
    /// tables, cheapest first.
    pub async fn room_overview(&self) -> StoreResult<Vec<OverviewRow>> {
        let summary = self.availability_summary().await?;
        Ok(summary
            .into_iter()
            .map(|row| OverviewRow {
                room_type: row.room_type,
                price: row.price,
                available_rooms: row.available_rooms,
                features: row.room_type.features(),
                max_occupancy: row.room_type.max_occupancy(),
            })
            .collect())
    }

    /// Mark a room booked and record the booking, atomically.
    ///
    /// The room's status is re-checked inside the transaction, so a guest
    /// confirming a stale proposal gets `RoomUnavailable` rather than a
    /// double booking.
    pub async fn reserve_room(
        &self,
        room_id: i64,
        guest_name: Option<String>,
    ) -> StoreResult<Booking> {
        self.with_connection(move |connection| {
            let tx = connection.transaction()?;

            let room = tx
                .query_row(
                    "SELECT room_type, price, status FROM rooms WHERE id = ?1",
                    params![room_id],
                    |row| {
                        Ok((
                            row.get::<_, String>(0)?,
                            row.get::<_, f64>(1)?,
                            row.get::<_, String>(2)?,
                        ))
                    },
                )
                .optional()?;
            let (room_type, price, status) = match room {
                Some(room) => room,
                None => return Err(StoreError::RoomUnavailable(room_id)),
            };
            if parse_stored::<RoomStatus>(&status)? != RoomStatus::Available {
                return Err(StoreError::RoomUnavailable(room_id));
            }

            let booking = Booking::new(room_id, parse_stored(&room_type)?, price, guest_name);
            tx.execute(
                "UPDATE rooms SET status = 'Booked' WHERE id = ?1",
                params![room_id],
            )?;
            tx.execute(
                "INSERT INTO bookings
                     (id, room_id, room_type, price, guest_name, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    booking.id.to_string(),
                    booking.room_id,
                    booking.room_type.to_string(),
                    booking.price,
                    booking.guest_name,
                    booking.status.to_string(),
                    booking.created_at.to_rfc3339(),
                    booking.updated_at.to_rfc3339(),
                ],
            )?;
            tx.commit()?;

            log::info!("reserved room {room_id} under booking {}", booking.id);
            Ok(booking)
        })
        .await
    }

    /// Cancel a reserved booking and free its room.
    pub async fn cancel_booking(&self, booking_id: Uuid) -> StoreResult<Booking> {
        self.transition_booking(
            booking_id,
            BookingStatus::Reserved,
            BookingStatus::Cancelled,
            "cancel",
        )
        .await
    }

    pub async fn check_in(&self, booking_id: Uuid) -> StoreResult<Booking> {
        self.transition_booking(
            booking_id,
            BookingStatus::Reserved,
            BookingStatus::CheckedIn,
            "check in",
        )
        .await
    }

    pub async fn check_out(&self, booking_id: Uuid) -> StoreResult<Booking> {
        self.transition_booking(
            booking_id,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            "check out",
        )
        .await
    }

    pub async fn booking(&self, booking_id: Uuid) -> StoreResult<Option<Booking>> {
        self.with_connection(move |connection| load_booking(connection, booking_id))
            .await
    }

    /// All bookings, newest first.
    pub async fn bookings(&self) -> StoreResult<Vec<Booking>> {
        self.with_connection(|connection| {
            let mut stmt = connection.prepare(
                "SELECT id, room_id, room_type, price, guest_name, status, created_at, updated_at
                 FROM bookings
                 ORDER BY created_at DESC",
            )?;
            let rows = stmt.query_map([], booking_columns)?;

            let mut bookings = Vec::new();
            for row in rows {
                bookings.push(booking_from_columns(row?)?);
            }
            Ok(bookings)
        })
        .await
    }

    async fn transition_booking(
        &self,
        booking_id: Uuid,
        expected: BookingStatus,
        next: BookingStatus,
        action: &'static str,
    ) -> StoreResult<Booking> {
        self.with_connection(move |connection| {
            let tx = connection.transaction()?;

            let mut booking = match load_booking(&tx, booking_id)? {
                Some(booking) => booking,
                None => return Err(StoreError::BookingNotFound(booking_id)),
            };
            if booking.status != expected {
                return Err(StoreError::InvalidBookingState {
                    status: booking.status,
                    action,
                });
            }

            booking.status = next;
            booking.updated_at = Utc::now();
            tx.execute(
                "UPDATE bookings SET status = ?1, updated_at = ?2 WHERE id = ?3",
                params![
                    booking.status.to_string(),
                    booking.updated_at.to_rfc3339(),
                    booking.id.to_string(),
                ],
            )?;
            if !booking.status.holds_room() {
                tx.execute(
                    "UPDATE rooms SET status = 'Available' WHERE id = ?1",
                    params![booking.room_id],
                )?;
            }
            tx.commit()?;

            log::info!("booking {} moved to {}", booking.id, booking.status);
            Ok(booking)
        })
        .await
    }
}

type BookingColumns = (
    String,
    i64,
    String,
    f64,
    Option<String>,
    String,
    String,
    String,
);

fn booking_columns(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookingColumns> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
    ))
}

fn booking_from_columns(columns: BookingColumns) -> StoreResult<Booking> {
    let (id, room_id, room_type, price, guest_name, status, created_at, updated_at) = columns;
    Ok(Booking {
        id: Uuid::parse_str(&id).map_err(|e| StoreError::InvalidData(e.to_string()))?,
        room_id,
        room_type: parse_stored(&room_type)?,
        price,
        guest_name,
        status: parse_stored(&status)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

fn load_booking(connection: &Connection, booking_id: Uuid) -> StoreResult<Option<Booking>> {
    let columns = connection
        .query_row(
            "SELECT id, room_id, room_type, price, guest_name, status, created_at, updated_at
             FROM bookings WHERE id = ?1",
            params![booking_id.to_string()],
            booking_columns,
        )
        .optional()?;
    columns.map(booking_from_columns).transpose()
}

fn parse_stored<T>(value: &str) -> StoreResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| StoreError::InvalidData(e.to_string()))
}

fn parse_timestamp(value: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidData(e.to_string()))
}

fn open_connection(db_path: &Path) -> StoreResult<Connection> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let connection = Connection::open(db_path)?;
    connection.pragma_update(None, "foreign_keys", "ON")?;
    connection.busy_timeout(std::time::Duration::from_secs(5))?;
    Ok(connection)
}
