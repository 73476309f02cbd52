use hotel_core::RoomType;
use room_store::{SqliteRoomStore, StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flow::BookingFlow;
use crate::intent::{self, Intent};

/// What kind of reply the engine produced. Booking-control kinds drive the
/// confirm flow and are rendered verbatim; the rest may be rewritten by the
/// LLM layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    BookingProposed,
    BookingConfirmed,
    BookingCancelled,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineReply {
    pub kind: ReplyKind,
    pub message: String,
}

impl EngineReply {
    fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Error,
            message: message.into(),
        }
    }
}

/// Data-backed reply engine for one conversation.
///
/// Holds the booking flow state, so each chat session gets its own engine
/// over the shared store.
#[derive(Debug, Clone)]
pub struct HotelEngine {
    store: SqliteRoomStore,
    flow: BookingFlow,
    last_booking: Option<Uuid>,
}

impl HotelEngine {
    pub fn new(store: SqliteRoomStore) -> Self {
        Self {
            store,
            flow: BookingFlow::new(),
            last_booking: None,
        }
    }

    /// The booking confirmed in this conversation, if any.
    pub fn last_booking(&self) -> Option<Uuid> {
        self.last_booking
    }

    pub fn flow_state(&self) -> crate::flow::FlowState {
        self.flow.state()
    }

    /// Answer one line of guest input from the data layer.
    pub async fn handle(&mut self, input: &str) -> StoreResult<EngineReply> {
        match intent::parse(input) {
            Intent::BookRoom { room_type } => self.handle_booking_request(room_type).await,
            Intent::Confirm => self.handle_confirmation().await,
            Intent::Decline => Ok(self.handle_decline()),
            Intent::CheckIn => self.handle_check_in().await,
            Intent::CheckOut => self.handle_check_out().await,
            Intent::Availability { room_type } => self.handle_availability(room_type).await,
            Intent::Price { cheapest } => self.handle_price(cheapest).await,
            Intent::Features => self.handle_features().await,
            Intent::Info => self.handle_info().await,
            Intent::Help => Ok(help()),
        }
    }

    async fn handle_booking_request(
        &mut self,
        room_type: Option<RoomType>,
    ) -> StoreResult<EngineReply> {
        let Some(room_type) = room_type else {
            return Ok(EngineReply::error(
                "What type of room would you like to book? (Single, Double, or Suite)",
            ));
        };

        let rooms = self.store.available_rooms_of_type(room_type).await?;
        match rooms.first() {
            Some(&(room_id, price)) => {
                self.flow.propose(room_id, room_type, price);
                Ok(EngineReply {
                    kind: ReplyKind::BookingProposed,
                    message: format!(
                        "I found a {room_type} room available for {} per night. \
                         Would you like to confirm this booking? (yes/no)",
                        money(price)
                    ),
                })
            }
            None => Ok(EngineReply::error(format!(
                "I apologize, but there are no {room_type} rooms available at the moment."
            ))),
        }
    }

    async fn handle_confirmation(&mut self) -> StoreResult<EngineReply> {
        let Some(pending) = self.flow.take_pending() else {
            // a bare "yes" with nothing proposed
            return Ok(help());
        };

        match self.store.reserve_room(pending.room_id, None).await {
            Ok(booking) => {
                self.last_booking = Some(booking.id);
                Ok(EngineReply {
                    kind: ReplyKind::BookingConfirmed,
                    message: format!(
                        "Great! I've booked your {} room. The total cost is {} per night. \
                         Your booking reference is {}. Thank you for choosing our hotel!",
                        booking.room_type,
                        money(booking.price),
                        booking.id
                    ),
                })
            }
            // someone else took the room between proposal and confirmation
            Err(StoreError::RoomUnavailable(_)) => Ok(EngineReply::error(format!(
                "I'm sorry, that {} room was just taken. Would you like me to look again?",
                pending.room_type
            ))),
            Err(e) => Err(e),
        }
    }

    fn handle_decline(&mut self) -> EngineReply {
        self.flow.clear();
        EngineReply {
            kind: ReplyKind::BookingCancelled,
            message: "Booking cancelled. Is there anything else I can help you with?".to_string(),
        }
    }

    async fn handle_check_in(&mut self) -> StoreResult<EngineReply> {
        let Some(booking_id) = self.last_booking else {
            return Ok(EngineReply::info(
                "I don't have a booking on file for this conversation. \
                 Would you like to book a room first?",
            ));
        };

        match self.store.check_in(booking_id).await {
            Ok(booking) => Ok(EngineReply::info(format!(
                "You're checked in to your {} room. Enjoy your stay!",
                booking.room_type
            ))),
            Err(StoreError::InvalidBookingState { status, .. }) => Ok(EngineReply::error(
                format!("I can't check you in: your booking is {status}."),
            )),
            Err(StoreError::BookingNotFound(_)) => Ok(EngineReply::error(
                "I couldn't find that booking anymore. Would you like to book a room?",
            )),
            Err(e) => Err(e),
        }
    }

    async fn handle_check_out(&mut self) -> StoreResult<EngineReply> {
        let Some(booking_id) = self.last_booking else {
            return Ok(EngineReply::info(
                "I don't have a booking on file for this conversation. \
                 Would you like to book a room first?",
            ));
        };

        match self.store.check_out(booking_id).await {
            Ok(_) => {
                self.last_booking = None;
                Ok(EngineReply::info(
                    "You're all checked out. We hope you enjoyed your stay!",
                ))
            }
            Err(StoreError::InvalidBookingState { status, .. }) => Ok(EngineReply::error(
                format!("I can't check you out: your booking is {status}."),
            )),
            Err(StoreError::BookingNotFound(_)) => Ok(EngineReply::error(
                "I couldn't find that booking anymore. Would you like to book a room?",
            )),
            Err(e) => Err(e),
        }
    }

    async fn handle_availability(
        &mut self,
        room_type: Option<RoomType>,
    ) -> StoreResult<EngineReply> {
        if let Some(room_type) = room_type {
            let rooms = self.store.available_rooms_of_type(room_type).await?;
            return Ok(match rooms.first() {
                Some(&(_, price)) => EngineReply::info(format!(
                    "Yes, we have {} {room_type} room(s) available at {} per night.",
                    rooms.len(),
                    money(price)
                )),
                None => EngineReply::info(format!(
                    "Sorry, there are no available {room_type} rooms at the moment."
                )),
            });
        }

        let summary = self.store.availability_summary().await?;
        if summary.is_empty() {
            return Ok(EngineReply::info(
                "Sorry, there are no available rooms at the moment.",
            ));
        }
        let lines: Vec<String> = summary
            .iter()
            .map(|row| {
                format!(
                    "{}: {} room(s) at {}",
                    row.room_type,
                    row.available_rooms,
                    money(row.price)
                )
            })
            .collect();
        Ok(EngineReply::info(format!(
            "Available rooms:\n{}",
            lines.join("\n")
        )))
    }

    async fn handle_price(&mut self, cheapest: bool) -> StoreResult<EngineReply> {
        if cheapest {
            if let Some((room_type, price)) = self.store.cheapest_available().await? {
                return Ok(EngineReply::info(format!(
                    "Our most economical option is a {room_type} room at {} per night.",
                    money(price)
                )));
            }
            return Ok(help());
        }

        let overview = self.store.room_overview().await?;
        if overview.is_empty() {
            return Ok(help());
        }
        let lines: Vec<String> = overview
            .iter()
            .map(|row| format!("{} ({}): {}", row.room_type, money(row.price), row.features))
            .collect();
        Ok(EngineReply::info(format!(
            "Room prices and features:\n{}",
            lines.join("\n")
        )))
    }

    async fn handle_features(&mut self) -> StoreResult<EngineReply> {
        let overview = self.store.room_overview().await?;
        if overview.is_empty() {
            return Ok(help());
        }
        let lines: Vec<String> = overview
            .iter()
            .map(|row| format!("{} ({}): {}", row.room_type, money(row.price), row.features))
            .collect();
        Ok(EngineReply::info(format!(
            "Room features:\n{}",
            lines.join("\n")
        )))
    }

    async fn handle_info(&mut self) -> StoreResult<EngineReply> {
        let overview = self.store.room_overview().await?;
        if overview.is_empty() {
            return Ok(help());
        }
        let blocks: Vec<String> = overview
            .iter()
            .map(|row| {
                format!(
                    "{} - {}/night\n  Available: {} room(s)\n  Features: {}\n  Max Occupancy: {} people",
                    row.room_type,
                    money(row.price),
                    row.available_rooms,
                    row.features,
                    row.max_occupancy
                )
            })
            .collect();
        Ok(EngineReply::info(format!(
            "Room Details:\n{}",
            blocks.join("\n")
        )))
    }
}

fn help() -> EngineReply {
    EngineReply::info(
        "How can I help you today? You can ask about:\n\
         - Room availability\n\
         - Room prices and features\n\
         - Book a room\n\
         - Room details and information",
    )
}

fn money(price: f64) -> String {
    format!("${price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formats_two_decimals() {
        assert_eq!(money(100.0), "$100.00");
        assert_eq!(money(99.5), "$99.50");
    }
}
