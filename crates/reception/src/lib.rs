//! reception - The receptionist brain
//!
//! Guest text flows through intent parsing ([`intent`]), the data-backed
//! reply engine ([`engine`]) with its booking flow ([`flow`]), and finally
//! the LLM rewrite ([`Receptionist`]) that turns data into conversation.

pub mod engine;
pub mod flow;
pub mod intent;
pub mod prompt;
pub mod receptionist;
pub mod transcript;

pub use engine::{EngineReply, HotelEngine, ReplyKind};
pub use flow::{BookingFlow, FlowState, PendingBooking};
pub use intent::Intent;
pub use receptionist::{Receptionist, FAREWELL, GREETING};
pub use transcript::TranscriptStore;
