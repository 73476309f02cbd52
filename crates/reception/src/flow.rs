use hotel_core::RoomType;
use serde::{Deserialize, Serialize};

/// A proposed booking waiting for the guest's yes/no.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingBooking {
    pub room_id: i64,
    pub room_type: RoomType,
    pub price: f64,
}

/// States of the per-conversation booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    /// No booking in flight.
    Idle,
    /// A room has been proposed; the next "yes" books it.
    AwaitingConfirmation(PendingBooking),
}

/// Tiny state machine holding the one piece of conversational state the
/// original flow carries: which room a "yes" would book.
#[derive(Debug, Clone, Default)]
pub struct BookingFlow {
    state: Option<PendingBooking>,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        match self.state {
            Some(pending) => FlowState::AwaitingConfirmation(pending),
            None => FlowState::Idle,
        }
    }

    /// Record a proposal; any previous pending proposal is superseded.
    pub fn propose(&mut self, room_id: i64, room_type: RoomType, price: f64) {
        self.state = Some(PendingBooking {
            room_id,
            room_type,
            price,
        });
    }

    /// Take the pending proposal to act on a confirmation.
    /// Returns `None` when nothing was proposed.
    pub fn take_pending(&mut self) -> Option<PendingBooking> {
        self.state.take()
    }

    /// Drop any pending proposal (guest declined).
    pub fn clear(&mut self) {
        self.state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let flow = BookingFlow::new();
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn propose_then_take() {
        let mut flow = BookingFlow::new();
        flow.propose(3, RoomType::Double, 150.0);
        assert!(matches!(flow.state(), FlowState::AwaitingConfirmation(_)));

        let pending = flow.take_pending().unwrap();
        assert_eq!(pending.room_id, 3);
        assert_eq!(flow.state(), FlowState::Idle);
        assert!(flow.take_pending().is_none());
    }

    #[test]
    fn a_new_proposal_supersedes_the_old_one() {
        let mut flow = BookingFlow::new();
        flow.propose(1, RoomType::Single, 100.0);
        flow.propose(5, RoomType::Suite, 300.0);
        assert_eq!(flow.take_pending().unwrap().room_id, 5);
    }

    #[test]
    fn clear_drops_the_proposal() {
        let mut flow = BookingFlow::new();
        flow.propose(1, RoomType::Single, 100.0);
        flow.clear();
        assert_eq!(flow.state(), FlowState::Idle);
    }
}
