//! Wire messages for the four engine operations.
//!
//! Transport, routing and payload parsing stay outside the engine; these
//! types are what a transport relays verbatim between callers and the
//! registry.

use serde::{Deserialize, Serialize};

use crate::common::{AttackResult, GameError, PlayerId};
use crate::field::FleetSummary;
use crate::registry::PairStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// Allocate a new player identifier.
    Register,
    /// Poll for the opponent of `player`.
    Status { player: PlayerId },
    /// Submit the occupancy matrix for `player`. The outer index selects x.
    SubmitField { player: PlayerId, field: Vec<Vec<u8>> },
    /// Fire at `(x, y)` on the opponent of `player`.
    Attack { player: PlayerId, x: u8, y: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    Registered { player: PlayerId },
    Status(PairStatus),
    FieldAccepted(FleetSummary),
    Attack(AttackResult),
    Rejected(GameError),
}
