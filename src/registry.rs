//! Process-wide registry: identifier allocation and the id→session map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::common::{AttackResult, GameError, PlayerId};
use crate::field::{Field, FleetSummary};
use crate::matchmaker::{Matchmaker, ParityMatchmaker, Placement};
use crate::session::{Session, Slot};

/// Answer to a pairing poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairStatus {
    /// Both slots are filled; carries the opponent's identifier.
    Paired(PlayerId),
    /// No partner yet; poll again.
    Pending,
}

type SessionHandle = Arc<Mutex<Session>>;

/// A registered player's seat: its session and slot within it.
struct Seat {
    session: SessionHandle,
    slot: Slot,
}

struct Lobby {
    next_id: PlayerId,
    waiting: Option<SessionHandle>,
    seats: HashMap<PlayerId, Seat>,
    matchmaker: Box<dyn Matchmaker>,
}

/// The engine façade: the four operations callers invoke.
///
/// All methods take `&self` and are safe under concurrent invocation. The
/// lobby lock serializes identifier allocation, pairing and lookups; each
/// session carries its own lock, so grid mutation and the finish transition
/// are serialized per game. Lock order is always lobby before session.
///
/// State is held for the life of the process; sessions are never torn down.
pub struct GameServer {
    lobby: Mutex<Lobby>,
}

impl GameServer {
    pub fn new() -> Self {
        Self::with_matchmaker(Box::new(ParityMatchmaker))
    }

    pub fn with_matchmaker(matchmaker: Box<dyn Matchmaker>) -> Self {
        GameServer {
            lobby: Mutex::new(Lobby {
                next_id: 0,
                waiting: None,
                seats: HashMap::new(),
                matchmaker,
            }),
        }
    }

    /// Allocate the next identifier and seat it per the pairing policy.
    /// Registration always succeeds.
    pub fn register(&self) -> PlayerId {
        let mut lobby = self.lobby.lock().unwrap();
        let id = lobby.next_id;
        lobby.next_id += 1;
        let joinable = match lobby.matchmaker.place(id) {
            Placement::JoinWaiting => lobby.waiting.take(),
            Placement::OpenNew => None,
        };
        let seat = match joinable {
            Some(session) => {
                session.lock().unwrap().join(id);
                Seat { session, slot: 1 }
            }
            None => {
                // OpenNew, or a join policy with nobody waiting.
                let session = Arc::new(Mutex::new(Session::open(id)));
                lobby.waiting = Some(Arc::clone(&session));
                Seat { session, slot: 0 }
            }
        };
        lobby.seats.insert(id, seat);
        id
    }

    fn seat(&self, id: PlayerId) -> Result<(SessionHandle, Slot), GameError> {
        let lobby = self.lobby.lock().unwrap();
        lobby
            .seats
            .get(&id)
            .map(|seat| (Arc::clone(&seat.session), seat.slot))
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// Opponent identifier for `id`, or `Pending` while unpaired. A pure,
    /// non-blocking read; callers poll it.
    pub fn status(&self, id: PlayerId) -> Result<PairStatus, GameError> {
        let (session, slot) = self.seat(id)?;
        let session = session.lock().unwrap();
        Ok(match session.opponent_of(slot) {
            Some(opponent) => PairStatus::Paired(opponent),
            None => PairStatus::Pending,
        })
    }

    /// Validate `matrix` and store the resulting fleet in `id`'s slot.
    pub fn submit_field(
        &self,
        id: PlayerId,
        matrix: &[Vec<u8>],
    ) -> Result<FleetSummary, GameError> {
        let (session, slot) = self.seat(id)?;
        let field = Field::from_matrix(matrix)?;
        let summary = field.summary();
        session.lock().unwrap().set_field(slot, field)?;
        Ok(summary)
    }

    /// Fire at `(x, y)` on the opponent's field.
    pub fn attack(&self, id: PlayerId, x: usize, y: usize) -> Result<AttackResult, GameError> {
        let (session, slot) = self.seat(id)?;
        let result = session.lock().unwrap().attack(slot, x, y);
        result
    }
}

impl Default for GameServer {
    fn default() -> Self {
        Self::new()
    }
}
