//! Session lifecycle: two slots, fleet submission, attack dispatch and the
//! win transition.

use crate::common::{AttackResult, GameError, PlayerId, ShotResult};
use crate::field::Field;
use crate::mask::Cell;

/// One of the two positions within a session.
pub type Slot = usize;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Slot 1 not yet assigned.
    AwaitingPartner,
    /// Both slots filled, at least one fleet missing.
    AwaitingFleets,
    /// Both fleets present, both sides still afloat.
    InProgress,
    /// One side's fleet is fully sunk.
    Finished { winner: Slot },
}

/// The paired state for one game between two identifiers.
#[derive(Debug)]
pub struct Session {
    players: [Option<PlayerId>; 2],
    fields: [Option<Field>; 2],
    state: SessionState,
}

impl Session {
    /// Open a session with its first registrant in slot 0.
    pub fn open(first: PlayerId) -> Self {
        Session {
            players: [Some(first), None],
            fields: [None, None],
            state: SessionState::AwaitingPartner,
        }
    }

    /// Fill slot 1 with the second registrant.
    pub fn join(&mut self, second: PlayerId) {
        self.players[1] = Some(second);
        if self.state == SessionState::AwaitingPartner {
            self.state = SessionState::AwaitingFleets;
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Identifier in the other slot, if assigned.
    pub fn opponent_of(&self, slot: Slot) -> Option<PlayerId> {
        self.players[1 - slot]
    }

    /// Store `field` for `slot`. Overwrites are allowed until the game
    /// starts; afterwards the fleet is live game state and re-submission is
    /// rejected.
    pub fn set_field(&mut self, slot: Slot, field: Field) -> Result<(), GameError> {
        match self.state {
            SessionState::InProgress | SessionState::Finished { .. } => {
                return Err(GameError::FieldAlreadySet)
            }
            SessionState::AwaitingPartner | SessionState::AwaitingFleets => {}
        }
        self.fields[slot] = Some(field);
        self.try_start();
        Ok(())
    }

    /// Move to `InProgress` once both slots and both fleets are present. A
    /// fleet with nothing left to sink ends the game on the spot: the slot
    /// facing the empty fleet wins, slot 0 taking precedence when both are
    /// empty.
    fn try_start(&mut self) {
        if self.state != SessionState::AwaitingFleets {
            return;
        }
        let (Some(field0), Some(field1)) = (&self.fields[0], &self.fields[1]) else {
            return;
        };
        self.state = if field1.all_sunk() {
            SessionState::Finished { winner: 0 }
        } else if field0.all_sunk() {
            SessionState::Finished { winner: 1 }
        } else {
            SessionState::InProgress
        };
    }

    /// Resolve an attack from `slot` against the opposite field.
    ///
    /// A finished session reports a fixed outcome for the caller's slot
    /// regardless of the coordinate supplied, so the terminal short-circuit
    /// comes before coordinate validation.
    pub fn attack(&mut self, slot: Slot, x: usize, y: usize) -> Result<AttackResult, GameError> {
        if let SessionState::Finished { winner } = self.state {
            return Ok(if winner == slot {
                AttackResult::YouWin
            } else {
                AttackResult::YouLose
            });
        }
        if self.state != SessionState::InProgress {
            return Err(GameError::SessionNotReady);
        }
        let cell = Cell::new(x, y)?;
        // InProgress implies both fleets are present.
        let target = match self.fields[1 - slot].as_mut() {
            Some(field) => field,
            None => return Err(GameError::SessionNotReady),
        };
        let result = target.resolve_shot(cell);
        if result == ShotResult::Kill && target.all_sunk() {
            self.state = SessionState::Finished { winner: slot };
        }
        Ok(AttackResult::Shot(result))
    }
}
