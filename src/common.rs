//! Common engine types: the error taxonomy and shot/attack results.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier handed out at registration, strictly increasing from zero.
pub type PlayerId = u64;

/// Outcome of a single shot against an opponent field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    /// No ship occupies the target cell.
    Miss,
    /// A ship cell was hit but the ship still has intact cells.
    Damage,
    /// The hit completed the ship; every member cell is now hit.
    Kill,
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotResult::Miss => write!(f, "Miss"),
            ShotResult::Damage => write!(f, "Damage"),
            ShotResult::Kill => write!(f, "Kill"),
        }
    }
}

/// Reply to an `attack` call.
///
/// While the session is in progress this carries the shot classification;
/// once the session is finished every further attack reports a fixed
/// terminal outcome for the caller's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackResult {
    Shot(ShotResult),
    YouWin,
    YouLose,
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackResult::Shot(res) => write!(f, "{}", res),
            AttackResult::YouWin => write!(f, "You win"),
            AttackResult::YouLose => write!(f, "You lose"),
        }
    }
}

/// Caller errors reported by the engine. All are synchronous input-validation
/// failures; the engine performs no retries and has no internally recovered
/// failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// Identifier was never issued by the registry.
    UnknownPlayer(PlayerId),
    /// Occupancy matrix is not 10×10 or holds an entry other than 0/1.
    InvalidField,
    /// Coordinate outside the field.
    InvalidCoordinate { x: usize, y: usize },
    /// Attack attempted before both fleets are submitted.
    SessionNotReady,
    /// Fleet re-submission after the game already started.
    FieldAlreadySet,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownPlayer(id) => write!(f, "player {} was never registered", id),
            GameError::InvalidField => {
                write!(f, "occupancy matrix must be 10x10 with 0/1 entries")
            }
            GameError::InvalidCoordinate { x, y } => {
                write!(f, "coordinate ({}, {}) is outside the field", x, y)
            }
            GameError::SessionNotReady => write!(f, "both fleets must be submitted first"),
            GameError::FieldAlreadySet => write!(f, "fleet cannot change once the game started"),
        }
    }
}

impl std::error::Error for GameError {}
