//! Field state: fleet extraction from the occupancy matrix and shot
//! resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::{GameError, ShotResult};
use crate::config::FIELD_SIZE;
use crate::mask::{Cell, Mask};
use crate::ship::Ship;

/// Fleet report returned on field submission: how many ships the occupancy
/// matrix implied, keyed by ship size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub ships: usize,
    pub cells: usize,
    /// Ship count per ship size.
    pub by_size: BTreeMap<usize, usize>,
}

/// One player's field: the fleet derived once from the submitted matrix plus
/// the record of every shot taken against it.
///
/// The ship set is immutable after construction; only shot status mutates,
/// and only through [`Field::resolve_shot`].
#[derive(Debug, Clone)]
pub struct Field {
    ships: Vec<Ship>,
    hits: Mask,
    misses: Mask,
}

impl Field {
    /// Validate a raw occupancy matrix and derive the fleet.
    ///
    /// The matrix must be exactly `FIELD_SIZE`×`FIELD_SIZE` with 0/1 entries;
    /// the outer index selects x. Beyond that, any occupancy pattern is
    /// accepted: ships are whatever the 4-connected components of the
    /// occupied cells imply, including none at all.
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Field, GameError> {
        if matrix.len() != FIELD_SIZE {
            return Err(GameError::InvalidField);
        }
        let mut occupied = Mask::EMPTY;
        for (x, row) in matrix.iter().enumerate() {
            if row.len() != FIELD_SIZE {
                return Err(GameError::InvalidField);
            }
            for (y, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => occupied.set(Cell::at(x, y)),
                    _ => return Err(GameError::InvalidField),
                }
            }
        }
        Ok(Field {
            ships: extract_ships(occupied),
            hits: Mask::EMPTY,
            misses: Mask::EMPTY,
        })
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// `true` once every ship is sunk. Vacuously true for an empty fleet.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn summary(&self) -> FleetSummary {
        let mut by_size = BTreeMap::new();
        for ship in &self.ships {
            *by_size.entry(ship.size()).or_insert(0) += 1;
        }
        FleetSummary {
            ships: self.ships.len(),
            cells: self.ships.iter().map(Ship::size).sum(),
            by_size,
        }
    }

    /// Classify a shot at `cell` and record it.
    ///
    /// Already-resolved cells repeat their classification without further
    /// effect: a missed cell misses again, a hit cell reports its ship's
    /// current sunk state. A ship of N cells therefore yields `Damage` for
    /// its first N−1 distinct hits and `Kill` exactly on the Nth.
    pub fn resolve_shot(&mut self, cell: Cell) -> ShotResult {
        if self.misses.get(cell) {
            return ShotResult::Miss;
        }
        match self.ships.iter_mut().find(|ship| ship.contains(cell)) {
            None => {
                self.misses.set(cell);
                ShotResult::Miss
            }
            Some(ship) => {
                if ship.record_hit(cell) {
                    self.hits.set(cell);
                }
                if ship.is_sunk() {
                    ShotResult::Kill
                } else {
                    ShotResult::Damage
                }
            }
        }
    }
}

/// Label the 4-connected components of `occupied`. Every occupied cell ends
/// up in exactly one ship.
fn extract_ships(occupied: Mask) -> Vec<Ship> {
    let mut ships = Vec::new();
    let mut assigned = Mask::EMPTY;
    for seed in occupied.cells() {
        if assigned.get(seed) {
            continue;
        }
        let mut members = Mask::EMPTY;
        let mut frontier = vec![seed];
        members.set(seed);
        assigned.set(seed);
        while let Some(cell) = frontier.pop() {
            for neighbour in cell.neighbours() {
                if occupied.get(neighbour) && !assigned.get(neighbour) {
                    assigned.set(neighbour);
                    members.set(neighbour);
                    frontier.push(neighbour);
                }
            }
        }
        ships.push(Ship::new(members));
    }
    ships
}
