//! Obstacle set - the cars and debris scrolling down the track
//!
//! Obstacles are stored oldest-first in a fixed-capacity array, so the one
//! closest to the player is always at the front. Advancing, spawning and
//! hit-testing never allocate.

use arrayvec::ArrayVec;

use crate::types::MAX_TRACK_HEIGHT;

/// Upper bound on live obstacles.
///
/// At most one obstacle spawns per tick and each one is dropped after it
/// passes the player row, so a track of height `h` never holds more than
/// `h - 1` of them.
pub const MAX_OBSTACLES: usize = MAX_TRACK_HEIGHT as usize;

/// A single obstacle on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    /// Column within the lane range.
    pub lane: u16,
    /// Row counted from the spawn edge (row 0).
    pub row: u16,
}

/// Ordered set of live obstacles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    items: ArrayVec<Obstacle, MAX_OBSTACLES>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.items
    }

    /// Move every obstacle one row toward the player and drop the ones that
    /// have gone past `player_row`.
    ///
    /// Returns how many obstacles scrolled off.
    pub fn advance(&mut self, player_row: u16) -> usize {
        let before = self.items.len();
        for obstacle in self.items.iter_mut() {
            obstacle.row = obstacle.row.saturating_add(1);
        }
        self.items.retain(|o| o.row <= player_row);
        before - self.items.len()
    }

    /// Insert a new obstacle at the spawn edge.
    ///
    /// Returns false when the set is full (cannot happen on a validated
    /// track, see [`MAX_OBSTACLES`]).
    pub fn spawn(&mut self, lane: u16) -> bool {
        self.items.try_push(Obstacle { lane, row: 0 }).is_ok()
    }

    /// Whether an obstacle occupies `(lane, row)`.
    pub fn occupies(&self, lane: u16, row: u16) -> bool {
        self.items.iter().any(|o| o.lane == lane && o.row == row)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Copy the live obstacles into `dst` (used by snapshots; no allocation).
    pub fn copy_into(&self, dst: &mut ArrayVec<Obstacle, MAX_OBSTACLES>) {
        dst.clear();
        // Same capacity on both sides.
        dst.extend(self.items.iter().copied());
    }
}
