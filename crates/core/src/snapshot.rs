use arrayvec::ArrayVec;

use crate::obstacles::{Obstacle, MAX_OBSTACLES};
use crate::simulator::RunStatus;

/// Read-only copy of the run state handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RunSnapshot {
    pub track_width: u16,
    pub track_height: u16,
    pub player_lane: u16,
    pub player_row: u16,
    pub obstacles: ArrayVec<Obstacle, MAX_OBSTACLES>,
    pub score: u32,
    pub lives: u8,
    pub ticks: u32,
    pub hit_this_tick: bool,
    pub status: RunStatus,
}
