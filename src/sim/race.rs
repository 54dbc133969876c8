//! Match state: ranked competitor pair, camera, phase
//!
//! The two competitors live in a fixed two-slot ordering, slot 0 = straggler
//! and slot 1 = leader. The ordering is NOT derived from horizontal position;
//! it changes only when the current leader dies, at which point the slots
//! swap. Overtaking the leader on raw x does not change rank.

use glam::Vec2;
use serde::Serialize;

use super::body::{CompetitorBody, CompetitorId, Direction, Tint};
use super::terrain::Terrain;
use crate::consts::SPAWN_OFFSET;

pub(crate) const STRAGGLER: usize = 0;
pub(crate) const LEADER: usize = 1;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RacePhase {
    /// Ticks advance the simulation
    Running,
    /// The leader left the map extent in its racing direction
    Finished,
    /// External quit signal
    Aborted,
}

/// Complete match state, exclusively owned by the simulation thread
#[derive(Debug, Clone)]
pub struct RaceState {
    pub(crate) terrain: Terrain,
    /// Ranked pair: `[straggler, leader]`
    pub(crate) slots: [CompetitorBody; 2],
    pub(crate) screen_width: f32,
    /// Rubber-band camera position, low-pass filtered toward its target
    pub(crate) camera: f32,
    pub(crate) phase: RacePhase,
    pub(crate) time_ticks: u64,
}

impl RaceState {
    /// Start a match: competitors at fixed offsets left/right of the map
    /// center, racing rightward (competitor Two opens as leader).
    pub fn new(terrain: Terrain, screen_width: f32) -> Self {
        let center = terrain.extent() / 2.0;
        let one = CompetitorBody::new(CompetitorId::One, center - SPAWN_OFFSET, Direction::Left);
        let two = CompetitorBody::new(CompetitorId::Two, center + SPAWN_OFFSET, Direction::Right);
        Self {
            terrain,
            slots: [one, two],
            screen_width,
            camera: center,
            phase: RacePhase::Running,
            time_ticks: 0,
        }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn straggler(&self) -> &CompetitorBody {
        &self.slots[STRAGGLER]
    }

    pub fn leader(&self) -> &CompetitorBody {
        &self.slots[LEADER]
    }

    pub fn phase(&self) -> RacePhase {
        self.phase
    }

    pub fn camera(&self) -> f32 {
        self.camera
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Direction the race currently moves: the leader's intrinsic direction
    pub fn race_direction(&self) -> Direction {
        self.slots[LEADER].base_dir
    }

    /// Leader's position as a fraction of the map extent
    pub fn progress(&self) -> f32 {
        self.slots[LEADER].pos.x / self.terrain.extent()
    }

    /// Kill the body in `slot` and re-rank on a leader death: the straggler
    /// moves up to the leader slot, the dead leader drops to straggler.
    /// Killing an already-dead body changes nothing.
    pub(crate) fn kill(&mut self, slot: usize) {
        if !self.slots[slot].alive {
            return;
        }
        self.slots[slot].die();
        if slot == LEADER {
            self.slots.swap(STRAGGLER, LEADER);
            log::debug!(
                "lead change: {} now leads, race direction {:?}",
                self.slots[LEADER].id.tint().as_str(),
                self.race_direction(),
            );
        }
    }

    /// Read-only per-tick state for the renderer, in ranked slot order
    pub fn snapshot(&self) -> Snapshot {
        let view = |body: &CompetitorBody| CompetitorView {
            tint: body.id.tint(),
            pos: body.pos,
            facing: body.facing,
            alive: body.alive,
            running: body.running,
            airborne: body.airborne(&self.terrain),
        };
        Snapshot {
            competitors: [view(&self.slots[STRAGGLER]), view(&self.slots[LEADER])],
            camera: self.camera,
            leader: self.slots[LEADER].id.tint(),
            race_direction: self.race_direction(),
            progress: self.progress(),
            extent: self.terrain.extent(),
            phase: self.phase,
            time_ticks: self.time_ticks,
        }
    }
}

/// What the renderer needs to draw one competitor (animation selection is
/// the renderer's job; the core only exposes the state it selects from)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompetitorView {
    pub tint: Tint,
    pub pos: Vec2,
    pub facing: Direction,
    pub alive: bool,
    pub running: bool,
    pub airborne: bool,
}

/// Copy-on-read render snapshot for one tick
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// `[straggler, leader]`
    pub competitors: [CompetitorView; 2],
    pub camera: f32,
    pub leader: Tint,
    pub race_direction: Direction,
    pub progress: f32,
    pub extent: f32,
    pub phase: RacePhase,
    pub time_ticks: u64,
}
