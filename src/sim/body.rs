//! Competitor kinematics and lifecycle
//!
//! One body per competitor: runs horizontally, jumps in a fixed parabolic
//! arc, and collides with the terrain floor. Vertical y grows downward, so
//! "above the floor" means y < floor and landing clamps y up to the floor.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::terrain::Terrain;
use crate::consts::*;

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign of horizontal motion in this direction
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Competitor identity (two slots at the input boundary, never more)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitorId {
    One,
    Two,
}

impl CompetitorId {
    /// Index into per-competitor input arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            CompetitorId::One => 0,
            CompetitorId::Two => 1,
        }
    }

    /// Display color for the ranking indicator
    pub fn tint(self) -> Tint {
        match self {
            CompetitorId::One => Tint::Green,
            CompetitorId::Two => Tint::Magenta,
        }
    }
}

/// Display color identifying a competitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Green,
    Magenta,
}

impl Tint {
    pub fn as_str(self) -> &'static str {
        match self {
            Tint::Green => "green",
            Tint::Magenta => "magenta",
        }
    }
}

/// One competitor's continuous state
#[derive(Debug, Clone)]
pub struct CompetitorBody {
    pub id: CompetitorId,
    /// World position; x horizontal, y vertical with larger = deeper
    pub pos: Vec2,
    /// Vertical velocity, positive = falling
    pub vel_y: f32,
    /// Current facing, flips with movement commands
    pub facing: Direction,
    /// Intrinsic direction, restored by `die()` and defining the race
    /// direction while this body leads
    pub base_dir: Direction,
    /// Horizontal movement intent for the next tick
    pub running: bool,
    pub alive: bool,
    /// Respawn countdown; negative means not on cooldown
    pub cooldown: i32,
    /// Upward jump impulse, derived once from the arc model so one full
    /// jump spans exactly one cell horizontally and one step vertically
    jump_velocity: f32,
}

impl CompetitorBody {
    pub fn new(id: CompetitorId, spawn_x: f32, base_dir: Direction) -> Self {
        // x(t) = t * run_velocity, y(t) = g/2 * t^2 - t * jump_velocity,
        // solved for y(airtime) = -STEP_HEIGHT with airtime = one cell
        let airtime = CELL_WIDTH / RUN_VELOCITY;
        let jump_velocity = (airtime * airtime * GRAVITY / 2.0 + STEP_HEIGHT) / airtime;
        Self {
            id,
            pos: Vec2::new(spawn_x, LOW_FLOOR_Y),
            vel_y: 0.0,
            facing: base_dir,
            base_dir,
            running: false,
            alive: true,
            cooldown: 0,
            jump_velocity,
        }
    }

    /// Set horizontal movement intent. Ignored while dead.
    pub fn set_intent(&mut self, running: bool, direction: Direction) {
        if !self.alive {
            return;
        }
        self.running = running;
        self.facing = direction;
    }

    /// Clear running intent without changing facing. Ignored while dead.
    pub fn halt(&mut self) {
        if self.alive {
            self.running = false;
        }
    }

    /// Apply the jump impulse if resting exactly on the floor. A no-op while
    /// airborne or dead.
    pub fn jump(&mut self, terrain: &Terrain) {
        if self.alive && self.pos.y == self.floor_below(terrain) {
            self.vel_y = -self.jump_velocity;
        }
    }

    /// Floor height under the body: the more restrictive (deeper) of two
    /// probes at +/- half width. A body straddling a ledge edge keeps the
    /// lower floor until both probes have cleared it, and any probe over a
    /// gap reads void.
    pub fn floor_below(&self, terrain: &Terrain) -> f32 {
        let left = terrain.floor_at(self.pos.x - BODY_HALF_WIDTH).y();
        let right = terrain.floor_at(self.pos.x + BODY_HALF_WIDTH).y();
        left.max(right)
    }

    /// True when the floor is strictly below the body
    pub fn airborne(&self, terrain: &Terrain) -> bool {
        self.pos.y < self.floor_below(terrain)
    }

    /// Advance one simulation tick
    pub fn step(&mut self, terrain: &Terrain) {
        if self.running {
            self.pos.x += self.facing.sign() * RUN_VELOCITY;
        }

        let floor = self.floor_below(terrain);
        if floor > self.pos.y {
            self.vel_y += GRAVITY;
        }
        self.pos.y += self.vel_y;

        // Landing: never sink past the floor
        if self.pos.y > floor {
            self.pos.y = floor;
            self.vel_y = 0.0;
        }

        self.cooldown -= 1;
    }

    /// Enter the dead state and arm the respawn cooldown. Idempotent.
    pub fn die(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.cooldown = RESPAWN_DELAY_TICKS;
        self.facing = self.base_dir;
        self.running = false;
    }

    /// Revive at the given horizontal position. The caller gates this on an
    /// elapsed cooldown and a finite floor at `at`.
    pub fn respawn(&mut self, at: f32) {
        self.pos.x = at;
        self.alive = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_terrain() -> Terrain {
        Terrain::parse(&"_".repeat(20)).unwrap()
    }

    fn grounded_body(x: f32) -> CompetitorBody {
        CompetitorBody::new(CompetitorId::One, x, Direction::Right)
    }

    #[test]
    fn test_grounded_body_stays_on_floor() {
        let terrain = flat_terrain();
        let mut body = grounded_body(terrain.extent() / 2.0);
        for _ in 0..10 {
            body.step(&terrain);
            assert_eq!(body.pos.y, LOW_FLOOR_Y);
            assert_eq!(body.vel_y, 0.0);
        }
    }

    #[test]
    fn test_running_moves_by_run_velocity() {
        let terrain = flat_terrain();
        let mut body = grounded_body(terrain.extent() / 2.0);
        let start_x = body.pos.x;
        body.set_intent(true, Direction::Right);
        body.step(&terrain);
        assert_eq!(body.pos.x, start_x + RUN_VELOCITY);
        body.set_intent(true, Direction::Left);
        body.step(&terrain);
        assert_eq!(body.pos.x, start_x);
    }

    #[test]
    fn test_jump_arc_peaks_near_step_height() {
        let terrain = flat_terrain();
        let mut body = grounded_body(terrain.extent() / 2.0);
        body.jump(&terrain);

        let mut peak = 0.0f32;
        let mut ticks = 0;
        loop {
            body.step(&terrain);
            ticks += 1;
            peak = peak.max(-body.pos.y);
            if !body.airborne(&terrain) {
                break;
            }
            assert!(ticks < 50, "jump arc never landed");
        }

        // Discrete integration overshoots the continuous peak slightly
        assert!(peak >= STEP_HEIGHT, "peak {peak} below step height");
        assert!(peak < STEP_HEIGHT + 0.5, "peak {peak} far above step height");
        // Landing back on flat ground takes a full up-and-down arc: about
        // twice the designed one-cell rise time of CELL_WIDTH / RUN_VELOCITY
        let rise_ticks = CELL_WIDTH / RUN_VELOCITY;
        assert!((ticks as f32 - 2.0 * rise_ticks).abs() <= 2.0);
    }

    #[test]
    fn test_jump_is_noop_while_airborne() {
        let terrain = flat_terrain();
        let mut body = grounded_body(terrain.extent() / 2.0);
        body.jump(&terrain);
        body.step(&terrain);
        assert!(body.airborne(&terrain));

        let vel_before = body.vel_y;
        body.jump(&terrain);
        assert_eq!(body.vel_y, vel_before);
    }

    #[test]
    fn test_landing_restores_floor_contact_exactly() {
        let terrain = flat_terrain();
        let mut body = grounded_body(terrain.extent() / 2.0);
        body.jump(&terrain);
        for _ in 0..50 {
            body.step(&terrain);
            if !body.airborne(&terrain) {
                break;
            }
        }
        assert_eq!(body.pos.y, body.floor_below(&terrain));
        assert_eq!(body.vel_y, 0.0);
    }

    #[test]
    fn test_dead_body_ignores_commands() {
        let terrain = flat_terrain();
        let mut body = grounded_body(terrain.extent() / 2.0);
        body.die();

        let mut twin = body.clone();
        body.set_intent(true, Direction::Right);
        body.jump(&terrain);
        body.step(&terrain);
        twin.step(&terrain);

        assert_eq!(body.pos, twin.pos);
        assert_eq!(body.vel_y, twin.vel_y);
    }

    #[test]
    fn test_die_is_idempotent_and_resets_intent() {
        let mut body = grounded_body(150.0);
        body.set_intent(true, Direction::Left);
        body.die();
        assert!(!body.alive);
        assert!(!body.running);
        assert_eq!(body.facing, body.base_dir);
        assert_eq!(body.cooldown, RESPAWN_DELAY_TICKS);

        // A second death must not re-arm the cooldown
        body.cooldown = 3;
        body.die();
        assert_eq!(body.cooldown, 3);
    }

    #[test]
    fn test_cooldown_decrements_every_tick() {
        let terrain = flat_terrain();
        let mut body = grounded_body(terrain.extent() / 2.0);
        body.die();
        for expected in (0..RESPAWN_DELAY_TICKS).rev() {
            body.step(&terrain);
            assert_eq!(body.cooldown, expected);
        }
        body.step(&terrain);
        assert_eq!(body.cooldown, -1);
    }

    #[test]
    fn test_walks_onto_high_ground_once_both_probes_cover_it() {
        // Cell 3 ('-') covers x in [142.5, 157.5) on the right half
        let terrain = Terrain::parse("___-___").unwrap();
        let mut body = grounded_body(129.0);
        body.set_intent(true, Direction::Right);

        for _ in 0..5 {
            body.step(&terrain);
            // Straddling the step: still held to the low floor
            assert_eq!(body.pos.y, LOW_FLOOR_Y);
        }
        body.step(&terrain);
        // x = 147: both probes over the high cell, clamped up to its floor
        assert_eq!(body.pos.x, 147.0);
        assert_eq!(body.pos.y, LOW_FLOOR_Y - STEP_HEIGHT);
        assert_eq!(body.vel_y, 0.0);
    }

    #[test]
    fn test_walks_off_ledge_before_fully_clearing_it() {
        let terrain = Terrain::parse("___-___").unwrap();
        let mut body = grounded_body(150.0);
        body.pos.y = LOW_FLOOR_Y - STEP_HEIGHT;
        body.set_intent(true, Direction::Right);

        // First tick with a probe past the ledge: floor drops to low and the
        // body is airborne, so gravity starts pulling immediately
        body.step(&terrain);
        body.step(&terrain);
        assert!(body.pos.y > LOW_FLOOR_Y - STEP_HEIGHT);
        assert!(body.vel_y > 0.0);
    }

    #[test]
    fn test_falls_unbounded_over_gap() {
        let terrain = Terrain::parse("__ __").unwrap();
        // Gap cell 2 covers x around 45 on the left half
        let mut body = grounded_body(45.0);
        assert!(body.floor_below(&terrain).is_infinite());
        for _ in 0..20 {
            body.step(&terrain);
        }
        assert!(body.pos.y > VOID_DEATH_DEPTH);
        assert!(body.vel_y > 0.0);
    }

    #[test]
    fn test_gap_probe_is_restrictive_at_edges() {
        let terrain = Terrain::parse("__ __").unwrap();
        // x = 52: probes at 50 and 54 quantize to cells 2 (gap) and 1 (low);
        // the void probe wins, the body cannot hover on the gap edge
        let body = grounded_body(52.0);
        assert!(body.floor_below(&terrain).is_infinite());
    }

    #[test]
    fn test_respawn_revives_at_exact_position() {
        let mut body = grounded_body(100.0);
        body.die();
        body.respawn(540.0);
        assert!(body.alive);
        assert_eq!(body.pos.x, 540.0);
    }
}
