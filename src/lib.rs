//! Scarper - a two-runner side-scrolling chase
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, kinematics, ranking, camera)
//! - `config`: Data-driven match setup
//! - `error`: Crate-level error types
//!
//! The crate is the simulation core only. Terminal rendering, key decoding
//! and frame pacing are external collaborators that consume the per-tick
//! [`sim::Snapshot`] and feed [`sim::TickInput`].

pub mod config;
pub mod error;
pub mod sim;

pub use config::MatchConfig;
pub use error::ConfigError;

/// Simulation constants
pub mod consts {
    /// Fixed simulation rate (one tick per rendered frame)
    pub const TICK_HZ: u32 = 30;

    /// Width of one terrain cell in world units
    pub const CELL_WIDTH: f32 = 15.0;
    /// Vertical rise of a high-ground cell above low ground
    pub const STEP_HEIGHT: f32 = 2.0;
    /// Vertical position of the low-ground floor (y grows downward)
    pub const LOW_FLOOR_Y: f32 = 0.0;

    /// Horizontal speed while running, world units per tick
    pub const RUN_VELOCITY: f32 = 3.0;
    /// Downward acceleration per tick while airborne.
    /// 2 * STEP_HEIGHT / (CELL_WIDTH / RUN_VELOCITY)^2, so the derived
    /// jump arc peaks at one step height.
    pub const GRAVITY: f32 = 0.16;

    /// Half-width of a competitor body; floor probes sample at +/- this offset
    pub const BODY_HALF_WIDTH: f32 = 2.0;
    /// Ticks a dead competitor waits before becoming respawn-eligible
    pub const RESPAWN_DELAY_TICKS: i32 = 30;
    /// Spawn distance of each competitor from the map center; the opening
    /// separation must sit inside the distance-death margin
    pub const SPAWN_OFFSET: f32 = CELL_WIDTH;
    /// Depth past the deepest finite floor at which a falling body dies
    pub const VOID_DEATH_DEPTH: f32 = 2.0 * STEP_HEIGHT;
}
