//! Deterministic simulation module
//!
//! All match logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one tick per rendered frame
//! - Seeded RNG only (procedural terrain)
//! - Fixed evaluation order (slot 0 then slot 1)
//! - No rendering or platform dependencies

pub mod body;
pub mod race;
pub mod terrain;
pub mod tick;

pub use body::{CompetitorBody, CompetitorId, Direction, Tint};
pub use race::{CompetitorView, RacePhase, RaceState, Snapshot};
pub use terrain::{Cell, Floor, Terrain};
pub use tick::{CompetitorInput, TickInput, tick};
