//! One-dimensional terrain height field
//!
//! The map is a finite run of cells, each low ground, high ground or a gap.
//! Addressing is mirrored around the map center: a query at x quantizes to
//! `|round(x / CELL_WIDTH) - cell_count|`, so cell 0 sits at the center and
//! the sequence plays out symmetrically toward both edges. Anything outside
//! the mapped range, and every gap cell, resolves to [`Floor::Void`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{CELL_WIDTH, LOW_FLOOR_Y, STEP_HEIGHT};
use crate::error::ConfigError;

/// One terrain cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Low,
    High,
    Gap,
}

/// Result of a floor query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Floor {
    Low,
    High,
    /// No floor here: off-map or over a gap, an unbounded fall
    Void,
}

impl Floor {
    /// Vertical position of this floor. Void is +infinity: with y growing
    /// downward a body above it never lands.
    pub fn y(self) -> f32 {
        match self {
            Floor::Low => LOW_FLOOR_Y,
            Floor::High => LOW_FLOOR_Y - STEP_HEIGHT,
            Floor::Void => f32::INFINITY,
        }
    }

    pub fn is_void(self) -> bool {
        self == Floor::Void
    }
}

/// Immutable 1D height field, read-only for the lifetime of a match
#[derive(Debug, Clone)]
pub struct Terrain {
    cells: Vec<Cell>,
}

impl Terrain {
    pub fn new(cells: Vec<Cell>) -> Result<Self, ConfigError> {
        if cells.is_empty() {
            return Err(ConfigError::EmptyTerrain);
        }
        Ok(Self { cells })
    }

    /// Parse a terrain string: `'_'` low ground, `'-'` high ground, `' '` gap
    pub fn parse(map: &str) -> Result<Self, ConfigError> {
        let cells = map
            .chars()
            .map(|c| match c {
                '_' => Ok(Cell::Low),
                '-' => Ok(Cell::High),
                ' ' => Ok(Cell::Gap),
                other => Err(ConfigError::UnknownSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cells)
    }

    /// Generate a deterministic map from a seed: mostly low ground, some high
    /// steps, isolated single-cell gaps. The spawn cells at the center are
    /// always low ground.
    pub fn generate(len: usize, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut cells = Vec::with_capacity(len);
        for i in 0..len {
            // Guaranteed ground under the spawn offsets (and never two gaps
            // in a row, so every gap stays jumpable)
            if i <= 2 || cells.last() == Some(&Cell::Gap) {
                cells.push(Cell::Low);
                continue;
            }
            cells.push(match rng.random_range(0..10) {
                0..=5 => Cell::Low,
                6..=8 => Cell::High,
                _ => Cell::Gap,
            });
        }
        Self::new(cells)
    }

    /// Floor height classification at horizontal position x
    pub fn floor_at(&self, x: f32) -> Floor {
        let offset = (x / CELL_WIDTH).round() as i64 - self.cells.len() as i64;
        let idx = offset.unsigned_abs() as usize;
        match self.cells.get(idx) {
            Some(Cell::Low) => Floor::Low,
            Some(Cell::High) => Floor::High,
            Some(Cell::Gap) | None => Floor::Void,
        }
    }

    /// Total addressable width of the map (mirrored around its center)
    pub fn extent(&self) -> f32 {
        self.cells.len() as f32 * CELL_WIDTH * 2.0
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
