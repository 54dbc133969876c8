//! Crate-level error types
//!
//! The simulation core itself has no recoverable error conditions: terrain
//! lookups outside the map resolve to the void sentinel and all commands are
//! pre-validated. Errors only arise while setting a match up.

use thiserror::Error;

/// Match setup failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An empty terrain would make every floor query void and the match
    /// unplayable, so it is rejected at construction.
    #[error("terrain must contain at least one cell")]
    EmptyTerrain,

    #[error("unrecognized terrain symbol {0:?} (expected '_', '-' or ' ')")]
    UnknownSymbol(char),

    #[error("screen width {got} leaves no lag margin (must exceed {min})")]
    ScreenTooNarrow { got: f32, min: f32 },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
