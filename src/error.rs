//! Configuration errors.
//!
//! Only invalid setup is an error. Everything that can go wrong while a
//! board is running (unknown symbols, unknown display ids, values that are
//! too long or too short) degrades to a visual fallback instead.

use thiserror::Error;

/// Invalid display configuration, reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A symbol set (or content entry list) with no entries cannot be cycled.
    #[error("symbol set must contain at least one symbol")]
    EmptySymbolSet,
    /// The step interval must be a positive duration.
    #[error("flip interval must be greater than zero")]
    ZeroInterval,
    /// A fixed display needs at least one tile.
    #[error("display length must be at least 1")]
    ZeroLength,
}
