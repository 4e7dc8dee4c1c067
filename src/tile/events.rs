//! Observer messages emitted by animating tiles.

use super::Frame;

/// A state change of one tile.
///
/// Sent over a `crossbeam_channel::Sender` attached with
/// [`TileAnimator::observe`](super::TileAnimator::observe). Sends never
/// block; a full channel drops the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlapEvent {
    /// The tile advanced one symbol.
    Stepped {
        /// Tile position in its row.
        position: usize,
        /// Faces after the step.
        frame: Frame,
    },
    /// The tile reached its target and stopped its timer.
    Settled {
        /// Tile position in its row.
        position: usize,
    },
}

impl FlapEvent {
    /// Position of the tile that emitted the event.
    pub const fn position(&self) -> usize {
        match self {
            Self::Stepped { position, .. } | Self::Settled { position } => *position,
        }
    }
}
