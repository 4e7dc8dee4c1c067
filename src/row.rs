//! `TileRow`: fans a row value out to one animator per position.
//!
//! Animators are kept by position, so re-applying a value only re-targets
//! the tiles whose symbol actually changed and never interrupts the rest.

use crate::error::ConfigError;
use crate::symbol::{RowValue, SymbolSet};
use crate::tile::{FlapEvent, Frame, TileAnimator};
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// An ordered row of independently animating tiles.
#[derive(Debug)]
pub struct TileRow {
    symbols: Arc<SymbolSet>,
    interval: Duration,
    tiles: Vec<TileAnimator>,
    observer: Option<Sender<FlapEvent>>,
}

impl TileRow {
    /// Create an empty row; tiles appear with the first [`Self::set_value`].
    pub fn new(symbols: Arc<SymbolSet>, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self {
            symbols,
            interval,
            tiles: Vec::new(),
            observer: None,
        })
    }

    /// Forward every tile's events to `observer`.
    pub fn observe(&mut self, observer: Sender<FlapEvent>) {
        for tile in &mut self.tiles {
            tile.observe(observer.clone());
        }
        self.observer = Some(observer);
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the row has no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tiles, in position order.
    pub fn tiles(&self) -> &[TileAnimator] {
        &self.tiles
    }

    /// Shared alphabet.
    pub const fn symbols(&self) -> &Arc<SymbolSet> {
        &self.symbols
    }

    /// Retarget every position.
    ///
    /// Extra positions get fresh tiles; surplus tiles are dropped along
    /// with their timers.
    pub fn set_value(&mut self, value: &RowValue, now: Instant) {
        self.resize(value.len());
        for (tile, symbol) in self.tiles.iter_mut().zip(value.symbols()) {
            tile.request(symbol.clone(), now);
        }
    }

    /// Retarget the single tile of a word row by alphabet index.
    pub fn set_index(&mut self, index: usize, now: Instant) {
        self.resize(1);
        if let Some(tile) = self.tiles.first_mut() {
            tile.request_index(index, now);
        }
    }

    fn resize(&mut self, len: usize) {
        self.tiles.truncate(len);
        while self.tiles.len() < len {
            let mut tile = TileAnimator::with_checked_interval(Arc::clone(&self.symbols), self.interval)
                .with_position(self.tiles.len());
            if let Some(observer) = &self.observer {
                tile.observe(observer.clone());
            }
            self.tiles.push(tile);
        }
    }

    /// Swap the alphabet, resetting every tile if it changed.
    ///
    /// Tiles come back idle; re-apply the value to animate them again.
    pub fn set_symbols(&mut self, symbols: Arc<SymbolSet>) {
        if Arc::ptr_eq(&self.symbols, &symbols) {
            return;
        }
        for tile in &mut self.tiles {
            tile.set_symbols(Arc::clone(&symbols));
        }
        self.symbols = symbols;
    }

    /// Change the step interval of every tile.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) -> Result<(), ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        for tile in &mut self.tiles {
            tile.set_interval(interval, now)?;
        }
        self.interval = interval;
        Ok(())
    }

    /// Run every tile's timer; returns the positions that changed.
    pub fn poll(&mut self, now: Instant) -> Vec<usize> {
        self.tiles
            .iter_mut()
            .enumerate()
            .filter_map(|(i, tile)| tile.poll(now).then_some(i))
            .collect()
    }

    /// Earliest pending step across the row.
    pub fn next_due(&self) -> Option<Instant> {
        self.tiles.iter().filter_map(TileAnimator::next_due).min()
    }

    /// Whether every tile has stopped.
    pub fn is_settled(&self) -> bool {
        self.tiles.iter().all(|t| !t.is_animating())
    }

    /// Current faces of every tile.
    pub fn frames(&self) -> Vec<Frame> {
        self.tiles.iter().map(TileAnimator::frame).collect()
    }

    /// Widest symbol any tile may show, in columns.
    pub fn max_width(&self) -> usize {
        self.tiles
            .iter()
            .map(TileAnimator::max_width)
            .max()
            .unwrap_or_else(|| self.symbols.max_width())
    }
}
