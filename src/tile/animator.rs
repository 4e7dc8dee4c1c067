//! `TileAnimator`: the per-flap state machine.
//!
//! A tile is either at its target (idle) or stepping towards it. A new
//! target triggers one immediate step, then one step per interval until
//! the target is reached. Stepping is strictly forward with wrap-around,
//! the way a physical flap drum turns.
//!
//! # Timer
//!
//! The timer is a deadline (`next_due`) owned by the animator. Hosts call
//! [`TileAnimator::poll`] from their event loop; clearing the deadline
//! cancels the timer, and it cannot outlive the tile.
//!
//! # Transient entries
//!
//! A target missing from the shared alphabet is appended to a private
//! working copy (never to the shared set) so the tile always lands on the
//! exact requested symbol.

use super::cursor::TileCursor;
use super::events::FlapEvent;
use crate::error::ConfigError;
use crate::symbol::{Symbol, SymbolSet};
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// What a tile shows right now.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// Incoming symbol (upper face).
    pub current: Option<Symbol>,
    /// Outgoing symbol (lower face while flipping).
    pub previous: Option<Symbol>,
    /// The tile has reached its target.
    pub is_final: bool,
}

impl Frame {
    /// Symbol for the upper face.
    pub const fn upper(&self) -> Option<&Symbol> {
        self.current.as_ref()
    }

    /// Symbol for the lower face: the outgoing one until the flap settles.
    pub const fn lower(&self) -> Option<&Symbol> {
        if self.is_final {
            self.current.as_ref()
        } else {
            self.previous.as_ref()
        }
    }
}

/// The last target a tile was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    Symbol(Symbol),
    Index(usize),
}

/// Animation state machine for one flap.
#[derive(Debug)]
pub struct TileAnimator {
    /// Position in the owning row (used in events and logs).
    position: usize,
    /// Shared, read-only alphabet.
    symbols: Arc<SymbolSet>,
    /// Private entry appended after the shared alphabet.
    transient: Option<Symbol>,
    /// Last request, to ignore repeats.
    request: Option<Request>,
    cursor: TileCursor,
    interval: Duration,
    /// Timer handle: when the next step is due.
    next_due: Option<Instant>,
    observer: Option<Sender<FlapEvent>>,
}

impl TileAnimator {
    /// Create an idle tile over `symbols` stepping every `interval`.
    pub fn new(symbols: Arc<SymbolSet>, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self::with_checked_interval(symbols, interval))
    }

    /// Constructor for owners that already validated `interval`.
    pub(crate) const fn with_checked_interval(symbols: Arc<SymbolSet>, interval: Duration) -> Self {
        Self {
            position: 0,
            symbols,
            transient: None,
            request: None,
            cursor: TileCursor::new(),
            interval,
            next_due: None,
            observer: None,
        }
    }

    /// Set the row position reported in events.
    #[must_use]
    pub const fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Row position.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Send every step and settle to `observer`.
    pub fn observe(&mut self, observer: Sender<FlapEvent>) {
        self.observer = Some(observer);
    }

    /// The shared alphabet.
    pub const fn symbols(&self) -> &Arc<SymbolSet> {
        &self.symbols
    }

    /// Length of the working alphabet, including a transient entry.
    pub fn len(&self) -> usize {
        self.symbols.len() + usize::from(self.transient.is_some())
    }

    /// Never true: the shared alphabet is non-empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Symbol at `index` in the working alphabet.
    pub fn symbol_at(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index).or_else(|| {
            if index == self.symbols.len() {
                self.transient.as_ref()
            } else {
                None
            }
        })
    }

    /// The transient entry, if the target is outside the alphabet.
    pub const fn transient(&self) -> Option<&Symbol> {
        self.transient.as_ref()
    }

    /// Widest entry of the working alphabet, in columns.
    pub fn max_width(&self) -> usize {
        let transient = self.transient.as_ref().map_or(0, Symbol::width);
        self.symbols.max_width().max(transient)
    }

    /// Index state.
    pub const fn cursor(&self) -> &TileCursor {
        &self.cursor
    }

    /// Step interval.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next step is due, if the tile is animating.
    pub const fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Whether the tile shows its target.
    pub const fn is_final(&self) -> bool {
        self.cursor.is_final()
    }

    /// Whether a step is scheduled.
    pub const fn is_animating(&self) -> bool {
        self.next_due.is_some()
    }

    /// A repeat of the last request that is still running or already done.
    /// A cancelled request is not a repeat, so asking again resumes it.
    fn is_repeat(&self, request: &Request) -> bool {
        self.request.as_ref() == Some(request) && (self.is_animating() || self.is_final())
    }

    /// Animate towards `symbol`.
    ///
    /// Repeating the current request is a no-op, so an in-flight
    /// animation is not disturbed by a host re-applying the same value.
    pub fn request(&mut self, symbol: Symbol, now: Instant) {
        let request = Request::Symbol(symbol);
        if self.is_repeat(&request) {
            return;
        }
        self.apply(request, now);
    }

    /// Animate towards the alphabet entry at `index`.
    ///
    /// An index past the alphabet falls back to the first entry.
    pub fn request_index(&mut self, index: usize, now: Instant) {
        let index = if index < self.symbols.len() {
            index
        } else {
            tracing::warn!(
                position = self.position,
                index,
                len = self.symbols.len(),
                "flap index out of range, showing first entry"
            );
            0
        };
        let request = Request::Index(index);
        if self.is_repeat(&request) {
            return;
        }
        self.apply(request, now);
    }

    fn apply(&mut self, request: Request, now: Instant) {
        // Landing on a different transient symbol in the same slot still
        // needs a full turn of the drum.
        let mut replaced = false;
        match &request {
            Request::Symbol(symbol) => {
                if let Some(index) = self.symbols.position(symbol) {
                    self.transient = None;
                    self.cursor.target = index;
                } else {
                    tracing::debug!(
                        position = self.position,
                        symbol = %symbol,
                        "symbol outside alphabet, appending transient entry"
                    );
                    replaced = self.transient.as_ref().is_some_and(|t| t != symbol);
                    self.transient = Some(symbol.clone());
                    self.cursor.target = self.symbols.len();
                }
            }
            Request::Index(index) => {
                self.transient = None;
                self.cursor.target = *index;
            }
        }
        self.request = Some(request);
        self.start(now, replaced);
    }

    /// Kick off an animation: one immediate step, then the timer.
    fn start(&mut self, now: Instant, force: bool) {
        self.next_due = None;
        if self.cursor.is_final() && !force {
            return;
        }
        self.advance();
        if !self.cursor.is_final() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Advance one symbol unless the tile is already final.
    ///
    /// Returns `true` if the faces changed.
    pub fn step(&mut self) -> bool {
        if self.cursor.is_final() {
            self.next_due = None;
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) {
        self.cursor.step(self.len());
        tracing::trace!(
            position = self.position,
            current = ?self.cursor.current,
            target = self.cursor.target,
            "flap step"
        );

        let settled = self.cursor.is_final();
        if settled {
            self.next_due = None;
        }
        if let Some(observer) = &self.observer {
            let _ = observer.try_send(FlapEvent::Stepped {
                position: self.position,
                frame: self.frame(),
            });
            if settled {
                let _ = observer.try_send(FlapEvent::Settled {
                    position: self.position,
                });
            }
        }
    }

    /// Run the timer: step once if a step is due at `now`.
    ///
    /// At most one step happens per call. A host that falls behind gets
    /// its next step one interval from `now` rather than a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        self.step();
        if self.next_due.is_some() {
            let next = due + self.interval;
            self.next_due = Some(if next <= now { now + self.interval } else { next });
        }
        true
    }

    /// Stop the timer, leaving the faces where they are.
    pub const fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Switch to a different alphabet.
    ///
    /// Swapping in the same `Arc` is a no-op. Otherwise the timer is
    /// cancelled, the cursor returns to its fresh state and the pending
    /// request is forgotten; the owner re-targets the tile afterwards.
    pub fn set_symbols(&mut self, symbols: Arc<SymbolSet>) {
        if Arc::ptr_eq(&self.symbols, &symbols) {
            return;
        }
        tracing::debug!(position = self.position, len = symbols.len(), "flap alphabet replaced");
        self.symbols = symbols;
        self.transient = None;
        self.request = None;
        self.cursor.reset();
        self.next_due = None;
    }

    /// Change the step interval, restarting a running timer.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) -> Result<(), ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if interval != self.interval {
            self.interval = interval;
            if self.next_due.is_some() {
                self.next_due = Some(now + interval);
            }
        }
        Ok(())
    }

    /// Faces to draw.
    pub fn frame(&self) -> Frame {
        let lookup = |index: Option<usize>| index.and_then(|i| self.symbol_at(i)).cloned();
        Frame {
            current: lookup(self.cursor.current),
            previous: lookup(self.cursor.previous),
            is_final: self.cursor.is_final(),
        }
    }
}
