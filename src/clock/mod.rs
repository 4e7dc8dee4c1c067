//! Clock: the optional heartbeat that drives `poll(now)`.

mod ticker;

pub use ticker::{Tick, Ticker};
