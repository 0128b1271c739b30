//! # Playback Module
//!
//! One generic state machine drives every visualizer: the same controller
//! replays binary search steps, linear search steps and hash probe steps.
//! See [`controller`] for the state machine and the epoch-guarded autoplay
//! protocol.

mod controller;

pub use controller::{AutoplayTicket, Playback, Terminal, TickOutcome};
