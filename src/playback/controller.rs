//! # Playback Controller
//!
//! State machine over `{steps, cursor, playing, terminal}`, generic over
//! the step type so one controller serves every generator.
//!
//! ```text
//! Idle ──start──> Ready ──toggle_play──> Playing
//!                  │  ▲                    │
//!                next/prev              tick(ticket)
//!                  │  │                    │
//!                  ▼  └───── pause ◄───────┘
//!               Terminal (found / not-found at the visible end)
//! ```
//!
//! ## Autoplay protocol
//!
//! The engine owns no clock. Turning playback on hands the embedder an
//! [`AutoplayTicket`] stamped with the controller's current epoch; the
//! embedder schedules a timer at the ticket's interval and calls
//! [`Playback::tick`] with it. Every state change (new trace, manual
//! step, pause) bumps the epoch, so a tick scheduled against a superseded
//! trace or position reports [`TickOutcome::Stale`] and does nothing.
//! That gives the guaranteed-cancellation semantics a scoped timer would,
//! without the controller holding one. After a manual step while playing,
//! the embedder re-arms from [`Playback::ticket`].

use std::time::Duration;

use crate::config::AUTOPLAY_TICK;
use crate::search::Trace;

/// Terminal display state after the cursor reaches a conclusion. The
/// wrapped index is the match position in the searched structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Found(usize),
    NotFound,
}

/// Result of offering one autoplay tick to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Cursor advanced by one; schedule the next tick.
    Advanced,
    /// Playback reached the visible end (or a match) and stopped.
    Finished,
    /// The ticket no longer matches the controller state; drop the timer.
    Stale,
}

/// Permission to drive autoplay, valid until the next state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTicket {
    epoch: u64,
}

impl AutoplayTicket {
    /// Delay the embedder should wait between ticks.
    pub fn interval(&self) -> Duration {
        AUTOPLAY_TICK
    }
}

/// Generic playback state machine over a step trace.
#[derive(Debug, Clone)]
pub struct Playback<S> {
    trace: Trace<S>,
    cursor: Option<usize>,
    playing: bool,
    terminal: Option<Terminal>,
    epoch: u64,
}

impl<S> Default for Playback<S> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<S> Playback<S> {
    /// Controller with no steps loaded.
    pub fn idle() -> Self {
        Self {
            trace: Trace::empty(),
            cursor: None,
            playing: false,
            terminal: None,
            epoch: 0,
        }
    }

    /// Loads a fresh trace, rewinds to the first step and re-evaluates
    /// the terminal state there (a trace can conclude on step one).
    /// Replacing the trace invalidates every outstanding ticket.
    pub fn start(&mut self, trace: Trace<S>) {
        self.epoch += 1;
        self.cursor = if trace.is_empty() { None } else { Some(0) };
        self.trace = trace;
        self.playing = false;
        self.terminal = None;
        self.evaluate();
    }

    pub fn trace(&self) -> &Trace<S> {
        &self.trace
    }

    /// Current cursor position, `None` before a search starts.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current_step(&self) -> Option<&S> {
        self.cursor.map(|at| &self.trace.steps()[at])
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn terminal(&self) -> Option<Terminal> {
        self.terminal
    }

    /// Advances one step, stopping at the visible end (the match step
    /// when the search succeeded). No-op at the end or before a search.
    pub fn next(&mut self) {
        self.epoch += 1;
        let (Some(at), Some(last)) = (self.cursor, self.trace.last_visible()) else {
            return;
        };
        if at < last {
            self.cursor = Some(at + 1);
            self.evaluate();
        }
    }

    /// Steps back one step and clears the displayed verdict; the verdict
    /// itself lives on the trace and is re-derived on the next advance.
    pub fn prev(&mut self) {
        self.epoch += 1;
        if let Some(at) = self.cursor {
            if at > 0 {
                self.cursor = Some(at - 1);
                self.terminal = None;
            }
        }
    }

    /// Flips play/pause. No-op before a search starts. Returns the
    /// ticket the embedder should drive ticks with when playback turned
    /// on, `None` when it turned off.
    pub fn toggle_play(&mut self) -> Option<AutoplayTicket> {
        if self.cursor.is_none() {
            return None;
        }
        self.epoch += 1;
        self.playing = !self.playing;
        self.ticket()
    }

    /// Ticket for the current state while playing. Embedders re-acquire
    /// this after calling a manual control mid-playback.
    pub fn ticket(&self) -> Option<AutoplayTicket> {
        self.playing.then_some(AutoplayTicket { epoch: self.epoch })
    }

    /// One autoplay tick. Ignores tickets from superseded states.
    pub fn tick(&mut self, ticket: &AutoplayTicket) -> TickOutcome {
        if ticket.epoch != self.epoch || !self.playing {
            return TickOutcome::Stale;
        }
        let (Some(at), Some(last)) = (self.cursor, self.trace.last_visible()) else {
            return TickOutcome::Stale;
        };
        if at >= last {
            self.playing = false;
            self.epoch += 1;
            return TickOutcome::Finished;
        }
        self.cursor = Some(at + 1);
        self.evaluate();
        if self.terminal.is_some() {
            // evaluate() already paused; retire the ticket
            self.epoch += 1;
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced
        }
    }

    /// Re-derives the terminal display for the current cursor: a match
    /// step concludes `Found` and pauses; the last step of a miss
    /// concludes `NotFound`.
    fn evaluate(&mut self) {
        let Some(at) = self.cursor else {
            self.terminal = None;
            return;
        };
        if self.trace.match_step() == Some(at) {
            self.terminal = self.trace.verdict().index().map(Terminal::Found);
            self.playing = false;
        } else if self.trace.match_step().is_none() && at + 1 == self.trace.len() {
            self.terminal = Some(Terminal::NotFound);
            self.playing = false;
        } else {
            self.terminal = None;
        }
    }
}
