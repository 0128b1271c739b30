//! # tracekit - Stepwise Algorithm Trace Engine
//!
//! tracekit is the engine behind step-by-step visualizations of classic
//! search and hashing algorithms. Given a data set and a target key it
//! produces a deterministic, replayable sequence of algorithm steps and
//! drives them through a playback controller (step forward/back, autoplay,
//! found/not-found terminal state). Rendering, routing and styling are the
//! embedder's job; this crate owns the semantics.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tracekit::session::{Binary, SearchSession};
//!
//! let mut session = SearchSession::<Binary>::new(10, 2);
//! session.generate()?;
//! session.search_text("42")?;
//!
//! while let Some(step) = session.playback().current_step() {
//!     render(step);
//!     session.playback_mut().next();
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        Session Facades (session)          │
//! ├──────────────────────┬───────────────────┤
//! │  Playback Controller │  Persistence      │
//! │      (playback)      │  Adapter (store)  │
//! ├──────────────────────┴───────────────────┤
//! │   Step Generators (search) │ Probe Traces │
//! ├────────────────────────────┴─────────────┤
//! │  KeySet Model (keys) │ HashTable (hash)   │
//! ├───────────────────────────────────────────┤
//! │   Errors (error) │ Constants (config)     │
//! └───────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: a model snapshot validates and applies a mutation,
//! a generator computes a full step trace synchronously, and the playback
//! controller owns an index into that trace. Models are immutable
//! snapshots; every mutation returns the next snapshot, so a rejected
//! operation can never leave partial state behind.
//!
//! ## Module Overview
//!
//! - [`keys`]: ordered, duplicate-free integer key sets with digit-width
//!   validation and unique random generation
//! - [`search`]: binary and linear search step generators
//! - [`hash`]: hash table model (modulo / mid-square / truncation schemes,
//!   five collision resolution strategies, probe traces)
//! - [`playback`]: generic playback state machine with epoch-guarded
//!   autoplay tickets
//! - [`store`]: named-blob persistence adapter, per algorithm family
//! - [`remote`]: wire shapes for the optional remote binary-search
//!   collaborator, plus a local provider
//! - [`session`]: per-algorithm facades wiring models, traces, playback
//!   and snapshots together
//! - [`error`]: the typed failure taxonomy; nothing in the engine is fatal

pub mod config;
pub mod error;
pub mod hash;
pub mod keys;
pub mod playback;
pub mod remote;
pub mod search;
pub mod session;
pub mod store;

pub use error::{ModelError, StructuralError, ValidationError};
pub use hash::{CollisionMethod, HashScheme, HashTable, ProbeStep, ProbeTrace, Slot};
pub use keys::{KeyOrder, KeySet};
pub use playback::{AutoplayTicket, Playback, Terminal, TickOutcome};
pub use search::{BinaryStep, LinearStep, Trace, Verdict};
pub use session::{Binary, HashSession, Linear, SearchAlgorithm, SearchSession};
pub use store::{Family, MemoryStore, SavedStructure, StructureStore};
