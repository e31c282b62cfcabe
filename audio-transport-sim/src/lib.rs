//! # audio-transport-sim
//!
//! Software codec backend for audio-transport-core.
//!
//! Provides:
//! - `SimCodec` — `CodecDriver` that plays and captures against a clock
//! - `FrozenClock` — manually advanced time source for deterministic tests
//!
//! ## Usage
//! ```ignore
//! use audio_transport_core::{DirectoryStore, TransportController};
//! use audio_transport_sim::SimCodec;
//!
//! let controller = TransportController::new(SimCodec::new(), DirectoryStore::new("sounds"));
//! ```

pub mod sim_codec;

pub use sim_codec::{FrozenClock, SimCodec};
