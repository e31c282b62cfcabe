//! # audio-transport-core
//!
//! Platform-agnostic audio transport core library.
//!
//! Provides container sniffing, the playback/recording state machine over
//! the single shared codec resource, and WAV clip I/O. Hardware backends
//! implement the `CodecDriver` trait and plug into the generic
//! `TransportController`; `audio-transport-sim` ships a software backend
//! for host-side development.
//!
//! ## Architecture
//!
//! ```text
//! audio-transport-core (this crate)
//! ├── traits/       ← CodecDriver, FileStore, SettingsStore
//! ├── models/       ← TransportError, TransportState, AudioProfile, RecordedClip
//! ├── sniff/        ← WAV / MP3 header classification
//! ├── session/      ← TransportController (single-resource arbiter)
//! ├── storage/      ← WAV clip writer, directory file store, JSON settings
//! └── sounds        ← onboard tone table
//! ```

pub mod models;
pub mod session;
pub mod sniff;
pub mod sounds;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::clip::{ClipMetadata, RecordedClip};
pub use models::error::{FormatError, TransportError};
pub use models::profile::{AudioProfile, Container};
pub use models::state::TransportState;
pub use session::transport::{PlaybackSource, TransportController};
pub use sniff::sniff;
pub use sounds::{onboard_sound, ONBOARD_SOUND_COUNT};
pub use storage::dir_store::DirectoryStore;
pub use storage::settings_file::JsonSettingsStore;
pub use traits::codec_driver::CodecDriver;
pub use traits::file_store::FileStore;
pub use traits::settings_store::SettingsStore;
