//! Container format sniffing.
//!
//! Classifies a caller-supplied byte buffer as the one WAV or MP3 profile
//! the hardware codec can decode, so the transport controller never hands
//! the codec a buffer it would choke on. Pure reads, no side effects; safe
//! to call from any number of threads.

pub mod mp3;
pub mod wav;

use crate::models::error::FormatError;
use crate::models::profile::{AudioProfile, Container};

/// Classify and validate `buffer` against the accepted profile for the
/// hinted container.
///
/// The hint comes from the file name suffix (see [`Container::from_name`]);
/// the header bytes are still fully validated.
pub fn sniff(buffer: &[u8], hint: Container) -> Result<AudioProfile, FormatError> {
    match hint {
        Container::Wav => wav::sniff_wav(buffer),
        Container::Mp3 => mp3::sniff_mp3(buffer),
    }
}
