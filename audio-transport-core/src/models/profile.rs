use std::fmt;

use super::error::FormatError;

/// Sample rate of the one PCM profile the codec decodes, in Hz.
pub const SAMPLE_RATE_HZ: u32 = 12_000;

/// Channel count of the accepted profile (mono).
pub const CHANNELS: u16 = 1;

/// Bit depth of the accepted PCM profile.
pub const BITS_PER_SAMPLE: u16 = 16;

/// MPEG version bits for MPEG-2.5 (frame header byte 1, bits 3-4).
pub const MPEG_VERSION_2_5: u8 = 0b00;

/// Sample-rate code for 12 kHz under MPEG-2.5 (frame header byte 2, bits 2-3).
pub const MP3_RATE_CODE_12KHZ: u8 = 0b01;

/// Channel-mode code for single channel (frame header byte 3, bits 6-7).
pub const MP3_MODE_MONO: u8 = 0b11;

/// Longest recording the capture buffer can hold, in seconds.
pub const MAX_RECORD_SECS: u32 = 10;

/// Maximum volume on the public scale.
pub const MAX_VOLUME: u8 = 10;

/// Factor between the public 0-10 volume scale and the codec's 0-100 scale.
pub const VOLUME_SCALE: u8 = 10;

/// Volume applied at controller construction, public scale.
pub const DEFAULT_VOLUME: u8 = 5;

/// Longest file name the storage collaborator accepts.
pub const MAX_FILE_NAME_LEN: usize = 22;

/// Outer container of an audio byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Wav,
    Mp3,
}

impl Container {
    /// Derive the container hint from a file name suffix.
    ///
    /// The suffix is the only format hint available when loading by name;
    /// the sniffer still validates the actual header bytes.
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".wav") {
            Ok(Self::Wav)
        } else if lower.ends_with(".mp3") {
            Ok(Self::Mp3)
        } else {
            Err(FormatError::UnknownContainer(name.to_string()))
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wav => write!(f, "wav"),
            Self::Mp3 => write!(f, "mp3"),
        }
    }
}

/// Parameters of a validated audio buffer.
///
/// A profile is only ever constructed by the sniffer (or the PCM constant
/// below) after every field has been checked against the accepted values,
/// so holding one is proof the buffer is playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioProfile {
    Wav {
        channels: u16,
        sample_rate: u32,
        bits_per_sample: u16,
    },
    Mp3 {
        version: u8,
        sample_rate_code: u8,
        channel_mode: u8,
    },
}

impl AudioProfile {
    /// The accepted PCM profile: mono, 12 kHz, 16-bit.
    ///
    /// Used for buffers that are valid by construction (onboard sounds,
    /// finished recordings) and never pass through the sniffer.
    pub const fn pcm() -> Self {
        Self::Wav {
            channels: CHANNELS,
            sample_rate: SAMPLE_RATE_HZ,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    pub fn container(&self) -> Container {
        match self {
            Self::Wav { .. } => Container::Wav,
            Self::Mp3 { .. } => Container::Mp3,
        }
    }
}
