use serde::{Deserialize, Serialize};

use super::profile::{BITS_PER_SAMPLE, CHANNELS, SAMPLE_RATE_HZ};

/// A completed recording, held by the transport controller until the caller
/// copies it out.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedClip {
    /// Raw little-endian 16-bit PCM samples.
    pub data: Vec<u8>,
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub duration_secs: f64,
}

impl RecordedClip {
    /// Wrap a drained capture buffer in the fixed recording profile.
    ///
    /// Duration is derived from the sample count, not the requested
    /// recording length, so a capture the hardware cut short reports what
    /// was actually captured.
    pub fn from_capture(data: Vec<u8>) -> Self {
        let bytes_per_frame = u32::from(CHANNELS) * u32::from(BITS_PER_SAMPLE) / 8;
        let frames = data.len() as f64 / f64::from(bytes_per_frame);
        Self {
            data,
            sample_rate: SAMPLE_RATE_HZ,
            channels: CHANNELS,
            bits_per_sample: BITS_PER_SAMPLE,
            duration_secs: frames / f64::from(SAMPLE_RATE_HZ),
        }
    }

    /// Build the serializable sidecar metadata for a clip written to `file_path`.
    pub fn metadata(&self, file_path: &str, checksum: &str) -> ClipMetadata {
        ClipMetadata {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            duration_secs: self.duration_secs,
            sample_rate: self.sample_rate,
            channels: self.channels,
            bits_per_sample: self.bits_per_sample,
            file_path: file_path.to_string(),
            checksum: checksum.to_string(),
        }
    }
}

/// Metadata stored alongside a recorded clip written to disk.
///
/// Serializable for JSON sidecar export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipMetadata {
    pub id: String,
    pub created_at: String,
    pub duration_secs: f64,
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub file_path: String,
    pub checksum: String,
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn capture_duration_from_sample_count() {
        // 24000 bytes = 12000 mono 16-bit frames = 1 second at 12 kHz.
        let clip = RecordedClip::from_capture(vec![0u8; 24_000]);
        assert_eq!(clip.sample_rate, 12_000);
        assert_eq!(clip.channels, 1);
        assert_eq!(clip.bits_per_sample, 16);
        assert_relative_eq!(clip.duration_secs, 1.0);
    }

    #[test]
    fn empty_capture_has_zero_duration() {
        let clip = RecordedClip::from_capture(Vec::new());
        assert_relative_eq!(clip.duration_secs, 0.0);
    }

    #[test]
    fn metadata_carries_format_fields() {
        let clip = RecordedClip::from_capture(vec![0u8; 48_000]);
        let meta = clip.metadata("rec/0.wav", "abc123");
        assert_eq!(meta.sample_rate, 12_000);
        assert_eq!(meta.channels, 1);
        assert_eq!(meta.file_path, "rec/0.wav");
        assert_eq!(meta.checksum, "abc123");
        assert!(!meta.id.is_empty());
    }
}
