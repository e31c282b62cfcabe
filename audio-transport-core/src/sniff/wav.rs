//! Canonical 44-byte WAV header parsing and generation.
//!
//! The codec decodes exactly one PCM profile, so the sniffer reads the
//! format fields at their fixed canonical offsets instead of walking
//! sub-chunks. Files with extra chunks before `fmt ` are rejected along
//! with everything else that is not the accepted profile.

use crate::models::error::FormatError;
use crate::models::profile::{AudioProfile, BITS_PER_SAMPLE, CHANNELS, SAMPLE_RATE_HZ};

/// Size of the canonical WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Classify a WAV buffer against the accepted profile.
///
/// Reads the `fmt ` fields at their canonical offsets:
/// channels at 22 (u16 LE), sample rate at 24 (u32 LE), bits per sample
/// at 34 (u16 LE). Payload bytes after the header are not inspected.
pub fn sniff_wav(buffer: &[u8]) -> Result<AudioProfile, FormatError> {
    if buffer.len() < WAV_HEADER_SIZE {
        return Err(FormatError::Unsupported(format!(
            "wav header truncated: {} bytes",
            buffer.len()
        )));
    }

    let channels = u16::from_le_bytes([buffer[22], buffer[23]]);
    let sample_rate = u32::from_le_bytes([buffer[24], buffer[25], buffer[26], buffer[27]]);
    let bits_per_sample = u16::from_le_bytes([buffer[34], buffer[35]]);

    if channels != CHANNELS || sample_rate != SAMPLE_RATE_HZ || bits_per_sample != BITS_PER_SAMPLE {
        return Err(FormatError::Unsupported(format!(
            "wav {} ch / {} Hz / {} bit (need {} ch / {} Hz / {} bit)",
            channels, sample_rate, bits_per_sample, CHANNELS, SAMPLE_RATE_HZ, BITS_PER_SAMPLE
        )));
    }

    Ok(AudioProfile::Wav {
        channels,
        sample_rate,
        bits_per_sample,
    })
}

/// Generate a 44-byte WAV RIFF header.
///
/// Format: PCM (format code 1), little-endian.
///
/// Layout:
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    file size - 8 (36 + data_size)
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16 (PCM format chunk size)
/// [20-21]  1 (PCM format code)
/// [22-23]  channels
/// [24-27]  sample_rate
/// [28-31]  byte_rate = sample_rate * channels * bit_depth / 8
/// [32-33]  block_align = channels * bit_depth / 8
/// [34-35]  bit_depth
/// [36-39]  "data"
/// [40-43]  data_size
/// ```
pub fn generate_wav_header(
    sample_rate: u32,
    bit_depth: u16,
    channels: u16,
    data_size: u32,
) -> [u8; WAV_HEADER_SIZE] {
    let byte_rate = sample_rate * u32::from(channels) * u32::from(bit_depth) / 8;
    let block_align = channels * bit_depth / 8;
    let chunk_size = 36 + data_size;

    let mut header = [0u8; WAV_HEADER_SIZE];

    // RIFF chunk descriptor
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&chunk_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt sub-chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes());
    header[22..24].copy_from_slice(&channels.to_le_bytes());
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&bit_depth.to_le_bytes());

    // data sub-chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(channels: u16, sample_rate: u32, bits: u16) -> Vec<u8> {
        generate_wav_header(sample_rate, bits, channels, 0).to_vec()
    }

    #[test]
    fn accepts_mono_12khz_16bit() {
        let profile = sniff_wav(&header(1, 12_000, 16)).unwrap();
        assert_eq!(profile, AudioProfile::pcm());
    }

    #[test]
    fn payload_after_header_is_ignored() {
        let mut buffer = header(1, 12_000, 16);
        buffer.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert!(sniff_wav(&buffer).is_ok());
    }

    #[test]
    fn rejects_stereo() {
        let err = sniff_wav(&header(2, 12_000, 16)).unwrap_err();
        assert!(matches!(err, FormatError::Unsupported(_)));
    }

    #[test]
    fn rejects_8khz() {
        let err = sniff_wav(&header(1, 8_000, 16)).unwrap_err();
        assert!(matches!(err, FormatError::Unsupported(_)));
    }

    #[test]
    fn rejects_8bit() {
        let err = sniff_wav(&header(1, 12_000, 8)).unwrap_err();
        assert!(matches!(err, FormatError::Unsupported(_)));
    }

    #[test]
    fn rejects_truncated_header() {
        let buffer = header(1, 12_000, 16);
        let err = sniff_wav(&buffer[..43]).unwrap_err();
        assert!(matches!(err, FormatError::Unsupported(_)));
    }

    #[test]
    fn generated_header_magic_and_fields() {
        let header = generate_wav_header(12_000, 16, 1, 24_000);
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(&header[36..40], b"data");

        let byte_rate = u32::from_le_bytes([header[28], header[29], header[30], header[31]]);
        assert_eq!(byte_rate, 24_000); // 12000 * 1 * 16/8

        let data_size = u32::from_le_bytes([header[40], header[41], header[42], header[43]]);
        assert_eq!(data_size, 24_000);

        let chunk_size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        assert_eq!(chunk_size, 36 + 24_000);
    }
}
