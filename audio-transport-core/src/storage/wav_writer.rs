use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::models::clip::{ClipMetadata, RecordedClip};
use crate::models::error::TransportError;
use crate::sniff::wav;

/// Write a recorded clip to `path` as a standard WAV file.
///
/// The clip is fully in memory, so the header is written with its final
/// sizes up front — no patching pass. Returns the SHA-256 hex checksum of
/// the finished file.
pub fn write_clip(path: &Path, clip: &RecordedClip) -> Result<String, TransportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| TransportError::IoError(format!("failed to create directory: {}", e)))?;
    }

    let header = wav::generate_wav_header(
        clip.sample_rate,
        clip.bits_per_sample,
        clip.channels,
        clip.data.len() as u32,
    );

    let mut file = Vec::with_capacity(wav::WAV_HEADER_SIZE + clip.data.len());
    file.extend_from_slice(&header);
    file.extend_from_slice(&clip.data);

    fs::write(path, &file)
        .map_err(|e| TransportError::IoError(format!("failed to write {}: {}", path.display(), e)))?;

    let digest = Sha256::digest(&file);
    Ok(hex_encode(&digest))
}

/// Write clip metadata as a JSON sidecar file.
///
/// Creates `{clip_path}.metadata.json` alongside the clip.
pub fn write_metadata(metadata: &ClipMetadata, clip_path: &Path) -> Result<(), TransportError> {
    let metadata_path = clip_path.with_extension("metadata.json");
    let json = serde_json::to_string_pretty(metadata)
        .map_err(|e| TransportError::IoError(format!("failed to serialize metadata: {}", e)))?;
    fs::write(&metadata_path, json)
        .map_err(|e| TransportError::IoError(format!("failed to write metadata: {}", e)))?;
    Ok(())
}

/// Read clip metadata from a JSON sidecar file.
pub fn read_metadata(clip_path: &Path) -> Result<ClipMetadata, TransportError> {
    let metadata_path = clip_path.with_extension("metadata.json");
    let json = fs::read_to_string(&metadata_path)
        .map_err(|e| TransportError::IoError(format!("failed to read metadata: {}", e)))?;
    serde_json::from_str(&json)
        .map_err(|e| TransportError::IoError(format!("failed to parse metadata: {}", e)))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_file_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("audio_transport_test_{}", name))
    }

    #[test]
    fn written_clip_is_a_valid_wav_file() {
        let path = temp_file_path("clip.wav");
        let clip = RecordedClip::from_capture(vec![0x42u8; 240]);

        let checksum = write_clip(&path, &clip).unwrap();
        assert_eq!(checksum.len(), 64); // sha-256 hex

        let file_data = fs::read(&path).unwrap();
        assert_eq!(file_data.len(), 44 + 240);
        assert_eq!(&file_data[0..4], b"RIFF");
        assert_eq!(&file_data[8..12], b"WAVE");

        let sample_rate =
            u32::from_le_bytes([file_data[24], file_data[25], file_data[26], file_data[27]]);
        assert_eq!(sample_rate, 12_000);

        let data_size =
            u32::from_le_bytes([file_data[40], file_data[41], file_data[42], file_data[43]]);
        assert_eq!(data_size, 240);

        // The written file round-trips through the sniffer.
        assert!(wav::sniff_wav(&file_data).is_ok());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn metadata_sidecar_round_trip() {
        let path = temp_file_path("meta_clip.wav");
        let clip = RecordedClip::from_capture(vec![0u8; 24_000]);
        let checksum = write_clip(&path, &clip).unwrap();

        let meta = clip.metadata(&path.to_string_lossy(), &checksum);
        write_metadata(&meta, &path).unwrap();

        let loaded = read_metadata(&path).unwrap();
        assert_eq!(loaded, meta);

        fs::remove_file(&path).ok();
        fs::remove_file(path.with_extension("metadata.json")).ok();
    }
}
