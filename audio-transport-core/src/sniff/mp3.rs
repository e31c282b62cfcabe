//! MP3 frame header classification with ID3v2 tag skipping.
//!
//! An MP3 stream either starts with a raw frame header (`0xFF` sync byte at
//! offset 0) or carries a leading ID3v2 tag whose synchsafe size field says
//! where the first frame header begins. Only the header fields the codec
//! cares about are decoded; no frame payload is touched.

use crate::models::error::FormatError;
use crate::models::profile::{AudioProfile, MP3_MODE_MONO, MP3_RATE_CODE_12KHZ, MPEG_VERSION_2_5};

/// First byte of an ID3v2 tag (`'I'` of "ID3").
const ID3_MARKER: u8 = b'I';

/// Fixed size of the ID3v2 tag header preceding the tag body.
const ID3_HEADER_SIZE: usize = 10;

/// Sync byte opening an MP3 frame header.
const FRAME_SYNC: u8 = 0xFF;

/// Classify an MP3 buffer against the accepted profile.
///
/// An ID3v2 tag, if present, is transparent: the same frame header yields
/// the same result whether or not a tag precedes it.
pub fn sniff_mp3(buffer: &[u8]) -> Result<AudioProfile, FormatError> {
    let frame_offset = if buffer.first() == Some(&ID3_MARKER) {
        ID3_HEADER_SIZE + id3_tag_size(buffer)?
    } else {
        0
    };

    let header: [u8; 4] = buffer
        .get(frame_offset..frame_offset + 4)
        .and_then(|h| h.try_into().ok())
        .ok_or_else(|| {
            FormatError::Unsupported(format!(
                "mp3 frame header truncated at offset {}",
                frame_offset
            ))
        })?;

    if header[0] != FRAME_SYNC {
        return Err(FormatError::Unsupported(format!(
            "missing mp3 frame sync at offset {}",
            frame_offset
        )));
    }

    let version = (header[1] >> 3) & 0x03;
    let sample_rate_code = (header[2] >> 2) & 0x03;
    let channel_mode = (header[3] >> 6) & 0x03;

    if version != MPEG_VERSION_2_5
        || sample_rate_code != MP3_RATE_CODE_12KHZ
        || channel_mode != MP3_MODE_MONO
    {
        return Err(FormatError::Unsupported(format!(
            "mp3 version={:#04b} rate_code={:#04b} mode={:#04b} (need 12 kHz mono MPEG-2.5)",
            version, sample_rate_code, channel_mode
        )));
    }

    Ok(AudioProfile::Mp3 {
        version,
        sample_rate_code,
        channel_mode,
    })
}

/// Decode the ID3v2 tag body size from the synchsafe bytes at offsets 6-9.
///
/// Synchsafe: four 7-bit bytes, high bit always zero, so the size can never
/// contain a false `0xFF` sync byte.
fn id3_tag_size(buffer: &[u8]) -> Result<usize, FormatError> {
    let bytes = buffer.get(6..10).ok_or_else(|| {
        FormatError::Unsupported(format!("id3 tag header truncated: {} bytes", buffer.len()))
    })?;

    let size = (usize::from(bytes[0]) << 21)
        | (usize::from(bytes[1]) << 14)
        | (usize::from(bytes[2]) << 7)
        | usize::from(bytes[3]);
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame header for the accepted profile: MPEG-2.5, layer III,
    /// rate code 0b01 (12 kHz), mono.
    fn accepted_frame_header() -> [u8; 4] {
        [0xFF, 0b1110_0010, 0b0001_0100, 0b1100_0000]
    }

    fn with_id3_tag(body_len: usize, frame: &[u8]) -> Vec<u8> {
        let mut buffer = vec![b'I', b'D', b'3', 0x03, 0x00, 0x00];
        buffer.push(((body_len >> 21) & 0x7F) as u8);
        buffer.push(((body_len >> 14) & 0x7F) as u8);
        buffer.push(((body_len >> 7) & 0x7F) as u8);
        buffer.push((body_len & 0x7F) as u8);
        buffer.extend(std::iter::repeat(0u8).take(body_len));
        buffer.extend_from_slice(frame);
        buffer
    }

    #[test]
    fn accepts_raw_frame_header() {
        let profile = sniff_mp3(&accepted_frame_header()).unwrap();
        assert_eq!(
            profile,
            AudioProfile::Mp3 {
                version: 0b00,
                sample_rate_code: 0b01,
                channel_mode: 0b11,
            }
        );
    }

    #[test]
    fn id3_tag_is_transparent() {
        let raw = sniff_mp3(&accepted_frame_header());
        let tagged = sniff_mp3(&with_id3_tag(0, &accepted_frame_header()));
        assert_eq!(raw, tagged);

        // Larger tag bodies exercise the synchsafe arithmetic (200 > 0x7F).
        let big_tag = sniff_mp3(&with_id3_tag(200, &accepted_frame_header()));
        assert_eq!(raw, big_tag);
    }

    #[test]
    fn rejects_wrong_version() {
        let mut frame = accepted_frame_header();
        frame[1] |= 0b0001_1000; // MPEG-1
        assert!(matches!(
            sniff_mp3(&frame),
            Err(FormatError::Unsupported(_))
        ));
    }

    #[test]
    fn rejects_wrong_rate_code() {
        let mut frame = accepted_frame_header();
        frame[2] = 0b0001_0000; // rate code 0b00
        assert!(matches!(
            sniff_mp3(&frame),
            Err(FormatError::Unsupported(_))
        ));
    }

    #[test]
    fn rejects_stereo_mode() {
        let mut frame = accepted_frame_header();
        frame[3] = 0b0000_0000; // stereo
        assert!(matches!(
            sniff_mp3(&frame),
            Err(FormatError::Unsupported(_))
        ));
    }

    #[test]
    fn rejects_missing_sync() {
        let buffer = [0x00, 0x00, 0x00, 0x00];
        assert!(matches!(
            sniff_mp3(&buffer),
            Err(FormatError::Unsupported(_))
        ));
    }

    #[test]
    fn rejects_tag_with_no_frame_after_it() {
        // Tag claims a body that runs past the end of the buffer.
        let mut buffer = with_id3_tag(10, &accepted_frame_header());
        buffer.truncate(ID3_HEADER_SIZE + 10);
        assert!(matches!(
            sniff_mp3(&buffer),
            Err(FormatError::Unsupported(_))
        ));
    }

    #[test]
    fn rejects_truncated_tag_header() {
        let buffer = [b'I', b'D', b'3'];
        assert!(matches!(
            sniff_mp3(&buffer),
            Err(FormatError::Unsupported(_))
        ));
    }
}
