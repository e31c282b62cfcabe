//! Onboard sound table.
//!
//! Short tone sequences (startup, confirm, error, shutdown) rendered to the
//! accepted PCM profile on demand. These buffers are valid by construction
//! and never pass through the sniffer.

use crate::models::profile::SAMPLE_RATE_HZ;

/// One tone segment: frequency in Hz, duration in milliseconds.
type Segment = (u32, u32);

const STARTUP: &[Segment] = &[(880, 80), (1175, 80), (1760, 140)];
const CONFIRM: &[Segment] = &[(1320, 60), (1760, 100)];
const ERROR: &[Segment] = &[(440, 120), (330, 180)];
const SHUTDOWN: &[Segment] = &[(1760, 80), (1175, 80), (880, 140)];

const SOUNDS: &[&[Segment]] = &[STARTUP, CONFIRM, ERROR, SHUTDOWN];

/// Number of entries in the onboard sound table.
pub const ONBOARD_SOUND_COUNT: usize = SOUNDS.len();

/// Peak amplitude of rendered tones, about -10 dBFS.
const AMPLITUDE: i16 = i16::MAX / 3;

/// Render the numbered onboard sound as mono 12 kHz 16-bit PCM bytes.
///
/// Returns `None` for indices outside the table.
pub fn onboard_sound(index: usize) -> Option<Vec<u8>> {
    let segments = SOUNDS.get(index)?;
    let total_ms: u32 = segments.iter().map(|&(_, ms)| ms).sum();
    let mut data = Vec::with_capacity((SAMPLE_RATE_HZ * total_ms / 1000) as usize * 2);

    for &(freq, ms) in segments.iter() {
        render_tone(freq, ms, &mut data);
    }
    Some(data)
}

/// Append a square-wave tone to `out` as little-endian 16-bit samples.
fn render_tone(freq: u32, ms: u32, out: &mut Vec<u8>) {
    let sample_count = SAMPLE_RATE_HZ * ms / 1000;
    let half_period = (SAMPLE_RATE_HZ / (2 * freq)).max(1);

    for n in 0..sample_count {
        let value = if (n / half_period) % 2 == 0 {
            AMPLITUDE
        } else {
            -AMPLITUDE
        };
        out.extend_from_slice(&value.to_le_bytes());
    }
}
