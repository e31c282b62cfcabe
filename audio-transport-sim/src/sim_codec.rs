//! Simulated codec engine.
//!
//! Plays and captures against a clock instead of real hardware: playback
//! "finishes" when the buffer's nominal duration has elapsed, capture
//! produces silence of the requested length. Useful for exercising the
//! transport controller on a development host.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use audio_transport_core::models::profile::{AudioProfile, SAMPLE_RATE_HZ};
use audio_transport_core::traits::codec_driver::CodecDriver;

/// Nominal bitrate assumed for compressed buffers when estimating their
/// playback duration.
const COMPRESSED_BITRATE_BPS: f64 = 32_000.0;

/// Manually advanced clock for deterministic tests.
///
/// Clones share the same time source, so a test can keep a handle after
/// moving the codec into a controller.
#[derive(Clone)]
pub struct FrozenClock(Arc<Mutex<f64>>);

impl FrozenClock {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(0.0)))
    }

    pub fn advance_secs(&self, secs: f64) {
        *self.0.lock() += secs;
    }

    fn now(&self) -> f64 {
        *self.0.lock()
    }
}

enum Clock {
    Wall { epoch: Instant },
    Frozen(FrozenClock),
}

enum Activity {
    Playing { ends_at: f64 },
    PlayPaused { remaining: f64 },
    Recording { ends_at: f64, duration_secs: u32 },
}

/// Software implementation of [`CodecDriver`].
pub struct SimCodec {
    clock: Clock,
    activity: Option<Activity>,
    output_level: u8,
}

impl SimCodec {
    /// A codec running on the wall clock.
    pub fn new() -> Self {
        Self {
            clock: Clock::Wall {
                epoch: Instant::now(),
            },
            activity: None,
            output_level: 0,
        }
    }

    /// A codec on a frozen clock, plus the handle that advances it.
    pub fn frozen() -> (Self, FrozenClock) {
        let clock = FrozenClock::new();
        let codec = Self {
            clock: Clock::Frozen(clock.clone()),
            activity: None,
            output_level: 0,
        };
        (codec, clock)
    }

    /// Last output level applied, on the 0-100 scale.
    pub fn output_level(&self) -> u8 {
        self.output_level
    }

    fn now(&self) -> f64 {
        match &self.clock {
            Clock::Wall { epoch } => epoch.elapsed().as_secs_f64(),
            Clock::Frozen(clock) => clock.now(),
        }
    }

    fn is_busy(&self) -> bool {
        let now = self.now();
        match &self.activity {
            None => false,
            Some(Activity::PlayPaused { .. }) => true,
            Some(Activity::Playing { ends_at }) | Some(Activity::Recording { ends_at, .. }) => {
                now < *ends_at
            }
        }
    }

    fn begin(&mut self, activity: Activity) -> Result<(), String> {
        if self.is_busy() {
            return Err("sim codec engine is busy".into());
        }
        self.activity = Some(activity);
        Ok(())
    }
}

impl Default for SimCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecDriver for SimCodec {
    fn play_pcm(&mut self, data: &[u8], _profile: &AudioProfile) -> Result<(), String> {
        // Mono 16-bit: two bytes per frame.
        let secs = (data.len() / 2) as f64 / f64::from(SAMPLE_RATE_HZ);
        let ends_at = self.now() + secs;
        log::debug!("sim: pcm playback for {:.3} s", secs);
        self.begin(Activity::Playing { ends_at })
    }

    fn play_compressed(&mut self, data: &[u8], _profile: &AudioProfile) -> Result<(), String> {
        let secs = (data.len() * 8) as f64 / COMPRESSED_BITRATE_BPS;
        let ends_at = self.now() + secs;
        log::debug!("sim: compressed playback for ~{:.3} s", secs);
        self.begin(Activity::Playing { ends_at })
    }

    fn start_capture(&mut self, duration_secs: u32) -> Result<(), String> {
        let ends_at = self.now() + f64::from(duration_secs);
        log::debug!("sim: capture for {} s", duration_secs);
        self.begin(Activity::Recording {
            ends_at,
            duration_secs,
        })
    }

    fn pause(&mut self) {
        if let Some(Activity::Playing { ends_at }) = self.activity {
            let remaining = (ends_at - self.now()).max(0.0);
            self.activity = Some(Activity::PlayPaused { remaining });
        }
    }

    fn resume(&mut self) {
        if let Some(Activity::PlayPaused { remaining }) = self.activity {
            self.activity = Some(Activity::Playing {
                ends_at: self.now() + remaining,
            });
        }
    }

    fn stop(&mut self) {
        self.activity = None;
    }

    fn is_play_finished(&self) -> bool {
        matches!(
            self.activity,
            Some(Activity::Playing { ends_at }) if self.now() >= ends_at
        )
    }

    fn is_capture_finished(&self) -> bool {
        matches!(
            self.activity,
            Some(Activity::Recording { ends_at, .. }) if self.now() >= ends_at
        )
    }

    fn capture_data(&mut self) -> Vec<u8> {
        match self.activity {
            Some(Activity::Recording {
                ends_at,
                duration_secs,
            }) if self.now() >= ends_at => {
                self.activity = None;
                // Silence: duration × rate mono 16-bit frames.
                vec![0u8; (duration_secs * SAMPLE_RATE_HZ) as usize * 2]
            }
            _ => Vec::new(),
        }
    }

    fn set_output_level(&mut self, level: u8) {
        self.output_level = level;
    }
}
