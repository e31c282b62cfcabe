use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::models::clip::RecordedClip;
use crate::models::error::TransportError;
use crate::models::profile::{
    AudioProfile, Container, DEFAULT_VOLUME, MAX_FILE_NAME_LEN, MAX_RECORD_SECS, MAX_VOLUME,
    VOLUME_SCALE,
};
use crate::models::state::TransportState;
use crate::sniff;
use crate::sounds;
use crate::traits::codec_driver::CodecDriver;
use crate::traits::file_store::FileStore;
use crate::traits::settings_store::SettingsStore;

/// Where a playback buffer comes from.
///
/// File and raw-buffer sources pass through the sniffer; onboard sounds and
/// the last recording are valid by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackSource {
    /// Load the named file through the file store and sniff it. The
    /// container hint is taken from the name suffix.
    File { name: String },

    /// Play a caller-supplied byte buffer, sniffed with the given hint.
    Buffer { data: Vec<u8>, container: Container },

    /// Play an entry from the onboard sound table.
    Onboard(usize),

    /// Replay the most recently completed recording.
    LastRecording,
}

/// Mutable session state. One lock covers the whole read-modify-write of
/// state + buffer + codec command, so callers never observe a half-applied
/// transition.
struct Inner<C: CodecDriver> {
    codec: C,
    state: TransportState,
    /// Bytes backing the active playback session. Released on stop,
    /// completion, or error.
    active_buffer: Option<Vec<u8>>,
    /// Clip of the last completed recording, kept until the next
    /// `start_recording` overwrites it.
    last_clip: Option<RecordedClip>,
    /// Volume on the internal 0-100 scale.
    volume: u8,
}

/// Arbiter of the single shared codec resource.
///
/// Exposes the play / record / pause / resume / stop lifecycle with strict
/// mutual exclusion: starting a second session while one is active fails
/// with `AlreadyBusy` rather than queueing or overriding, because the
/// hardware has no queue and a silent override would corrupt output.
///
/// Operations complete synchronously or fail; nothing blocks waiting for
/// audio to finish. Callers poll [`poll_finished`](Self::poll_finished) to
/// observe completion.
///
/// Methods take `&self`, so the controller can be shared behind an `Arc`
/// across caller threads.
pub struct TransportController<C: CodecDriver, F: FileStore> {
    inner: Mutex<Inner<C>>,
    store: F,
    /// Sticky sound-detection bit, set by the sensor-sampling collaborator.
    /// Independent of transport state.
    sound_event: AtomicBool,
}

impl<C: CodecDriver, F: FileStore> TransportController<C, F> {
    /// Create an idle controller and apply the default volume to the codec.
    pub fn new(codec: C, store: F) -> Self {
        let mut codec = codec;
        codec.set_output_level(DEFAULT_VOLUME * VOLUME_SCALE);
        Self {
            inner: Mutex::new(Inner {
                codec,
                state: TransportState::Idle,
                active_buffer: None,
                last_clip: None,
                volume: DEFAULT_VOLUME * VOLUME_SCALE,
            }),
            store,
            sound_event: AtomicBool::new(false),
        }
    }

    /// Current session state.
    pub fn state(&self) -> TransportState {
        self.inner.lock().state
    }

    /// Start playback from `source`. Transitions: idle → playing.
    ///
    /// Fails with `AlreadyBusy` unless idle; a sniffer rejection surfaces as
    /// `UnsupportedFormat`, a file-store failure as `IoError`, and a codec
    /// failure as `Hardware` — all of them leave the session idle.
    pub fn start_playback(&self, source: PlaybackSource) -> Result<(), TransportError> {
        let mut inner = self.inner.lock();
        if !inner.state.is_idle() {
            log::warn!("start_playback rejected: transport is {}", inner.state);
            return Err(TransportError::AlreadyBusy);
        }

        let (data, profile) = resolve_source(source, &self.store, inner.last_clip.as_ref())?;

        let command = match profile.container() {
            Container::Wav => inner.codec.play_pcm(&data, &profile),
            Container::Mp3 => inner.codec.play_compressed(&data, &profile),
        };
        if let Err(e) = command {
            log::error!("codec refused playback: {}", e);
            return Err(TransportError::Hardware(e));
        }

        log::debug!("playback started: {} bytes, {:?}", data.len(), profile);
        inner.active_buffer = Some(data);
        inner.state = TransportState::Playing;
        Ok(())
    }

    /// Start recording for `duration_secs`. Transitions: idle → recording.
    ///
    /// Durations outside 1..=10 seconds are rejected before any hardware
    /// action. Overwrites the previously held clip.
    pub fn start_recording(&self, duration_secs: u32) -> Result<(), TransportError> {
        if duration_secs == 0 || duration_secs > MAX_RECORD_SECS {
            return Err(TransportError::InvalidArgument(format!(
                "recording duration {} s out of range 1..={} s",
                duration_secs, MAX_RECORD_SECS
            )));
        }

        let mut inner = self.inner.lock();
        if !inner.state.is_idle() {
            log::warn!("start_recording rejected: transport is {}", inner.state);
            return Err(TransportError::AlreadyBusy);
        }

        if let Err(e) = inner.codec.start_capture(duration_secs) {
            log::error!("codec refused capture: {}", e);
            return Err(TransportError::Hardware(e));
        }

        log::debug!("recording started: {} s", duration_secs);
        inner.last_clip = None;
        inner.state = TransportState::Recording;
        Ok(())
    }

    /// Pause playback. Transitions: playing → paused.
    pub fn pause(&self) -> Result<(), TransportError> {
        let mut inner = self.inner.lock();
        if !inner.state.is_playing() {
            return Err(TransportError::NotPlaying);
        }
        inner.codec.pause();
        inner.state = TransportState::Paused;
        log::debug!("playback paused");
        Ok(())
    }

    /// Resume playback. Transitions: paused → playing.
    pub fn resume(&self) -> Result<(), TransportError> {
        let mut inner = self.inner.lock();
        if !inner.state.is_paused() {
            return Err(TransportError::NothingPaused);
        }
        inner.codec.resume();
        inner.state = TransportState::Playing;
        log::debug!("playback resumed");
        Ok(())
    }

    /// Stop the active session, releasing its buffer.
    ///
    /// Idempotent: stopping an idle transport is a no-op, not an error.
    /// Stopping during recording discards the partial capture; no clip is
    /// produced.
    pub fn stop(&self) {
        let mut inner = self.inner.lock();
        if inner.state.is_idle() {
            return;
        }

        let was_recording = inner.state.is_recording();
        inner.codec.stop();
        if was_recording {
            // Drain and drop whatever the codec captured so far.
            let _ = inner.codec.capture_data();
        }
        inner.active_buffer = None;
        inner.state = TransportState::Idle;
        log::debug!("transport stopped");
    }

    /// Completion query: has the current playing/recording session finished?
    ///
    /// Returns `false` while idle or paused ("no sound was played"). On an
    /// observed completion the session transitions to idle — releasing the
    /// playback buffer, or materializing the finished capture as a
    /// [`RecordedClip`].
    pub fn poll_finished(&self) -> bool {
        let mut inner = self.inner.lock();
        match inner.state {
            TransportState::Idle | TransportState::Paused => false,
            TransportState::Playing => {
                if !inner.codec.is_play_finished() {
                    return false;
                }
                inner.codec.stop();
                inner.active_buffer = None;
                inner.state = TransportState::Idle;
                log::debug!("playback finished");
                true
            }
            TransportState::Recording => {
                if !inner.codec.is_capture_finished() {
                    return false;
                }
                let data = inner.codec.capture_data();
                inner.codec.stop();
                log::debug!("recording finished: {} bytes captured", data.len());
                inner.last_clip = Some(RecordedClip::from_capture(data));
                inner.state = TransportState::Idle;
                true
            }
        }
    }

    /// Clip of the last completed recording, if one is held.
    ///
    /// The caller receives a copy; the clip stays available until the next
    /// `start_recording` overwrites it.
    pub fn take_recording(&self) -> Option<RecordedClip> {
        self.inner.lock().last_clip.clone()
    }

    /// Set the volume on the public 0-10 scale. Legal in any state.
    pub fn set_volume(&self, level: u8) -> Result<(), TransportError> {
        if level > MAX_VOLUME {
            return Err(TransportError::InvalidArgument(format!(
                "volume {} out of range 0..={}",
                level, MAX_VOLUME
            )));
        }
        let mut inner = self.inner.lock();
        inner.volume = level * VOLUME_SCALE;
        let internal = inner.volume;
        inner.codec.set_output_level(internal);
        Ok(())
    }

    /// Current volume on the public 0-10 scale.
    pub fn volume(&self) -> u8 {
        self.inner.lock().volume / VOLUME_SCALE
    }

    /// Persist the current volume through the settings collaborator.
    pub fn save_volume(&self, settings: &dyn SettingsStore) -> Result<(), TransportError> {
        let internal = self.inner.lock().volume;
        settings.write_volume(internal).map_err(|e| {
            log::error!("failed to persist volume: {}", e);
            TransportError::IoError(e)
        })
    }

    /// Load the persisted volume and apply it to the codec.
    pub fn load_volume(&self, settings: &dyn SettingsStore) -> Result<(), TransportError> {
        let stored = settings.read_volume().map_err(TransportError::IoError)?;
        let internal = stored.min(MAX_VOLUME * VOLUME_SCALE);
        let mut inner = self.inner.lock();
        inner.volume = internal;
        inner.codec.set_output_level(internal);
        Ok(())
    }

    /// Raise the sticky sound-detection flag. Called by the sensor-sampling
    /// collaborator when the ambient level crosses its threshold.
    pub fn signal_sound_event(&self) {
        self.sound_event.store(true, Ordering::SeqCst);
    }

    /// Non-clearing read of the sound-detection flag. `false` when no event
    /// has been signalled since the last clear.
    pub fn sound_event_detected(&self) -> bool {
        self.sound_event.load(Ordering::SeqCst)
    }

    /// Clear the sound-detection flag.
    pub fn clear_sound_event(&self) {
        self.sound_event.store(false, Ordering::SeqCst);
    }
}

/// Resolve a playback source into its bytes and validated profile, without
/// touching session state.
fn resolve_source(
    source: PlaybackSource,
    store: &dyn FileStore,
    last_clip: Option<&RecordedClip>,
) -> Result<(Vec<u8>, AudioProfile), TransportError> {
    match source {
        PlaybackSource::File { name } => {
            if name.len() > MAX_FILE_NAME_LEN {
                return Err(TransportError::InvalidArgument(format!(
                    "file name longer than {} chars: {}",
                    MAX_FILE_NAME_LEN, name
                )));
            }
            let container = Container::from_name(&name)?;
            let data = store.read(&name).map_err(TransportError::IoError)?;
            let profile = sniff::sniff(&data, container)?;
            Ok((data, profile))
        }
        PlaybackSource::Buffer { data, container } => {
            let profile = sniff::sniff(&data, container)?;
            Ok((data, profile))
        }
        PlaybackSource::Onboard(index) => {
            let data = sounds::onboard_sound(index).ok_or_else(|| {
                TransportError::InvalidArgument(format!("no onboard sound {}", index))
            })?;
            Ok((data, AudioProfile::pcm()))
        }
        PlaybackSource::LastRecording => {
            let clip = last_clip.ok_or_else(|| {
                TransportError::InvalidArgument("no recording available to replay".into())
            })?;
            Ok((clip.data.clone(), AudioProfile::pcm()))
        }
    }
}
