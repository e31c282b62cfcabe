use crate::models::profile::AudioProfile;

/// Interface to the hardware audio codec.
///
/// The driver moves samples to and from the DAC/ADC on its own; the
/// transport controller only issues commands and polls completion. All
/// calls happen under the controller's session lock, so implementations
/// never see concurrent commands.
///
/// Fallible commands return `Err(String)` with a driver-specific message;
/// the controller maps these to `TransportError::Hardware` without retrying.
///
/// Implemented by:
/// - `SimCodec` (audio-transport-sim) for host-side development
/// - the on-target driver wrapping the vendor codec engine
pub trait CodecDriver: Send {
    /// Begin playback of a raw PCM buffer matching `profile`.
    fn play_pcm(&mut self, data: &[u8], profile: &AudioProfile) -> Result<(), String>;

    /// Begin playback of a compressed (MP3) buffer matching `profile`.
    fn play_compressed(&mut self, data: &[u8], profile: &AudioProfile) -> Result<(), String>;

    /// Begin capturing `duration_secs` of audio into the driver's buffer.
    fn start_capture(&mut self, duration_secs: u32) -> Result<(), String>;

    /// Suspend playback without releasing the buffer.
    fn pause(&mut self);

    /// Continue a previously paused playback.
    fn resume(&mut self);

    /// Abort whatever the codec is doing and return it to idle.
    fn stop(&mut self);

    /// Whether the current playback has run to the end of its buffer.
    fn is_play_finished(&self) -> bool;

    /// Whether the current capture has reached its requested duration.
    fn is_capture_finished(&self) -> bool;

    /// Drain the finished capture buffer. Empty if nothing was captured.
    fn capture_data(&mut self) -> Vec<u8>;

    /// Set the output level on the hardware 0-100 scale.
    fn set_output_level(&mut self, level: u8);
}
