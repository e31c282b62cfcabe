/// Interface to the durable settings collaborator.
///
/// Volume is persisted on the internal 0-100 scale, and only by the
/// explicit save/load operations — never implicitly on `set_volume`.
pub trait SettingsStore: Send {
    fn write_volume(&self, level: u8) -> Result<(), String>;

    fn read_volume(&self) -> Result<u8, String>;
}
