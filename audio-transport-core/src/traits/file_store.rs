/// Interface to the storage collaborator that loads audio files by name.
///
/// Any failure here aborts the playback attempt before the session state
/// changes; the controller surfaces it as `TransportError::IoError`.
pub trait FileStore: Send {
    /// Size of the named file in bytes.
    fn size_of(&self, name: &str) -> Result<u64, String>;

    /// Read the whole file into memory.
    fn read(&self, name: &str) -> Result<Vec<u8>, String>;
}
