use thiserror::Error;

/// Errors produced by the format sniffer when classifying a byte buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The file name suffix matches no recognized container.
    #[error("unrecognized container suffix: {0}")]
    UnknownContainer(String),

    /// The buffer is a recognized container but does not match the one
    /// profile the codec can decode.
    #[error("unsupported audio format: {0}")]
    Unsupported(String),
}

/// Errors produced by transport controller operations.
///
/// Every failure here is recoverable: the caller may retry or choose a
/// different operation. No variant is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Another playback or recording session already owns the codec.
    #[error("audio resource is busy")]
    AlreadyBusy,

    /// `pause` was called without an active playback session.
    #[error("no playback in progress")]
    NotPlaying,

    /// `resume` was called without a paused playback session.
    #[error("no paused playback to resume")]
    NothingPaused,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A file store operation failed before any state changed.
    #[error("i/o error: {0}")]
    IoError(String),

    /// The codec driver rejected or failed a command. The session is left
    /// idle; the caller may retry explicitly.
    #[error("codec failure: {0}")]
    Hardware(String),

    /// The supplied buffer failed format sniffing.
    #[error(transparent)]
    UnsupportedFormat(#[from] FormatError),
}
