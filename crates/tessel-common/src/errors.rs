use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failures talking to the native window-manager process.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("bridge error: {0}")]
    BridgeError(String),

    #[error("bridge write error: {0}")]
    WriteError(String),
}

/// An inbound message from the native layer that could not be understood.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    #[error("missing initial snapshot: {0}")]
    MissingSnapshot(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TesselError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
