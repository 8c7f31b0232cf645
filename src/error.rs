//! Error types for the transfer tool.
//!
//! Every failure is tagged with a kind describing which stage of the
//! transfer it came from (resolution, bind, accept, connect, steady-state
//! I/O, close) together with the underlying OS error. Setup errors are all
//! fatal: the binary reports them on stderr and exits with status 1.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up or running a transfer.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Resolving the configured host name produced no usable address.
    #[error("error resolving host {host}: {reason}")]
    Resolution { host: String, reason: String },

    /// Failed to create, configure, or bind the listening socket.
    #[error("error binding listen socket on port {port}: {source}")]
    Bind { port: u16, source: io::Error },

    /// Failed to accept the peer connection.
    #[error("failed to accept peer connection: {0}")]
    Accept(#[source] io::Error),

    /// Failed to connect to the sender.
    #[error("error connecting to {addr}: {source}")]
    Connect { addr: String, source: io::Error },

    /// An I/O error occurred during the steady-state transfer loop.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Shutting down a socket direction failed.
    #[error("error closing socket: {0}")]
    Close(#[source] io::Error),

    /// The source file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// A configuration value is invalid (zero buffer size, etc.).
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to serialize the configuration to TOML.
    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),

    /// Failed to parse the configuration file.
    #[error("TOML deserialization error: {0}")]
    TomlDeserialization(#[from] toml::de::Error),
}
