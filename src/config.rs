//! Configuration for the sender and receiver roles.
//!
//! Configuration is stored in TOML format and can be loaded from a file
//! with CLI flags layered on top. Defaults match the classic invocation:
//! port 1234, a 1 KiB buffer, a progress line every 10 MB.

use crate::error::TransferError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One megabyte, the unit used for progress accounting.
pub const MB_IN_BYTES: u64 = 1024 * 1024;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 1234;
pub const DEFAULT_BUFFER_SIZE: usize = 1024;
pub const DEFAULT_PROGRESS_INTERVAL_MB: u64 = 10;

/// Main configuration structure, one section per role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Sender-specific configuration.
    pub sender: SenderConfig,
    /// Receiver-specific configuration.
    pub receiver: ReceiverConfig,
}

/// Configuration for the sending side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderConfig {
    /// Port the listening socket binds to, on all interfaces.
    pub port: u16,
    /// I/O buffer size in bytes. Fixed for the whole session.
    pub buffer_size: usize,
    /// Emit one progress line per this many megabytes sent.
    pub progress_interval_mb: u64,
}

/// Configuration for the receiving side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverConfig {
    /// Host name of the sender.
    pub host: String,
    /// Port the sender is listening on.
    pub port: u16,
    /// I/O buffer size in bytes. Fixed for the whole session.
    pub buffer_size: usize,
    /// Emit one progress line per this many megabytes received.
    pub progress_interval_mb: u64,
}

impl Config {
    /// Loads configuration from a file, or creates the file with default
    /// contents if it doesn't exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, TransferError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            let config = Self::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Saves the configuration to a file in TOML format.
    pub fn save(&self, path: &Path) -> Result<(), TransferError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            buffer_size: DEFAULT_BUFFER_SIZE,
            progress_interval_mb: DEFAULT_PROGRESS_INTERVAL_MB,
        }
    }
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            buffer_size: DEFAULT_BUFFER_SIZE,
            progress_interval_mb: DEFAULT_PROGRESS_INTERVAL_MB,
        }
    }
}

impl SenderConfig {
    pub fn validate(&self) -> Result<(), TransferError> {
        validate_buffer_size(self.buffer_size)
    }
}

impl ReceiverConfig {
    pub fn validate(&self) -> Result<(), TransferError> {
        validate_buffer_size(self.buffer_size)
    }
}

fn validate_buffer_size(buffer_size: usize) -> Result<(), TransferError> {
    if buffer_size == 0 {
        return Err(TransferError::Config(
            "buffer size must be positive".to_string(),
        ));
    }
    Ok(())
}
