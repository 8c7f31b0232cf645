//! Chute - single-shot TCP file transfer.
//!
//! Chute moves one file from a sending process to a receiving process over
//! a single TCP connection. The sender binds a port and serves the first
//! peer that connects; the receiver connects and reads until the sender
//! half-closes the stream. The payload is a raw, unframed byte stream; the
//! receiver's copy is bit-identical to the sender's file.
//!
//! # Example
//!
//! ```no_run
//! use chute::{receiver, ReceiverConfig};
//! use std::path::Path;
//!
//! let config = ReceiverConfig::default();
//! let stats = receiver::run(Path::new("incoming.bin"), &config)?;
//! println!("{} bytes received", stats.bytes_transferred);
//! # Ok::<(), chute::TransferError>(())
//! ```

pub mod config;
pub mod error;
pub mod net;
pub mod progress;
pub mod receiver;
pub mod sender;
pub mod session;
pub mod shutdown;

pub use config::{Config, ReceiverConfig, SenderConfig};
pub use error::TransferError;
pub use session::{Direction, TransferSession, TransferStats};
