//! Receiver role: connect to a sender and write the byte stream to a file.

use crate::config::ReceiverConfig;
use crate::error::TransferError;
use crate::net;
use crate::session::{Direction, TransferSession, TransferStats};
use crate::shutdown;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Connect, drain the socket into the destination file, then acknowledge
/// the close.
///
/// The destination is truncated if it exists. The only end-of-transfer
/// signal is the sender half-closing its write side; until then the
/// receiver blocks on the socket.
pub fn run(path: &Path, config: &ReceiverConfig) -> Result<TransferStats, TransferError> {
    let stream = net::resolve_and_connect(&config.host, config.port)?;
    let mut file = File::create(path)?;

    info!(
        file = %path.display(),
        buffer_size = config.buffer_size,
        "receiving"
    );

    let mut session = TransferSession::new(
        Direction::Receive,
        config.buffer_size,
        config.progress_interval_mb,
    );
    let stats = session.run(&mut &stream, &mut file)?;

    println!("{}", stats.summary(Direction::Receive, config.buffer_size));
    info!(
        bytes = stats.bytes_transferred,
        throughput_bytes_per_sec = stats.throughput().unwrap_or(0.0),
        "reception complete"
    );

    // Close the file first, then tell the sender everything was consumed.
    drop(file);
    shutdown::acknowledge_close(stream)?;

    Ok(stats)
}
