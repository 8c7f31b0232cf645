//! Sender role: serve one file to the first peer that connects.

use crate::config::SenderConfig;
use crate::error::TransferError;
use crate::net;
use crate::session::{Direction, TransferSession, TransferStats};
use crate::shutdown;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Listen, accept one peer, stream the file, then run the close protocol.
///
/// Returns the final statistics; the summary line has already been printed
/// to stdout by the time this returns.
pub fn run(path: &Path, config: &SenderConfig) -> Result<TransferStats, TransferError> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TransferError::FileNotFound(path.to_path_buf()),
        _ => TransferError::Io(e),
    })?;

    let listener = net::bind(config.port)?;
    let stream = net::accept_one(listener)?;

    info!(
        file = %path.display(),
        buffer_size = config.buffer_size,
        "starting transfer"
    );

    let mut session = TransferSession::new(
        Direction::Send,
        config.buffer_size,
        config.progress_interval_mb,
    );
    let stats = session.run(&mut file, &mut &stream)?;

    println!("{}", stats.summary(Direction::Send, config.buffer_size));
    info!(
        bytes = stats.bytes_transferred,
        throughput_bytes_per_sec = stats.throughput().unwrap_or(0.0),
        "transfer complete"
    );

    // The source is exhausted; close the file before the socket rendezvous.
    drop(file);
    shutdown::drain_and_close(stream)?;

    Ok(stats)
}
