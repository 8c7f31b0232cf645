//! The transfer session: a fixed buffer cycled between a source and a sink.
//!
//! This is the core of the tool. One session owns one buffer for its whole
//! lifetime and drains the source into the sink until the source reports
//! end-of-stream, tracking the cumulative byte count and emitting a progress
//! line each time the configured megabyte threshold is crossed.
//!
//! The same loop serves both roles: the sender reads a file and writes a
//! socket, the receiver reads a socket and writes a file. For the receiver
//! the zero-length read is the only end-of-transfer signal there is; the
//! stream carries no framing.

use crate::config::MB_IN_BYTES;
use crate::error::TransferError;
use crate::progress::ProgressTracker;
use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

/// Which way bytes flow, used only for labeling console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Send,
    Receive,
}

impl Direction {
    fn progress_label(&self) -> &'static str {
        match self {
            Direction::Send => "Sent",
            Direction::Receive => "Read",
        }
    }

    fn summary_label(&self) -> &'static str {
        match self {
            Direction::Send => "Total sent",
            Direction::Receive => "Total received",
        }
    }
}

/// Statistics for one completed (or in-flight) transfer.
#[derive(Debug)]
pub struct TransferStats {
    /// Total bytes moved through the session buffer.
    pub bytes_transferred: u64,
    start: Instant,
    end: Option<Instant>,
}

impl TransferStats {
    pub fn new() -> Self {
        Self {
            bytes_transferred: 0,
            start: Instant::now(),
            end: None,
        }
    }

    pub fn record_bytes(&mut self, bytes: u64) {
        self.bytes_transferred += bytes;
    }

    /// Freeze the end timestamp. Called once, when the source is exhausted.
    pub fn finish(&mut self) {
        self.end = Some(Instant::now());
    }

    /// Duration of the transfer, if it has finished.
    pub fn duration(&self) -> Option<Duration> {
        Some(self.end?.duration_since(self.start))
    }

    /// Throughput in bytes per second, if the transfer has finished.
    pub fn throughput(&self) -> Option<f64> {
        let secs = self.duration()?.as_secs_f64();
        if secs > 0.0 {
            Some(self.bytes_transferred as f64 / secs)
        } else {
            None
        }
    }

    /// The final one-line summary printed on completion.
    pub fn summary(&self, direction: Direction, buffer_size: usize) -> String {
        let micros = self.duration().unwrap_or_default().as_micros();
        format!(
            "Execution time: {} (\u{3bc}s), {}: {} (bytes), Buffer size: {} (bytes)",
            micros,
            direction.summary_label(),
            self.bytes_transferred,
            buffer_size
        )
    }
}

impl Default for TransferStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A single transfer session with its exclusively-owned buffer.
pub struct TransferSession {
    direction: Direction,
    buffer: Vec<u8>,
    progress: ProgressTracker,
}

impl TransferSession {
    /// Create a session. `buffer_size` must be positive (validated at the
    /// configuration layer).
    pub fn new(direction: Direction, buffer_size: usize, progress_interval_mb: u64) -> Self {
        Self {
            direction,
            buffer: vec![0u8; buffer_size],
            progress: ProgressTracker::new(progress_interval_mb, buffer_size),
        }
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Drain `source` into `sink` until the source reports end-of-stream.
    ///
    /// Reads up to one buffer at a time; a short read is normal and its
    /// chunk is forwarded verbatim. Every chunk is flushed in full before
    /// the next read: short writes are routine on sockets and the remainder
    /// is reissued until the chunk is gone. A read error is propagated
    /// rather than treated as end-of-stream.
    pub fn run<R: Read, W: Write>(
        &mut self,
        source: &mut R,
        sink: &mut W,
    ) -> Result<TransferStats, TransferError> {
        let mut stats = TransferStats::new();

        loop {
            let bytes_read = loop {
                match source.read(&mut self.buffer) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            };
            if bytes_read == 0 {
                break;
            }

            write_fully(sink, &self.buffer[..bytes_read])?;
            stats.record_bytes(bytes_read as u64);

            if self.progress.record_chunk() {
                println!(
                    "{}: {} (MB)",
                    self.direction.progress_label(),
                    stats.bytes_transferred / MB_IN_BYTES
                );
            }
        }

        stats.finish();
        Ok(stats)
    }
}

/// Write an entire chunk, reissuing after short writes.
///
/// A single socket write is not guaranteed to consume the whole chunk;
/// stopping early would silently truncate the transfer with no error
/// surfaced anywhere.
fn write_fully<W: Write>(sink: &mut W, mut chunk: &[u8]) -> Result<(), TransferError> {
    while !chunk.is_empty() {
        match sink.write(chunk) {
            Ok(0) => {
                return Err(TransferError::Io(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "sink accepted zero bytes",
                )))
            }
            Ok(n) => chunk = &chunk[n..],
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
