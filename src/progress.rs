//! Progress accounting for the transfer loop.
//!
//! Reporting cadence is expressed in bytes, not iterations: the interval is
//! the configured megabyte threshold divided by the buffer size, so one
//! report fires per threshold's worth of buffer-fuls regardless of how large
//! the buffer is.

use crate::config::MB_IN_BYTES;

/// Cyclic chunk counter that fires once per `interval` chunks.
#[derive(Debug)]
pub struct ProgressTracker {
    interval: u64,
    tick: u64,
}

impl ProgressTracker {
    /// Create a tracker that fires every `threshold_mb` megabytes, given
    /// chunks of `buffer_size` bytes.
    ///
    /// The interval is clamped to at least 1: a buffer larger than the
    /// threshold reports on every chunk instead of dividing by zero.
    pub fn new(threshold_mb: u64, buffer_size: usize) -> Self {
        let interval = threshold_mb * MB_IN_BYTES / buffer_size as u64;
        Self {
            interval: interval.max(1),
            tick: 0,
        }
    }

    /// Record one transferred chunk. Returns true when the counter wraps,
    /// i.e. exactly once per `interval` chunks.
    pub fn record_chunk(&mut self) -> bool {
        self.tick += 1;
        if self.tick == self.interval {
            self.tick = 0;
            true
        } else {
            false
        }
    }

    /// Chunks between successive reports.
    pub fn interval(&self) -> u64 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_reports(tracker: &mut ProgressTracker, chunks: u64) -> u64 {
        (0..chunks).filter(|_| tracker.record_chunk()).count() as u64
    }

    #[test]
    fn test_interval_derivation() {
        // 10 MB threshold with a 1 KiB buffer: one report per 10240 chunks.
        let tracker = ProgressTracker::new(10, 1024);
        assert_eq!(tracker.interval(), 10 * 1024);
    }

    #[test]
    fn test_interval_clamped_to_one() {
        // Buffer larger than the threshold must not divide to zero.
        let tracker = ProgressTracker::new(1, 2 * MB_IN_BYTES as usize);
        assert_eq!(tracker.interval(), 1);
    }

    #[test]
    fn test_clamped_tracker_reports_every_chunk() {
        let mut tracker = ProgressTracker::new(1, 2 * MB_IN_BYTES as usize);
        assert_eq!(count_reports(&mut tracker, 5), 5);
    }

    #[test]
    fn test_one_report_per_interval() {
        let mut tracker = ProgressTracker::new(1, 1024);
        let interval = tracker.interval();

        // One chunk short of the interval: nothing yet.
        assert_eq!(count_reports(&mut tracker, interval - 1), 0);
        // The wrapping chunk fires exactly one report.
        assert!(tracker.record_chunk());
        // And the cycle restarts cleanly.
        assert_eq!(count_reports(&mut tracker, interval - 1), 0);
        assert!(tracker.record_chunk());
    }

    #[test]
    fn test_cadence_matches_byte_threshold() {
        // floor(total / threshold) reports, within one, for a full run.
        let buffer_size = 1024usize;
        let threshold_mb = 1u64;
        let total_bytes = 5 * MB_IN_BYTES + MB_IN_BYTES / 2; // 5.5 MB
        let chunks = total_bytes / buffer_size as u64;

        let mut tracker = ProgressTracker::new(threshold_mb, buffer_size);
        let reports = count_reports(&mut tracker, chunks);

        let expected = total_bytes / (threshold_mb * MB_IN_BYTES);
        assert!(reports >= expected.saturating_sub(1) && reports <= expected + 1);
    }
}
