use std::time::{Duration, Instant};

use crate::update_events::DownloadProgress;

/// Accumulates download chunks into the transfer statistics shown to the
/// user: bytes/sec over the whole transfer, percent of the content length,
/// transferred and total bytes. A missing content length renders as zero.
pub(crate) struct ProgressTracker {
    started: Instant,
    transferred: u64,
}

impl ProgressTracker {
    pub(crate) fn new() -> Self {
        Self {
            started: Instant::now(),
            transferred: 0,
        }
    }

    pub(crate) fn record(&mut self, chunk_length: usize, content_length: Option<u64>) -> DownloadProgress {
        let elapsed = self.started.elapsed();
        self.record_with_elapsed(chunk_length, content_length, elapsed)
    }

    fn record_with_elapsed(
        &mut self,
        chunk_length: usize,
        content_length: Option<u64>,
        elapsed: Duration,
    ) -> DownloadProgress {
        self.transferred += chunk_length as u64;

        let total = content_length.unwrap_or(0);
        let percent = if total > 0 {
            (self.transferred as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        let elapsed_secs = elapsed.as_secs_f64();
        let bytes_per_second = if elapsed_secs > 0.0 {
            (self.transferred as f64 / elapsed_secs) as u64
        } else {
            self.transferred
        };

        DownloadProgress {
            bytes_per_second,
            percent,
            transferred: self.transferred,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ProgressTracker;

    #[test]
    fn accumulates_transferred_bytes_across_chunks() {
        let mut tracker = ProgressTracker::new();

        let first = tracker.record_with_elapsed(300, Some(1000), Duration::from_secs(1));
        assert_eq!(first.transferred, 300);
        assert_eq!(first.total, 1000);

        let second = tracker.record_with_elapsed(200, Some(1000), Duration::from_secs(2));
        assert_eq!(second.transferred, 500);
        assert_eq!(second.percent, 50.0);
        assert_eq!(second.bytes_per_second, 250);
    }

    #[test]
    fn missing_content_length_renders_as_zero_total_and_percent() {
        let mut tracker = ProgressTracker::new();

        let progress = tracker.record_with_elapsed(128, None, Duration::from_secs(1));
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percent, 0.0);
        assert_eq!(progress.transferred, 128);
    }

    #[test]
    fn zero_elapsed_does_not_divide_by_zero() {
        let mut tracker = ProgressTracker::new();

        let progress = tracker.record_with_elapsed(64, Some(64), Duration::ZERO);
        assert_eq!(progress.bytes_per_second, 64);
        assert_eq!(progress.percent, 100.0);
    }
}
