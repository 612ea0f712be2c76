use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Processed count of a single worker. Written by its owner only; read by the monitor.
#[repr(align(64))]
#[derive(Debug, Default)]
pub struct WorkerCounter(AtomicU64);

impl WorkerCounter {
    #[inline(always)]
    pub fn publish(&self, processed: u64) {
        self.0.store(processed, Ordering::Relaxed);
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

pub fn total_processed(counters: &[WorkerCounter]) -> u64 {
    counters.iter().map(WorkerCounter::get).sum()
}

/// One progress tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    pub processed: u64,
    pub total: u64,
    /// Combinations per second over the last interval.
    pub throughput: f64,
    pub eta: Duration,
    pub elapsed: Duration,
    pub bar_width: usize,
}

impl ProgressSnapshot {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.processed as f64 / self.total as f64).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.processed >= self.total
    }

    pub fn render_bar(&self) -> String {
        let filled = (self.bar_width as f64 * self.fraction()) as usize;
        let mut bar = String::with_capacity(self.bar_width + 2);
        bar.push('[');
        for i in 0..self.bar_width {
            bar.push(if i < filled { '#' } else { '-' });
        }
        bar.push(']');
        bar
    }
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eta = self.eta.as_secs();
        write!(
            f,
            "{} {:.1}% | SPD: {:.1}M/s | ETA: {}h {}m {}s | {}/{}",
            self.render_bar(),
            self.fraction() * 100.0,
            self.throughput / 1e6,
            eta / 3600,
            (eta % 3600) / 60,
            eta % 60,
            self.processed,
            self.total
        )
    }
}

/// Turns successive processed totals into throughput and ETA.
#[derive(Debug)]
pub struct ProgressMonitor {
    total: u64,
    bar_width: usize,
    previous: u64,
    started: Instant,
}

impl ProgressMonitor {
    pub fn new(total: u64, bar_width: usize) -> Self {
        Self {
            total,
            bar_width,
            previous: 0,
            started: Instant::now(),
        }
    }

    /// Records a tick where `processed` combinations are done, `interval` after the previous one.
    pub fn observe(&mut self, processed: u64, interval: Duration) -> ProgressSnapshot {
        let delta = processed.saturating_sub(self.previous);
        self.previous = processed;

        let secs = interval.as_secs_f64();
        let throughput = if secs > 0.0 { delta as f64 / secs } else { 0.0 };
        let remaining = self.total.saturating_sub(processed);
        let eta_secs = if throughput > 0.0 {
            remaining as f64 / throughput
        } else {
            0.0
        };

        ProgressSnapshot {
            processed,
            total: self.total,
            throughput,
            eta: Duration::try_from_secs_f64(eta_secs).unwrap_or(Duration::MAX),
            elapsed: self.started.elapsed(),
            bar_width: self.bar_width,
        }
    }

    pub fn poll(&mut self, counters: &[WorkerCounter], interval: Duration) -> ProgressSnapshot {
        self.observe(total_processed(counters), interval)
    }
}
