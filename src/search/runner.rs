use super::evaluator::{Evaluator, WorkerStats};
use super::incumbent::{BestRecord, SharedBest};
use super::index::IndexSpace;
use super::monitor::{total_processed, ProgressMonitor, WorkerCounter};
use super::partition::{partition, worker_count};
use super::SearchObserver;
use crate::catalog::SlotCatalog;
use crate::config::{Config, Constraints};
use crate::error::{GearForgeError, GfResult};
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub num_threads: usize,
    pub poll_interval: Duration,
    pub bar_width: usize,
    pub constraints: Constraints,
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            num_threads: worker_count(cfg.search.max_threads, cfg.search.threads),
            poll_interval: cfg.search.poll_interval(),
            bar_width: cfg.search.progress_bar_width,
            constraints: cfg.constraints,
        }
    }
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub best: Option<BestRecord>,
    pub processed: u64,
    pub total: u64,
    pub elapsed: Duration,
    pub workers: Vec<WorkerStats>,
}

/// Counts a worker as finished even if it unwinds.
struct FinishGuard<'a>(&'a AtomicUsize);

impl Drop for FinishGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::Release);
    }
}

#[derive(Debug)]
pub struct Searcher {
    catalog: Arc<SlotCatalog>,
    space: IndexSpace,
    options: SearchOptions,
}

impl Searcher {
    pub fn new(catalog: Arc<SlotCatalog>, options: SearchOptions) -> GfResult<Self> {
        let space = IndexSpace::new(&catalog.slot_sizes())?;
        // Reject bad ring slots before any thread is spawned.
        Evaluator::new(&catalog, &space, options.constraints)?;
        Ok(Self {
            catalog,
            space,
            options,
        })
    }

    pub fn space(&self) -> &IndexSpace {
        &self.space
    }

    pub fn num_threads(&self) -> usize {
        self.options.num_threads
    }

    pub fn ranges(&self) -> Vec<Range<u64>> {
        partition(self.space.total(), self.options.num_threads)
    }

    /// Enumerates the whole space. Blocks until every index has been evaluated.
    pub fn run(&self, observer: &dyn SearchObserver) -> GfResult<SearchOutcome> {
        let opts = &self.options;
        let total = self.space.total();
        let evaluator = Evaluator::new(&self.catalog, &self.space, opts.constraints)?;

        // 1. Partition
        let ranges = self.ranges();
        let n = ranges.len();
        info!("Total combinations to process: {}", total);
        info!("Using {} threads for processing.", n);

        // 2. Shared State
        let counters: Vec<WorkerCounter> = (0..n).map(|_| WorkerCounter::default()).collect();
        let finished = AtomicUsize::new(0);
        let best = SharedBest::new();
        let stats = Mutex::new(vec![WorkerStats::default(); n]);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .thread_name(|i| format!("gearforge-worker-{}", i))
            .build()
            .map_err(|e| GearForgeError::ThreadPool(e.to_string()))?;

        let mut monitor = ProgressMonitor::new(total, opts.bar_width);
        let started = Instant::now();

        // 3. Enumerate + Monitor
        pool.in_place_scope(|s| {
            for (worker, range) in ranges.into_iter().enumerate() {
                let evaluator = &evaluator;
                let best = &best;
                let counter = &counters[worker];
                let finished = &finished;
                let stats = &stats;

                s.spawn(move |_| {
                    let _guard = FinishGuard(finished);
                    let result = evaluator.scan(worker, range, best, counter, observer);
                    stats
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner())[worker] = result;
                });
            }

            let mut last_tick = Instant::now();
            loop {
                std::thread::sleep(opts.poll_interval);

                // Read the finish count first so the poll below sees every final publish.
                let all_done = finished.load(Ordering::Acquire) == n;
                let now = Instant::now();
                let snapshot = monitor.poll(&counters, now.duration_since(last_tick));
                last_tick = now;

                observer.on_progress(&snapshot);

                if snapshot.is_complete() || all_done {
                    break;
                }
            }
        });

        // 4. Drain
        let elapsed = started.elapsed();
        let processed = total_processed(&counters);
        debug!("Drained {} workers after {:?}", n, elapsed);

        Ok(SearchOutcome {
            best: best.into_inner(),
            processed,
            total,
            elapsed,
            workers: stats
                .into_inner()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        })
    }
}
