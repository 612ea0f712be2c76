pub mod evaluator;
pub mod incumbent;
pub mod index;
pub mod monitor;
pub mod partition;
pub mod runner;

pub use self::evaluator::{Combination, Evaluator, Totals, WorkerStats};
pub use self::incumbent::{BestRecord, SharedBest};
pub use self::index::IndexSpace;
pub use self::monitor::{ProgressMonitor, ProgressSnapshot, WorkerCounter};
pub use self::partition::{partition, worker_count};
pub use self::runner::{SearchOptions, SearchOutcome, Searcher};

/// Receives search events.
///
/// `on_new_best` is called while the best-record lock is held, so calls never
/// overlap. `on_progress` is called from the coordinating thread once per tick.
pub trait SearchObserver: Send + Sync {
    fn on_new_best(&self, _best: &BestRecord) {}
    fn on_progress(&self, _snapshot: &ProgressSnapshot) {}
}

pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
