use std::ops::Range;

/// Number of workers to spawn: the explicit request or the machine's
/// parallelism, capped at `cap` and never below one.
pub fn worker_count(cap: usize, requested: Option<usize>) -> usize {
    let wanted = requested.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(cap)
    });
    wanted.min(cap).max(1)
}

/// Splits `[0, total)` into `workers` contiguous half-open ranges.
///
/// Every range but the last holds exactly `total / workers` indices; the last
/// one absorbs the remainder and always ends at `total`.
pub fn partition(total: u64, workers: usize) -> Vec<Range<u64>> {
    let workers = workers.max(1) as u64;
    let per_worker = total / workers;

    (0..workers)
        .map(|i| {
            let start = i * per_worker;
            let end = if i == workers - 1 {
                total
            } else {
                (i + 1) * per_worker
            };
            start..end
        })
        .collect()
}
