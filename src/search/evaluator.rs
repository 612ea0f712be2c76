use super::incumbent::{BestRecord, SharedBest};
use super::index::IndexSpace;
use super::monitor::WorkerCounter;
use super::SearchObserver;
use crate::catalog::{Item, SlotCatalog};
use crate::config::Constraints;
use crate::error::{GearForgeError, GfResult};
use std::ops::Range;
use tracing::debug;

/// Processed counts are published to the monitor in batches of this size.
const PUBLISH_EVERY: u64 = 4096;

/// Summed attributes of one combination.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub stamina: i64,
    pub hit: i64,
    pub expertise: i64,
    pub dps: f64,
    pub cost: i64,
}

impl Totals {
    #[inline(always)]
    pub fn add(&mut self, item: &Item) {
        self.stamina += item.stamina as i64;
        self.hit += item.hit_rating as i64;
        self.expertise += item.expertise_rating as i64;
        self.dps += item.dps;
        self.cost += item.cost as i64;
    }
}

/// One item per slot, plus its totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    pub items: Vec<Item>,
    pub totals: Totals,
}

impl Combination {
    pub fn gather(catalog: &SlotCatalog, choices: &[usize]) -> Self {
        let mut totals = Totals::default();
        let items: Vec<Item> = choices
            .iter()
            .enumerate()
            .map(|(slot, &choice)| {
                let item = &catalog.slot(slot)[choice];
                totals.add(item);
                item.clone()
            })
            .collect();
        Self { items, totals }
    }
}

impl Constraints {
    /// Two rings clash when their instance ids share the same last digits.
    #[inline(always)]
    pub fn rings_distinct(&self, a: &Item, b: &Item) -> bool {
        a.uuid % self.ring_id_modulus != b.uuid % self.ring_id_modulus
    }

    #[inline(always)]
    pub fn accepts(&self, t: &Totals) -> bool {
        t.stamina >= self.min_stamina
            && t.hit >= self.min_hit
            && t.expertise >= self.min_expertise
            && t.dps > 0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub processed: u64,
    pub valid: u64,
    pub local_improvements: u64,
}

pub struct Evaluator<'a> {
    catalog: &'a SlotCatalog,
    space: &'a IndexSpace,
    constraints: Constraints,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        catalog: &'a SlotCatalog,
        space: &'a IndexSpace,
        constraints: Constraints,
    ) -> GfResult<Self> {
        if catalog.slot_sizes().iter().map(|&s| s as u64).ne(space.sizes().iter().copied()) {
            return Err(GearForgeError::Config(
                "index space does not match catalog slot sizes".to_string(),
            ));
        }
        let slots = catalog.len();
        if constraints.ring_slot_a == constraints.ring_slot_b {
            return Err(GearForgeError::Config(format!(
                "ring slots must differ (both are {})",
                constraints.ring_slot_a
            )));
        }
        if constraints.ring_slot_a >= slots || constraints.ring_slot_b >= slots {
            return Err(GearForgeError::Config(format!(
                "ring slots ({}, {}) outside a {}-slot catalog",
                constraints.ring_slot_a, constraints.ring_slot_b, slots
            )));
        }
        if constraints.ring_id_modulus <= 0 {
            return Err(GearForgeError::Config(
                "ring_id_modulus must be positive".to_string(),
            ));
        }
        Ok(Self {
            catalog,
            space,
            constraints,
        })
    }

    /// Totals of the combination at `choices`, or `None` when it breaks a constraint.
    #[inline(always)]
    pub fn evaluate(&self, choices: &[usize]) -> Option<Totals> {
        let c = &self.constraints;
        let ring_a = &self.catalog.slot(c.ring_slot_a)[choices[c.ring_slot_a]];
        let ring_b = &self.catalog.slot(c.ring_slot_b)[choices[c.ring_slot_b]];
        if !c.rings_distinct(ring_a, ring_b) {
            return None;
        }

        let mut totals = Totals::default();
        for (slot, &choice) in choices.iter().enumerate() {
            totals.add(&self.catalog.slot(slot)[choice]);
        }

        c.accepts(&totals).then_some(totals)
    }

    /// Like `evaluate`, addressed by linear index. Out-of-range indices yield `None`.
    pub fn evaluate_index(&self, idx: u64) -> Option<Totals> {
        if !self.space.contains(idx) {
            return None;
        }
        self.evaluate(&self.space.decode(idx))
    }

    /// Walks `range`, offering every local improvement to `best`.
    pub fn scan(
        &self,
        worker: usize,
        range: Range<u64>,
        best: &SharedBest,
        counter: &WorkerCounter,
        observer: &dyn SearchObserver,
    ) -> WorkerStats {
        let mut stats = WorkerStats::default();
        if range.is_empty() {
            return stats;
        }

        debug!("Worker {} scanning [{}, {})", worker, range.start, range.end);

        let mut digits = vec![0usize; self.space.slot_count()];
        self.space.decode_into(range.start, &mut digits);
        let mut local_best = 0.0f64;

        for idx in range {
            if let Some(totals) = self.evaluate(&digits) {
                stats.valid += 1;
                if totals.dps > local_best {
                    local_best = totals.dps;
                    stats.local_improvements += 1;

                    // Skip the clone when another worker is already ahead.
                    if totals.dps > best.dps() {
                        let record = BestRecord {
                            combination: Combination::gather(self.catalog, &digits),
                            index: idx,
                            worker,
                        };
                        best.try_install(record, observer);
                    }
                }
            }

            stats.processed += 1;
            if stats.processed % PUBLISH_EVERY == 0 {
                counter.publish(stats.processed);
            }
            self.space.advance(&mut digits);
        }

        counter.publish(stats.processed);
        debug!(
            "Worker {} done: {} processed, {} valid",
            worker, stats.processed, stats.valid
        );
        stats
    }
}
