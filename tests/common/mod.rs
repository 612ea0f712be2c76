#![allow(dead_code)]

use gearforge::catalog::{Item, SlotCatalog};
use gearforge::config::Constraints;
use gearforge::search::{BestRecord, ProgressSnapshot, SearchObserver, SearchOptions};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Builder for Item to keep tests readable
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            item: Item {
                name: name.to_string(),
                stamina: 0,
                hit_rating: 0,
                expertise_rating: 0,
                dps: 0.0,
                cost: 0,
                slot_id: 10,
                uuid: 0,
            },
        }
    }

    pub fn stats(mut self, stamina: i32, hit: i32, expertise: i32) -> Self {
        self.item.stamina = stamina;
        self.item.hit_rating = hit;
        self.item.expertise_rating = expertise;
        self
    }

    pub fn dps(mut self, dps: f64) -> Self {
        self.item.dps = dps;
        self
    }

    pub fn cost(mut self, cost: i32) -> Self {
        self.item.cost = cost;
        self
    }

    pub fn slot(mut self, slot_id: i64) -> Self {
        self.item.slot_id = slot_id;
        self
    }

    pub fn uuid(mut self, uuid: i64) -> Self {
        self.item.uuid = uuid;
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

/// 12 slots of 1..=max_per_slot items with attributes scattered around the thresholds.
pub fn random_catalog(seed: u64, max_per_slot: usize) -> SlotCatalog {
    let mut rng = fastrand::Rng::with_seed(seed);
    let slots = (0..12)
        .map(|s| {
            let count = rng.usize(1..=max_per_slot);
            (0..count)
                .map(|i| {
                    ItemBuilder::new(&format!("s{}-i{}", s, i))
                        .stats(rng.i32(0..200), rng.i32(0..60), rng.i32(0..20))
                        .dps(rng.f64() * 50.0)
                        .cost(rng.i32(0..5000))
                        .slot(10 + s as i64)
                        .uuid(rng.i64(0..400))
                        .build()
                })
                .collect()
        })
        .collect();
    SlotCatalog::new(slots).expect("random catalog has no empty slots")
}

/// Reference answer by plain recursion over the Cartesian product.
pub fn brute_force_best(catalog: &SlotCatalog, c: &Constraints) -> Option<f64> {
    fn walk(
        catalog: &SlotCatalog,
        c: &Constraints,
        slot: usize,
        picked: &mut Vec<usize>,
        best: &mut Option<f64>,
    ) {
        if slot == catalog.len() {
            let a = &catalog.slot(c.ring_slot_a)[picked[c.ring_slot_a]];
            let b = &catalog.slot(c.ring_slot_b)[picked[c.ring_slot_b]];
            if a.uuid % c.ring_id_modulus == b.uuid % c.ring_id_modulus {
                return;
            }
            let (mut st, mut hit, mut exp, mut dps) = (0i64, 0i64, 0i64, 0.0f64);
            for (s, &p) in picked.iter().enumerate() {
                let item = &catalog.slot(s)[p];
                st += item.stamina as i64;
                hit += item.hit_rating as i64;
                exp += item.expertise_rating as i64;
                dps += item.dps;
            }
            if st >= c.min_stamina && hit >= c.min_hit && exp >= c.min_expertise && dps > 0.0 {
                if best.map_or(true, |b| dps > b) {
                    *best = Some(dps);
                }
            }
            return;
        }
        for i in 0..catalog.slot(slot).len() {
            picked.push(i);
            walk(catalog, c, slot + 1, picked, best);
            picked.pop();
        }
    }

    let mut best = None;
    walk(catalog, c, 0, &mut Vec::new(), &mut best);
    best
}

pub fn options(threads: usize, constraints: Constraints) -> SearchOptions {
    SearchOptions {
        num_threads: threads,
        poll_interval: Duration::from_millis(5),
        bar_width: 20,
        constraints,
    }
}

/// Remembers every new best and counts progress ticks.
#[derive(Default)]
pub struct RecordingObserver {
    pub bests: Mutex<Vec<BestRecord>>,
    pub ticks: AtomicUsize,
    pub last_tick: Mutex<Option<ProgressSnapshot>>,
}

impl RecordingObserver {
    pub fn best_dps_history(&self) -> Vec<f64> {
        self.bests.lock().unwrap().iter().map(BestRecord::dps).collect()
    }

    pub fn tick_count(&self) -> usize {
        self.ticks.load(Ordering::SeqCst)
    }
}

impl SearchObserver for RecordingObserver {
    fn on_new_best(&self, best: &BestRecord) {
        self.bests.lock().unwrap().push(best.clone());
    }

    fn on_progress(&self, snapshot: &ProgressSnapshot) {
        self.ticks.fetch_add(1, Ordering::SeqCst);
        *self.last_tick.lock().unwrap() = Some(*snapshot);
    }
}
