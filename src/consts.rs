/// Number of equipment slots in a complete loadout.
pub const SLOT_COUNT: usize = 12;

/// Raw `SlotInt` of the first catalog slot. Slots are numbered 10..=21 at the source.
pub const SLOT_BASE: i64 = 10;

/// Upper bound on worker threads regardless of available parallelism.
pub const DEFAULT_MAX_THREADS: usize = 32;

/// Monitor cadence.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

pub const DEFAULT_BAR_WIDTH: usize = 40;

pub const DEFAULT_MIN_STAMINA: i64 = 1000;
pub const DEFAULT_MIN_HIT: i64 = 300;
pub const DEFAULT_MIN_EXPERTISE: i64 = 100;

/// Ring slots, as 0-based catalog positions.
pub const DEFAULT_RING_SLOT_A: usize = 10;
pub const DEFAULT_RING_SLOT_B: usize = 11;

/// Two rings are the same variant when their instance ids agree modulo this value.
pub const DEFAULT_RING_ID_MODULUS: i64 = 100;

pub const DEFAULT_CATALOG_PATH: &str = "clean_pre_items.json";
pub const DEFAULT_RESULTS_LOG: &str = "results.txt";
