use thiserror::Error;

#[derive(Error, Debug)]
pub enum GearForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog Unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("No items found for slot {slot_id} (catalog slot {slot})")]
    EmptySlot { slot: usize, slot_id: i64 },

    #[error("Overflow detected in total combinations calculation at slot {slot}")]
    CombinationOverflow { slot: usize },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Thread Pool Error: {0}")]
    ThreadPool(String),
}

pub type GfResult<T> = Result<T, GearForgeError>;
