pub mod inspect;
pub mod search;

use gearforge::catalog::{self, SlotCatalog};
use gearforge::config::Config;
use gearforge::error::GfResult;
use tracing::info;

pub fn load_catalog(config: &Config) -> GfResult<SlotCatalog> {
    info!("📂 Loading Catalog: {}", config.catalog.catalog);
    let items = catalog::load_items(&config.catalog.catalog)?;
    SlotCatalog::from_items(items, config.catalog.slot_base, config.catalog.slot_count)
}
