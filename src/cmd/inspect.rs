use crate::reports;
use clap::Args;
use gearforge::config::Config;
use gearforge::error::GfResult;
use gearforge::search::{SearchOptions, Searcher};
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(config: &Config) -> GfResult<()> {
    let catalog = Arc::new(super::load_catalog(config)?);
    let searcher = Searcher::new(Arc::clone(&catalog), SearchOptions::from(config))?;

    println!("\n🔎 === CATALOG AUDIT === 🔎");
    reports::print_slot_summary(&catalog);

    info!("Total combinations: {}", searcher.space().total());
    info!("Workers: {}", searcher.num_threads());
    reports::print_ranges(&searcher.ranges());
    Ok(())
}
