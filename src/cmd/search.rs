use crate::reports::{self, ResultLog};
use clap::Args;
use gearforge::config::Config;
use gearforge::error::GfResult;
use gearforge::search::{BestRecord, ProgressSnapshot, SearchObserver, SearchOptions, Searcher};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,
}

struct CliReporter {
    log: Option<Mutex<ResultLog>>,
}

impl CliReporter {
    fn new(config: &Config) -> Self {
        if config.catalog.no_log {
            return Self { log: None };
        }
        let log = match ResultLog::open(&config.catalog.results_log) {
            Ok(log) => Some(Mutex::new(log)),
            Err(e) => {
                warn!(
                    "⚠️  Failed to open {} for logging: {}",
                    config.catalog.results_log, e
                );
                None
            }
        };
        Self { log }
    }

    fn report(&self, best: &BestRecord) {
        reports::print_combination(&best.combination);
        if let Some(log) = &self.log {
            let mut log = log.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Err(e) = log.append(&best.combination) {
                warn!("⚠️  Failed to write results log: {}", e);
            }
        }
    }
}

impl SearchObserver for CliReporter {
    fn on_new_best(&self, best: &BestRecord) {
        info!(
            "⭐ New best: {:.2} DPS (combination #{}, worker {})",
            best.dps(),
            best.index,
            best.worker
        );
        self.report(best);
    }

    fn on_progress(&self, snapshot: &ProgressSnapshot) {
        info!("{}", snapshot);
    }
}

pub fn run(config: &Config) -> GfResult<()> {
    let catalog = super::load_catalog(config)?;
    let searcher = Searcher::new(Arc::new(catalog), SearchOptions::from(config))?;
    let reporter = CliReporter::new(config);

    let outcome = searcher.run(&reporter)?;

    info!("\n=== 🏆 FINAL RESULT ===");
    match &outcome.best {
        Some(best) => reporter.report(best),
        None => info!("No valid combination found."),
    }

    let valid: u64 = outcome.workers.iter().map(|w| w.valid).sum();
    info!(
        "Processed {}/{} combinations ({} valid).",
        outcome.processed, outcome.total, valid
    );
    info!(
        "Total processing time: {} seconds.",
        outcome.elapsed.as_secs()
    );
    Ok(())
}
