use crate::consts::*;
use crate::error::{GearForgeError, GfResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub constraints: Constraints,
    #[command(flatten)]
    pub catalog: CatalogParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Hard cap on worker threads.
    #[arg(long, default_value_t = DEFAULT_MAX_THREADS)]
    pub max_threads: usize,

    /// Explicit worker count (still capped by --max-threads).
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,

    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
    pub progress_bar_width: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_threads: DEFAULT_MAX_THREADS,
            threads: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            progress_bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

/// Validity rules applied to every combination.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    #[arg(long, default_value_t = DEFAULT_MIN_STAMINA)]
    pub min_stamina: i64,
    #[arg(long, default_value_t = DEFAULT_MIN_HIT)]
    pub min_hit: i64,
    #[arg(long, default_value_t = DEFAULT_MIN_EXPERTISE)]
    pub min_expertise: i64,

    // === RINGS ===
    #[arg(long, default_value_t = DEFAULT_RING_SLOT_A)]
    pub ring_slot_a: usize,
    #[arg(long, default_value_t = DEFAULT_RING_SLOT_B)]
    pub ring_slot_b: usize,
    #[arg(long, default_value_t = DEFAULT_RING_ID_MODULUS)]
    pub ring_id_modulus: i64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            min_stamina: DEFAULT_MIN_STAMINA,
            min_hit: DEFAULT_MIN_HIT,
            min_expertise: DEFAULT_MIN_EXPERTISE,
            ring_slot_a: DEFAULT_RING_SLOT_A,
            ring_slot_b: DEFAULT_RING_SLOT_B,
            ring_id_modulus: DEFAULT_RING_ID_MODULUS,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogParams {
    #[arg(short = 'i', long, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: String,
    #[arg(long, default_value_t = SLOT_BASE)]
    pub slot_base: i64,
    #[arg(long, default_value_t = SLOT_COUNT)]
    pub slot_count: usize,
    #[arg(long, default_value = DEFAULT_RESULTS_LOG)]
    pub results_log: String,
    #[arg(long, default_value_t = false)]
    pub no_log: bool,
}

impl Default for CatalogParams {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG_PATH.to_string(),
            slot_base: SLOT_BASE,
            slot_count: SLOT_COUNT,
            results_log: DEFAULT_RESULTS_LOG.to_string(),
            no_log: false,
        }
    }
}

impl SearchParams {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GearForgeError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every value the user typed on the command line over `self`.
    /// Values clap filled in from defaults are left alone.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.max_threads);
        update_if_present!(search.threads);
        update_if_present!(search.poll_interval_ms);
        update_if_present!(search.progress_bar_width);

        update_if_present!(constraints.min_stamina);
        update_if_present!(constraints.min_hit);
        update_if_present!(constraints.min_expertise);
        update_if_present!(constraints.ring_slot_a);
        update_if_present!(constraints.ring_slot_b);
        update_if_present!(constraints.ring_id_modulus);

        update_if_present!(catalog.catalog);
        update_if_present!(catalog.slot_base);
        update_if_present!(catalog.slot_count);
        update_if_present!(catalog.results_log);
        update_if_present!(catalog.no_log);
    }

    pub fn validate(&self) -> GfResult<()> {
        let c = &self.constraints;
        let slot_count = self.catalog.slot_count;

        if slot_count == 0 {
            return Err(GearForgeError::Config("slot_count must be at least 1".into()));
        }
        if c.ring_slot_a == c.ring_slot_b {
            return Err(GearForgeError::Config(format!(
                "ring slots must differ (both are {})",
                c.ring_slot_a
            )));
        }
        if c.ring_slot_a >= slot_count || c.ring_slot_b >= slot_count {
            return Err(GearForgeError::Config(format!(
                "ring slots ({}, {}) must be below slot_count {}",
                c.ring_slot_a, c.ring_slot_b, slot_count
            )));
        }
        if c.ring_id_modulus <= 0 {
            return Err(GearForgeError::Config("ring_id_modulus must be positive".into()));
        }
        if self.search.max_threads == 0 {
            return Err(GearForgeError::Config("max_threads must be at least 1".into()));
        }
        if self.search.poll_interval_ms == 0 {
            return Err(GearForgeError::Config("poll_interval_ms must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.constraints.min_stamina, 1000);
        assert_eq!(config.constraints.min_hit, 300);
        assert_eq!(config.constraints.min_expertise, 100);
        assert_eq!(config.search.max_threads, 32);
        assert_eq!(config.search.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "constraints": { "min_hit": 250 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.constraints.min_hit, 250);
        assert_eq!(config.constraints.min_stamina, 1000);
        assert_eq!(config.catalog.slot_count, 12);
    }

    #[test]
    fn test_rejects_ring_slot_outside_catalog() {
        let mut config = Config::default();
        config.constraints.ring_slot_b = 12;
        assert!(matches!(config.validate(), Err(GearForgeError::Config(_))));
    }

    #[test]
    fn test_rejects_identical_ring_slots() {
        let mut config = Config::default();
        config.constraints.ring_slot_a = 11;
        assert!(matches!(config.validate(), Err(GearForgeError::Config(_))));
    }
}
