pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::calibration::DEFAULT_MIN_ACCURACY;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_FILE: &str = "names.json";
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "name-syllables")]
#[command(about = "Estimate German name syllables and store them in a names JSON file")]
pub struct CliConfig {
    /// JSON array of name records to update in place
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    pub input: String,

    #[arg(long, help = "Do not write <input>.backup before updating")]
    pub no_backup: bool,

    /// Log progress every N updated names
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: usize,

    #[arg(long, help = "Estimate every name even if it was already seen")]
    pub no_cache: bool,

    /// Warn when the reference check scores below this ratio
    #[arg(long, default_value_t = DEFAULT_MIN_ACCURACY)]
    pub min_accuracy: f64,

    #[arg(long, help = "Skip the reference name check before updating")]
    pub skip_self_check: bool,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub summary: Option<String>,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input
    }

    fn backup_enabled(&self) -> bool {
        !self.no_backup
    }

    fn progress_interval(&self) -> usize {
        self.progress_interval
    }

    fn cache_enabled(&self) -> bool {
        !self.no_cache
    }

    fn min_accuracy(&self) -> f64 {
        self.min_accuracy
    }

    fn summary_path(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_file_extension("input", &self.input, &["json"])?;
        validation::validate_positive_number("progress_interval", self.progress_interval, 1)?;
        validation::validate_range("min_accuracy", self.min_accuracy, 0.0, 1.0)?;
        if let Some(summary) = &self.summary {
            validation::validate_path("summary", summary)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["name-syllables"]);
        assert_eq!(config.input_file(), "names.json");
        assert!(config.backup_enabled());
        assert!(config.cache_enabled());
        assert_eq!(config.progress_interval(), 1000);
        assert_eq!(config.backup_file(), "names.json.backup");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "name-syllables",
            "--input",
            "data/vornamen.json",
            "--no-backup",
            "--no-cache",
            "--summary",
            "summary.json",
        ]);
        assert_eq!(config.input_file(), "data/vornamen.json");
        assert!(!config.backup_enabled());
        assert!(!config.cache_enabled());
        assert_eq!(config.summary_path(), Some("summary.json"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero_interval = CliConfig::parse_from(["name-syllables", "--progress-interval", "0"]);
        assert!(zero_interval.validate().is_err());

        let bad_accuracy = CliConfig::parse_from(["name-syllables", "--min-accuracy", "1.5"]);
        assert!(bad_accuracy.validate().is_err());

        let not_json = CliConfig::parse_from(["name-syllables", "--input", "names.csv"]);
        assert!(not_json.validate().is_err());
    }
}
