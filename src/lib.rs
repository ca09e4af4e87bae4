pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::app::pipelines::NameSyllablePipeline;
pub use crate::core::{
    cache::{estimate_syllables_cached, HashMapCache, NoCache, SyllableCache},
    calibration::{run_calibration, CalibrationReport, REFERENCE_CASES},
    etl::{RunOutcome, SyllableEngine},
    stats::SyllableStats,
    syllables::{estimate_syllables, normalize_name},
};
pub use crate::domain::model::NameRecord;
pub use crate::utils::error::{Result, SyllableError};
