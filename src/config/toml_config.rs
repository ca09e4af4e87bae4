use crate::config::{DEFAULT_INPUT_FILE, DEFAULT_PROGRESS_INTERVAL};
use crate::core::calibration::DEFAULT_MIN_ACCURACY;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SyllableError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: String,
    #[serde(default = "default_true")]
    pub backup: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
    #[serde(default = "default_true")]
    pub cache: bool,
    #[serde(default = "default_min_accuracy")]
    pub min_accuracy: f64,
    #[serde(default = "default_true")]
    pub self_check: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub summary_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    /// "compact" 或 "json"
    pub log_format: Option<String>,
}

fn default_input_path() -> String {
    DEFAULT_INPUT_FILE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_progress_interval() -> usize {
    DEFAULT_PROGRESS_INTERVAL
}

fn default_min_accuracy() -> f64 {
    DEFAULT_MIN_ACCURACY
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            backup: true,
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            cache: true,
            min_accuracy: DEFAULT_MIN_ACCURACY,
            self_check: true,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| SyllableError::ConfigError {
                message: format!("cannot read '{}': {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SyllableError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NAMES_FILE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SyllableError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn job_name(&self) -> &str {
        self.job.name.as_deref().unwrap_or("unnamed")
    }

    pub fn self_check_enabled(&self) -> bool {
        self.processing.self_check
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let name = validation::validate_required_field("job.name", &self.job.name)?;
        validation::validate_non_empty_string("job.name", name)?;

        validation::validate_path("input.path", &self.input.path)?;
        validation::validate_file_extension("input.path", &self.input.path, &["json"])?;

        validation::validate_positive_number(
            "processing.progress_interval",
            self.processing.progress_interval,
            1,
        )?;
        validation::validate_range(
            "processing.min_accuracy",
            self.processing.min_accuracy,
            0.0,
            1.0,
        )?;

        if let Some(summary) = &self.output.summary_path {
            validation::validate_path("output.summary_path", summary)?;
        }

        if let Some(format) = self.monitoring.as_ref().and_then(|m| m.log_format.as_deref()) {
            let valid_formats = ["compact", "json"];
            if !valid_formats.contains(&format) {
                return Err(SyllableError::InvalidConfigValueError {
                    field: "monitoring.log_format".to_string(),
                    value: format.to_string(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_file(&self) -> &str {
        &self.input.path
    }

    fn backup_enabled(&self) -> bool {
        self.input.backup
    }

    fn progress_interval(&self) -> usize {
        self.processing.progress_interval
    }

    fn cache_enabled(&self) -> bool {
        self.processing.cache
    }

    fn min_accuracy(&self) -> f64 {
        self.processing.min_accuracy
    }

    fn summary_path(&self) -> Option<&str> {
        self.output.summary_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[job]
name = "vornamen"
description = "Update syllables for the German first name list"

[input]
path = "data/names.json"
backup = false

[processing]
progress_interval = 500
cache = false
min_accuracy = 0.75

[output]
summary_path = "data/summary.json"

[monitoring]
enabled = true
log_format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.job_name(), "vornamen");
        assert_eq!(config.input_file(), "data/names.json");
        assert!(!config.backup_enabled());
        assert_eq!(config.progress_interval(), 500);
        assert!(!config.cache_enabled());
        assert_eq!(config.summary_path(), Some("data/summary.json"));
        assert!(config.monitoring_enabled());
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_default() {
        let config = TomlConfig::from_toml_str("[job]\nname = \"minimal\"\n").unwrap();

        assert_eq!(config.input_file(), "names.json");
        assert!(config.backup_enabled());
        assert!(config.cache_enabled());
        assert!(config.self_check_enabled());
        assert_eq!(config.progress_interval(), 1000);
        assert_eq!(config.min_accuracy(), 0.8);
        assert!(config.summary_path().is_none());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NAME_SYLLABLES_TEST_INPUT", "from_env.json");

        let toml_content = r#"
[job]
name = "env"

[input]
path = "${NAME_SYLLABLES_TEST_INPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_file(), "from_env.json");

        std::env::remove_var("NAME_SYLLABLES_TEST_INPUT");
    }

    #[test]
    fn test_config_validation() {
        let missing_name = TomlConfig::from_toml_str("[job]\n").unwrap();
        assert!(matches!(
            missing_name.validate(),
            Err(SyllableError::MissingConfigError { .. })
        ));

        let bad_format = TomlConfig::from_toml_str(
            "[job]\nname = \"x\"\n[monitoring]\nenabled = false\nlog_format = \"xml\"\n",
        )
        .unwrap();
        assert!(bad_format.validate().is_err());

        let zero_interval = TomlConfig::from_toml_str(
            "[job]\nname = \"x\"\n[processing]\nprogress_interval = 0\n",
        )
        .unwrap();
        assert!(zero_interval.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[job\nname = ");
        assert!(matches!(
            result,
            Err(SyllableError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[job]\nname = \"file-test\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.job_name(), "file-test");

        assert!(matches!(
            TomlConfig::from_file("/nonexistent/job.toml"),
            Err(SyllableError::ConfigError { .. })
        ));
    }
}
