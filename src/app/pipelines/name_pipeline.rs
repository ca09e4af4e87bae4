use crate::core::cache::HashMapCache;
use crate::core::calibration::{run_calibration, REFERENCE_CASES};
use crate::core::stats::SyllableStats;
use crate::core::syllables::estimate_syllables;
use crate::core::{ConfigProvider, NameRecord, Pipeline, Storage, SyllableBatch};
use crate::domain::model::NameField;
use crate::utils::error::{Result, SyllableError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// 讀取名字清單、逐筆寫入音節數、再寫回原檔
pub struct NameSyllablePipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> NameSyllablePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// 寫到 summary 檔的執行摘要
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub input_file: String,
    pub updated: usize,
    pub skipped: usize,
    pub stats: Option<SyllableStats>,
    pub calibration_correct: usize,
    pub calibration_total: usize,
    pub calibration_accuracy: f64,
}

pub fn parse_records(raw: &[u8]) -> Result<Vec<NameRecord>> {
    let json_data: Value = serde_json::from_slice(raw)?;

    let Value::Array(items) = json_data else {
        return Err(SyllableError::InvalidInputFormat {
            message: "expected a top-level JSON array of name records".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(obj) => Ok(NameRecord::new(obj)),
            other => Err(SyllableError::InvalidRecordFormat {
                index,
                message: format!("expected an object, found {}", json_type(&other)),
            }),
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for NameSyllablePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<NameRecord>> {
        let input = self.config.input_file();

        if !self.storage.exists(input).await {
            return Err(SyllableError::InputNotFound {
                path: input.to_string(),
            });
        }

        let raw = self.storage.read_file(input).await?;
        tracing::debug!("Read {} bytes from {}", raw.len(), input);

        // 先備份原始內容，之後才會覆寫
        if self.config.backup_enabled() {
            let backup = self.config.backup_file();
            tracing::info!("💾 Creating backup: {}", backup);
            self.storage.write_file(&backup, &raw).await?;
        }

        parse_records(&raw)
    }

    async fn transform(&self, mut records: Vec<NameRecord>) -> Result<SyllableBatch> {
        let interval = self.config.progress_interval().max(1);
        let mut cache = self.config.cache_enabled().then(HashMapCache::new);
        let mut updated = 0usize;
        let mut skipped = 0usize;

        tracing::info!("Processing {} names...", records.len());

        for (index, record) in records.iter_mut().enumerate() {
            let syllables = match record.name_field() {
                NameField::Text(name) => match cache.as_mut() {
                    Some(cache) => cache.estimate(name),
                    None => estimate_syllables(name),
                },
                // null 視為空字串
                NameField::Null => 0,
                NameField::Missing => {
                    tracing::debug!("Skipping record #{}: no \"name\" field", index);
                    skipped += 1;
                    continue;
                }
                NameField::Other(value) => {
                    return Err(SyllableError::InvalidRecordFormat {
                        index,
                        message: format!("\"name\" must be a string, found {}", json_type(value)),
                    });
                }
            };

            record.set_syllables(syllables);
            updated += 1;

            if updated % interval == 0 {
                tracing::info!("Processed {} names...", updated);
            }
        }

        if let Some(cache) = &cache {
            tracing::debug!(
                "Syllable cache: {} distinct names, {} hits",
                cache.len(),
                cache.hits()
            );
        }

        // 沒有 name 的紀錄若也沒有 syllables，統計時視為 0
        let stats =
            SyllableStats::from_counts(records.iter().map(|r| r.syllables().unwrap_or(0)));

        Ok(SyllableBatch {
            records,
            updated,
            skipped,
            stats,
        })
    }

    async fn load(&self, batch: SyllableBatch) -> Result<String> {
        let input = self.config.input_file();

        let json_data = serde_json::to_string_pretty(&batch.records)?;
        tracing::debug!("Writing {} bytes to {}", json_data.len(), input);
        self.storage.write_file(input, json_data.as_bytes()).await?;

        if let Some(summary_path) = self.config.summary_path() {
            let calibration = run_calibration(REFERENCE_CASES);
            let summary = RunSummary {
                generated_at: Utc::now(),
                input_file: input.to_string(),
                updated: batch.updated,
                skipped: batch.skipped,
                stats: batch.stats,
                calibration_correct: calibration.correct,
                calibration_total: calibration.total,
                calibration_accuracy: calibration.accuracy(),
            };
            let summary_json = serde_json::to_string_pretty(&summary)?;
            self.storage
                .write_file(summary_path, summary_json.as_bytes())
                .await?;
            tracing::info!("📝 Summary written to: {}", summary_path);
        }

        Ok(input.to_string())
    }
}
