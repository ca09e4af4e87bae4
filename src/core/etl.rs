use crate::core::stats::SyllableStats;
use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output_path: String,
    pub updated: usize,
    pub skipped: usize,
    pub stats: Option<SyllableStats>,
}

pub struct SyllableEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SyllableEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting syllable update...");

        let records = self.pipeline.extract().await?;
        tracing::info!("Loaded {} records", records.len());
        self.monitor.log_stats("Extract");

        let batch = self.pipeline.transform(records).await?;
        tracing::info!(
            "Updated {} names ({} records without a name skipped)",
            batch.updated,
            batch.skipped
        );
        self.monitor.log_stats("Transform");
        self.monitor.log_throughput(batch.updated);

        let updated = batch.updated;
        let skipped = batch.skipped;
        let stats = batch.stats.clone();

        let output_path = self.pipeline.load(batch).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunOutcome {
            output_path,
            updated,
            skipped,
            stats,
        })
    }
}
