use crate::domain::model::{NameRecord, SyllableBatch};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn backup_enabled(&self) -> bool;
    fn progress_interval(&self) -> usize;
    fn cache_enabled(&self) -> bool;
    fn min_accuracy(&self) -> f64;
    fn summary_path(&self) -> Option<&str>;

    /// names.json -> names.json.backup
    fn backup_file(&self) -> String {
        format!("{}.backup", self.input_file())
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<NameRecord>>;
    async fn transform(&self, records: Vec<NameRecord>) -> Result<SyllableBatch>;
    async fn load(&self, batch: SyllableBatch) -> Result<String>;
}
