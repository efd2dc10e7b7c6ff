use crate::domain::model::{AnalysisRecord, WorkspaceSnapshot};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn workspace_path(&self) -> &str;
    fn api_endpoint(&self) -> &str;
    /// Injected credential; `None` means the run must fail with a
    /// configuration error before any request is sent.
    fn api_key(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn output_path(&self) -> &str;
    fn key_files(&self) -> &[String];
    fn ignore_dirs(&self) -> &[String];
    fn max_depth(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<WorkspaceSnapshot>;
    async fn transform(&self, snapshot: WorkspaceSnapshot) -> Result<AnalysisRecord>;
    async fn load(&self, record: AnalysisRecord) -> Result<String>;
}
