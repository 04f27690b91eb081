use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

/// Write-once storage for intake documents.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist `document` as `file_name` inside `subdir`, creating the directory
    /// when needed. Returns the location written.
    async fn persist(
        &self,
        subdir: &str,
        file_name: &str,
        document: &Value,
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>;
}
