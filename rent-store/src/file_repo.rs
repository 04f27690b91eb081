use async_trait::async_trait;
use rent_core::SubmissionStore;
use serde_json::Value;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One pretty-printed JSON file per submission under `root/<subdir>/`.
///
/// Files are written once and never touched again. There is no temp-file rename,
/// so a crash mid-write can leave a truncated file behind.
#[derive(Debug, Clone)]
pub struct FileSubmissionStore {
    root: PathBuf,
}

impl FileSubmissionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn write_document(
        &self,
        subdir: &str,
        file_name: &str,
        document: &Value,
    ) -> Result<PathBuf, StoreError> {
        let dir = self.root.join(subdir);
        fs::create_dir_all(&dir).await.map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(file_name);
        let bytes = serde_json::to_vec_pretty(document)?;
        fs::write(&path, bytes).await.map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        debug!("Wrote {}", path.display());
        Ok(path)
    }
}

#[async_trait]
impl SubmissionStore for FileSubmissionStore {
    async fn persist(
        &self,
        subdir: &str,
        file_name: &str,
        document: &Value,
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.write_document(subdir, file_name, document).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_creates_directory_and_writes_pretty_json() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileSubmissionStore::new(tmp.path().join("src"));
        let doc = json!({ "createdAt": "2025-01-01T00:00:00.000Z", "booking": { "name": "Ali" } });

        let path = store
            .persist("userdata", "2025-01-01T00-00-00-000Z_Ali.json", &doc)
            .await
            .unwrap();

        assert_eq!(path, tmp.path().join("src/userdata/2025-01-01T00-00-00-000Z_Ali.json"));
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"booking\": {\n    \"name\": \"Ali\"\n  }"));

        let back: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, doc);
    }

    #[tokio::test]
    async fn test_unwritable_root_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let store = FileSubmissionStore::new(&blocker);
        let err = store
            .write_document("userdata", "x.json", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
