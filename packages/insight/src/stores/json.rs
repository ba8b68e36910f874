//! JSON-file insight store.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::traits::InsightStore;
use crate::types::InsightReport;

const LATEST_FILE: &str = "latest.json";

/// Insight store backed by a single pretty-printed JSON file.
///
/// Writes `latest.json` under its base directory; each save overwrites
/// the previous one. Survives process restarts, which is all the
/// persistence contract asks for.
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory, creating it if
    /// needed.
    pub async fn new(base_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base_path = base_path.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&base_path).await?;
        Ok(Self { base_path })
    }

    fn latest_path(&self) -> PathBuf {
        self.base_path.join(LATEST_FILE)
    }
}

#[async_trait]
impl InsightStore for JsonFileStore {
    async fn save(&self, report: &InsightReport) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(report)?;
        tokio::fs::write(self.latest_path(), json).await?;
        Ok(())
    }

    async fn load_latest(&self) -> Result<Option<InsightReport>, StoreError> {
        let path = self.latest_path();
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }
}
