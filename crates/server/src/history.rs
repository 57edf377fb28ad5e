use async_trait::async_trait;
use std::path::{Path, PathBuf};
use summarizer_common::{Result, SummarizerError};
use summarizer_llm::{SummaryRecord, SummaryStore};
use tokio::sync::RwLock;
use tracing::warn;

/// Summary history persisted as a JSON array
pub struct HistoryManager {
    records: RwLock<Vec<SummaryRecord>>,
    file_path: PathBuf,
}

impl HistoryManager {
    pub fn load(path: &Path) -> Result<Self> {
        let records: Vec<SummaryRecord> = if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                    warn!("Ignoring corrupt history file {}: {}", path.display(), e);
                    Vec::new()
                }),
                Err(e) => {
                    warn!("Ignoring unreadable history file {}: {}", path.display(), e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(Self {
            records: RwLock::new(records),
            file_path: path.to_path_buf(),
        })
    }

    pub async fn add_record(&self, record: SummaryRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        self.persist(&records).await
    }

    /// All records, newest first
    pub async fn records(&self) -> Vec<SummaryRecord> {
        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    pub async fn get_by_id(&self, id: &str) -> Option<SummaryRecord> {
        self.records.read().await.iter().find(|r| r.id == id).cloned()
    }

    async fn persist(&self, records: &[SummaryRecord]) -> Result<()> {
        let data = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.file_path, data).await.map_err(|e| {
            SummarizerError::storage(format!(
                "Failed to write history {}: {}",
                self.file_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl SummaryStore for HistoryManager {
    async fn save(&self, record: SummaryRecord) -> Result<()> {
        self.add_record(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use summarizer_llm::{SummaryOptions, SummaryResult};

    fn record(user: &str) -> SummaryRecord {
        let result = SummaryResult {
            summary: "A summary.".to_string(),
            word_count_original: 40,
            word_count_summary: 2,
            compression_ratio: 95.0,
            reading_time_original: 1,
            reading_time_summary: 1,
            key_phrases: vec!["summary".to_string()],
            format: None,
            key_points_included: None,
        };
        SummaryRecord::new(user, "c1", "original text", &SummaryOptions::default(), &result)
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let history = HistoryManager::load(&tmp.path().join("summary_history.json")).unwrap();
        assert!(history.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_persists_and_reloads() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("summary_history.json");

        let history = HistoryManager::load(&path).unwrap();
        let saved = record("u1");
        history.save(saved.clone()).await.unwrap();
        assert!(path.exists());

        let reloaded = HistoryManager::load(&path).unwrap();
        assert_eq!(reloaded.records().await.len(), 1);
        assert_eq!(reloaded.get_by_id(&saved.id).await, Some(saved));
    }

    #[tokio::test]
    async fn test_records_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        let history = HistoryManager::load(&tmp.path().join("h.json")).unwrap();

        let mut older = record("old");
        older.created_at = Utc::now() - Duration::hours(1);
        history.add_record(record("new")).await.unwrap();
        history.add_record(older).await.unwrap();

        let records = history.records().await;
        assert_eq!(records[0].user_id, "new");
        assert_eq!(records[1].user_id, "old");
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("h.json");
        std::fs::write(&path, "not json").unwrap();

        let history = HistoryManager::load(&path).unwrap();
        assert!(history.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_non_utf8_file_starts_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("h.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let history = HistoryManager::load(&path).unwrap();
        assert!(history.records().await.is_empty());

        history.add_record(record("u1")).await.unwrap();
        let reloaded = HistoryManager::load(&path).unwrap();
        assert_eq!(reloaded.records().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unwritable_path_is_storage_error() {
        let tmp = tempfile::tempdir().unwrap();
        let history = HistoryManager::load(&tmp.path().join("missing/dir/h.json")).unwrap();
        let err = history.save(record("u1")).await.unwrap_err();
        assert!(matches!(err, SummarizerError::Storage(_)));
    }
}
