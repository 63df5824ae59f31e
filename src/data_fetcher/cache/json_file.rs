//! Persistent cache stored as a single JSON object keyed by cache key.
//!
//! ```json
//! { "jogos-12-05-2024": [ { "campeonato": "...", "canais": ["SporTV"], ... } ] }
//! ```

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::store::CacheStore;
use crate::data_fetcher::models::CanonicalFixture;
use crate::error::AppError;

type CacheDocument = BTreeMap<String, Vec<CanonicalFixture>>;

/// File-backed [`CacheStore`].
///
/// A missing file reads as empty. A file that does not parse is logged and
/// also treated as empty, and is replaced on the next write.
pub struct JsonFileCache {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<CacheDocument, AppError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Cache file {} does not exist yet", self.path.display());
                return Ok(CacheDocument::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(CacheDocument::new());
        }

        match serde_json::from_str::<CacheDocument>(&content) {
            Ok(document) => Ok(document),
            Err(e) => {
                warn!(
                    "Ignoring unreadable cache file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(CacheDocument::new())
            }
        }
    }

    async fn write_document(&self, document: &CacheDocument) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(document)
            .map_err(|e| AppError::cache_error(format!("Failed to serialize cache: {e}")))?;

        // Write next to the target and rename so readers never see a partial file
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).await?;
        fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

impl CacheStore for JsonFileCache {
    #[instrument(skip(self), fields(cache_key = %key))]
    async fn get(&self, key: &str) -> Result<Option<Vec<CanonicalFixture>>, AppError> {
        let mut document = self.read_document().await?;
        let hit = document.remove(key);
        debug!("File cache lookup: key={}, hit={}", key, hit.is_some());
        Ok(hit)
    }

    #[instrument(skip(self, fixtures), fields(cache_key = %key))]
    async fn set(&self, key: &str, fixtures: &[CanonicalFixture]) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?;
        document.insert(key.to_string(), fixtures.to_vec());
        self.write_document(&document).await?;

        info!(
            "Cached {} fixtures under {} in {}",
            fixtures.len(),
            key,
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn fixture() -> CanonicalFixture {
        CanonicalFixture {
            league: "Copa Libertadores".to_string(),
            stadium: "Arena do Grêmio".to_string(),
            kickoff_time: "21h30".to_string(),
            abbreviations: ("GRE".to_string(), "SAN".to_string()),
            teams: ("Grêmio".to_string(), "Santos".to_string()),
            channels: vec!["SporTV".to_string(), "Premiere 2".to_string()],
            crests: (
                "https://img.example.com/gre.png".to_string(),
                "https://img.example.com/san.png".to_string(),
            ),
            kickoff: NaiveDate::from_ymd_opt(2024, 5, 12)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_a_miss() {
        let dir = tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("cache.json"));
        assert_eq!(cache.get("jogos-12-05-2024").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_round_trip_preserves_every_field() {
        let dir = tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("nested").join("cache.json"));
        let fixtures = vec![fixture()];

        cache.set("jogos-12-05-2024", &fixtures).await.unwrap();

        // A fresh handle must read the same data back from disk
        let reopened = JsonFileCache::new(cache.path());
        assert_eq!(
            reopened.get("jogos-12-05-2024").await.unwrap(),
            Some(fixtures)
        );
    }

    #[tokio::test]
    async fn test_entries_for_other_dates_are_kept() {
        let dir = tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("cache.json"));

        cache.set("jogos-12-05-2024", &[fixture()]).await.unwrap();
        cache.set("jogos-13-05-2024", &[]).await.unwrap();

        assert_eq!(cache.get("jogos-12-05-2024").await.unwrap().unwrap().len(), 1);
        assert_eq!(cache.get("jogos-13-05-2024").await.unwrap(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_file_uses_portuguese_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let cache = JsonFileCache::new(&path);
        cache.set("jogos-12-05-2024", &[fixture()]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"jogos-12-05-2024\""));
        assert!(raw.contains("\"canais\""));
        assert!(raw.contains("\"horario\""));
        assert!(!dir.path().join("cache.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty_and_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "{ not json").unwrap();

        let cache = JsonFileCache::new(&path);
        assert_eq!(cache.get("jogos-12-05-2024").await.unwrap(), None);

        cache.set("jogos-12-05-2024", &[fixture()]).await.unwrap();
        assert!(cache.get("jogos-12-05-2024").await.unwrap().is_some());
    }
}
