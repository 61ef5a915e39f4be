use crate::domain::model::{SeenSet, FIRST_RUN_SENTINEL};
use crate::domain::ports::SeenStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File-backed seen-title store: one title per line, UTF-8. Writes go through
/// a temp file in the same directory followed by a rename, so a crash
/// mid-write leaves either the old set or the new set on disk, never a
/// half-written one.
pub struct FileSeenStore {
    path: PathBuf,
}

impl FileSeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_atomic(&self, contents: &str) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[async_trait]
impl SeenStore for FileSeenStore {
    async fn load(&self) -> Result<SeenSet> {
        if !self.path.exists() {
            tracing::info!(
                "Seen-title store {} does not exist, initializing",
                self.path.display()
            );
            self.write_atomic(&format!("{}\n", FIRST_RUN_SENTINEL))?;
        }

        let contents = fs::read_to_string(&self.path)?;
        Ok(contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn replace(&self, set: &SeenSet) -> Result<()> {
        // Sorted output keeps the file diffable between cycles.
        let mut lines: Vec<&str> = set.iter().map(String::as_str).collect();
        lines.sort_unstable();

        let mut contents = lines.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        self.write_atomic(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileSeenStore {
        FileSeenStore::new(dir.path().join("lastOrder.log"))
    }

    #[tokio::test]
    async fn test_first_load_initializes_sentinel() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let set = store.load().await.unwrap();

        assert_eq!(set.len(), 1);
        assert!(set.contains(FIRST_RUN_SENTINEL));
        // The sentinel is persisted, not just returned.
        let on_disk = fs::read_to_string(dir.path().join("lastOrder.log")).unwrap();
        assert_eq!(on_disk, "Start\n");
    }

    #[tokio::test]
    async fn test_replace_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let set: SeenSet = ["Сайт под ключ", "Бот для магазина", "A"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        store.replace(&set).await.unwrap();

        assert_eq!(store.load().await.unwrap(), set);
    }

    #[tokio::test]
    async fn test_replace_with_empty_set_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.load().await.unwrap();
        store.replace(&SeenSet::new()).await.unwrap();

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_overwrites_previous_set() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let first: SeenSet = ["A", "B"].iter().map(|s| s.to_string()).collect();
        store.replace(&first).await.unwrap();

        let second: SeenSet = ["C"].iter().map(|s| s.to_string()).collect();
        store.replace(&second).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, second);
        assert!(!loaded.contains("A"));
    }

    #[tokio::test]
    async fn test_load_reads_one_title_per_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lastOrder.log");
        fs::write(&path, "Start\nПервый заказ\nВторой заказ\n").unwrap();

        let store = FileSeenStore::new(&path);
        let set = store.load().await.unwrap();

        assert_eq!(set.len(), 3);
        assert!(set.contains("Первый заказ"));
        assert!(set.contains("Второй заказ"));
    }
}
