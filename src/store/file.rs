//! JSON file backed item store.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;
use tracing::debug;

use super::ItemRepository;
use crate::error::{CatalogError, Result};
use crate::models::Item;

// == JSON File Store ==
/// Stores the item collection as a pretty-printed JSON array in one file.
///
/// Writes overwrite the file in place and are not transactional: a crash
/// mid-write can leave truncated JSON behind, which later reads report as a
/// `ParseFailure`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given file. The file is not touched until
    /// the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ItemRepository for JsonFileStore {
    async fn list(&self) -> Result<Vec<Item>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::ReadFailure(format!("{}: {}", self.path.display(), e)))?;

        let items: Vec<Item> = serde_json::from_str(&raw)
            .map_err(|e| CatalogError::ParseFailure(format!("{}: {}", self.path.display(), e)))?;

        debug!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    async fn replace_all(&self, items: &[Item]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| CatalogError::PersistenceFailure(e.to_string()))?;

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            CatalogError::PersistenceFailure(format!("{}: {}", self.path.display(), e))
        })?;

        debug!("Wrote {} items to {}", items.len(), self.path.display());
        Ok(())
    }

    async fn last_modified(&self) -> io::Result<SystemTime> {
        tokio::fs::metadata(&self.path).await?.modified()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    const SEED: &str = r#"[
  { "id": 1, "name": "Laptop Pro", "category": "Electronics", "price": 2499 },
  { "id": 2, "name": "Noise Cancelling Headphones", "category": "Electronics", "price": 399 }
]"#;

    fn seeded_store() -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, SEED).unwrap();
        (dir, JsonFileStore::new(path))
    }

    #[tokio::test]
    async fn test_list_reads_file() {
        let (_dir, store) = seeded_store();

        let items = store.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Laptop Pro");
        assert_eq!(items[1].price, Some(json!(399)));
    }

    #[tokio::test]
    async fn test_list_missing_file_is_read_failure() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));

        let result = store.list().await;
        assert!(matches!(result, Err(CatalogError::ReadFailure(_))));
    }

    #[tokio::test]
    async fn test_list_malformed_file_is_parse_failure() {
        let (_dir, store) = seeded_store();
        fs::write(store.path(), r#"[{"id": 1, "name": "Trunc"#).unwrap();

        let result = store.list().await;
        assert!(matches!(result, Err(CatalogError::ParseFailure(_))));
    }

    #[tokio::test]
    async fn test_replace_all_rewrites_file() {
        let (_dir, store) = seeded_store();
        let mut items = store.list().await.unwrap();
        items.truncate(1);

        store.replace_all(&items).await.unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n  {"), "expected 2-space pretty output");
        assert_eq!(store.list().await.unwrap(), items);
    }

    #[tokio::test]
    async fn test_append_keeps_existing_items() {
        let (_dir, store) = seeded_store();
        let item = Item {
            id: 3,
            name: "Desk".to_string(),
            stock: Some(json!(4)),
            ..Item::default()
        };

        store.append(item.clone()).await.unwrap();

        let items = store.list().await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], item);
    }

    #[tokio::test]
    async fn test_rewrite_preserves_unlisted_fields_and_integers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        fs::write(
            &path,
            r#"[
  {
    "id": 1,
    "name": "Laptop Pro",
    "price": 2499,
    "description": "14-inch, 32GB",
    "reviews": [{ "stars": 5 }]
  },
  { "id": 2, "name": "Cable", "price": "N/A" }
]"#,
        )
        .unwrap();
        let store = JsonFileStore::new(path.clone());

        let desk = Item {
            id: 3,
            name: "Desk".to_string(),
            ..Item::default()
        };
        store.append(desk).await.unwrap();

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk[0]["description"], json!("14-inch, 32GB"));
        assert_eq!(on_disk[0]["reviews"], json!([{ "stars": 5 }]));
        assert_eq!(on_disk[0]["price"], json!(2499));
        assert!(on_disk[0]["price"].is_u64());
        assert_eq!(on_disk[1]["price"], json!("N/A"));
        assert_eq!(on_disk[2], json!({ "id": 3, "name": "Desk" }));
    }

    #[tokio::test]
    async fn test_replace_all_into_missing_dir_is_persistence_failure() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope").join("items.json"));

        let result = store.replace_all(&[]).await;
        assert!(matches!(result, Err(CatalogError::PersistenceFailure(_))));
    }

    #[tokio::test]
    async fn test_last_modified_tracks_file() {
        let (_dir, store) = seeded_store();
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        fs::File::options()
            .write(true)
            .open(store.path())
            .unwrap()
            .set_modified(stamp)
            .unwrap();

        assert_eq!(store.last_modified().await.unwrap(), stamp);
    }

    #[tokio::test]
    async fn test_last_modified_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));

        assert!(store.last_modified().await.is_err());
    }
}
