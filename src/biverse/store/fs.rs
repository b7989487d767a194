use super::KeyValueStore;
use crate::error::{BiverseError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| {
                BiverseError::Persistence(format!(
                    "cannot create {}: {}",
                    self.root.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(BiverseError::Persistence(format!("invalid key: {:?}", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| {
            BiverseError::Persistence(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let target = self.key_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value)
            .and_then(|_| fs::rename(&tmp, &target))
            .map_err(|e| {
                let _ = fs::remove_file(&tmp);
                BiverseError::Persistence(format!("cannot write {}: {}", target.display(), e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_keys_that_could_escape_the_root() {
        let store = FileStore::new(PathBuf::from("/tmp/biverse-unused"));
        assert!(store.key_path("theme").is_ok());
        assert!(store.key_path("../theme").is_err());
        assert!(store.key_path("").is_err());
    }

    #[test]
    fn key_maps_to_file_named_after_it() {
        let store = FileStore::new(PathBuf::from("/data"));
        assert_eq!(
            store.key_path("favorites").unwrap(),
            PathBuf::from("/data/favorites")
        );
    }
}
