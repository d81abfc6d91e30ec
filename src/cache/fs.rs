//! Filesystem-backed cache store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{CacheEntry, CacheStore};
use crate::error::{Error, Result};

/// Cache store keeping one JSON entry file per key in a directory.
///
/// Entry files are named `<key>.json` and hold the serialized
/// [`CacheEntry`] envelope. Writes go to a temporary file first and
/// are renamed into place, so readers only ever see complete entries.
pub struct FsCacheStore {
    dir: PathBuf,
}

impl FsCacheStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory holding the entry files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CacheStore for FsCacheStore {
    fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        let path = self.entry_path(key);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::Storage(format!(
                    "reading {}: {e}",
                    path.display()
                )))
            }
        };
        let entry = serde_json::from_str(&data)
            .map_err(|e| Error::Storage(format!("decoding {}: {e}", path.display())))?;
        Ok(Some(entry))
    }

    fn set(&self, key: &str, content: &str) -> Result<()> {
        let entry = CacheEntry::new(content);
        let data = serde_json::to_string(&entry)?;

        let path = self.entry_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, data)
            .map_err(|e| Error::Storage(format!("writing {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path)
            .map_err(|e| Error::Storage(format!("renaming {}: {e}", path.display())))?;
        Ok(())
    }
}
