//! # Filesystem-backed token store
//!
//! [`FileStore`] keeps the session token in a plain file so it survives app
//! restarts on desktop. Each key is one file directly under the base directory:
//!
//! ```text
//! <base_dir>/
//! └── token          # the raw token string
//! ```
//!
//! [`FileStore::default_location`] resolves the base through [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/mynotes/` |
//! | Linux | `~/.local/share/mynotes/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\mynotes\` |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::StoreError;
use crate::session::TokenStore;

const APP_DIR: &str = "mynotes";

/// Filesystem-backed TokenStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted in the platform data directory (current directory as a last resort).
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.value_path(key)) {
            Ok(content) => Some(content.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.value_path(key).display(), e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.value_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
