use crate::error::AppError;
use crate::storage::TokenStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Token store persisted as a flat JSON object
///
/// The whole map is cached in memory and the file is rewritten after every
/// change, so tokens survive a restart of the process. Each rewrite goes to a
/// sibling temporary file that is renamed over the old one; on unix the file is
/// readable by its owner only.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl FileTokenStore {
    /// Opens the store at `path`
    ///
    /// A missing file yields an empty store; the file is created on the first write.
    /// A file that is not a JSON object of strings is treated as empty and will be
    /// overwritten.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let values = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => match serde_json::from_str::<HashMap<String, String>>(&contents) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring unreadable token file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!("Opened token file {} ({} keys)", path.display(), values.len());

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, values: &HashMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(values)?;

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, contents).await?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600)).await?;
        }
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        debug!("Saved token file {}", self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        self.persist(&values).await
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut values = self.values.write().await;
        if values.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&values).await
    }

    async fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), AppError> {
        let mut values = self.values.write().await;
        for (key, value) in entries {
            values.insert(key.to_string(), value.to_string());
        }
        self.persist(&values).await
    }
}
