use crate::core::Storage;
use crate::utils::error::{AnnotateError, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, name: &str) -> bool {
        tokio::fs::try_exists(self.full_path(name))
            .await
            .unwrap_or(false)
    }

    async fn list_files(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.base_path)
            .await
            .map_err(|e| AnnotateError::file_access(self.base_path.display().to_string(), e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            // follows symlinks, unlike DirEntry::file_type; dangling links are skipped
            let is_file = tokio::fs::metadata(entry.path())
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!("Skipping non UTF-8 filename {:?}", raw),
            }
        }
        Ok(names)
    }

    async fn read_to_string(&self, name: &str) -> Result<String> {
        tokio::fs::read_to_string(self.full_path(name))
            .await
            .map_err(|e| AnnotateError::file_access(name, e))
    }

    /// Writes to a hidden sibling file and renames it over the target, so a
    /// failed write leaves the original page intact. Symlinked pages are
    /// written at the file they point to, and the page's permissions carry over.
    async fn write_file(&self, name: &str, data: &str) -> Result<()> {
        let target = match tokio::fs::canonicalize(self.full_path(name)).await {
            Ok(resolved) => resolved,
            Err(_) => self.full_path(name),
        };
        let file_name = target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name)
            .to_string();
        let tmp = target.with_file_name(format!(".{}.tmp", file_name));
        let permissions = tokio::fs::metadata(&target)
            .await
            .ok()
            .map(|meta| meta.permissions());

        let written = async {
            tokio::fs::write(&tmp, data).await?;
            if let Some(permissions) = permissions {
                tokio::fs::set_permissions(&tmp, permissions).await?;
            }
            tokio::fs::rename(&tmp, &target).await
        }
        .await;

        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(AnnotateError::file_access(name, e));
        }
        Ok(())
    }
}
