//! File Blob Store - 本地目录对象存储
//!
//! 实现 BlobStorePort，开发环境下替代远程对象存储。
//! 文件通过 HTTP 服务的 /blobs 静态路由公开；token 被忽略。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{BlobInfo, BlobStoreError, BlobStorePort, PutOptions};

/// 本地目录对象存储
pub struct FileBlobStore {
    /// 存储根目录
    base_dir: PathBuf,
    /// 公开访问前缀，例如 http://localhost:3000/blobs
    public_base_url: String,
}

impl FileBlobStore {
    /// 创建新的文件存储
    pub async fn new(
        base_dir: impl AsRef<Path>,
        public_base_url: impl Into<String>,
    ) -> Result<Self, BlobStoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| BlobStoreError::Io(e.to_string()))?;

        Ok(Self {
            base_dir,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn url_for(&self, pathname: &str) -> String {
        format!("{}/{}", self.public_base_url, pathname)
    }

    /// URL -> 本地文件路径；不属于本存储的 URL 返回 None
    fn path_for_url(&self, url: &str) -> Option<PathBuf> {
        let pathname = url
            .strip_prefix(&self.public_base_url)?
            .strip_prefix('/')?;
        valid_pathname(pathname).then(|| self.base_dir.join(pathname))
    }
}

/// 只允许单层文件名
fn valid_pathname(pathname: &str) -> bool {
    !pathname.is_empty()
        && !pathname.contains('/')
        && !pathname.contains('\\')
        && pathname != "."
        && pathname != ".."
}

#[async_trait]
impl BlobStorePort for FileBlobStore {
    async fn list(&self, _token: &str) -> Result<Vec<BlobInfo>, BlobStoreError> {
        let mut blobs = Vec::new();
        let mut entries = fs::read_dir(&self.base_dir)
            .await
            .map_err(|e| BlobStoreError::Io(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| BlobStoreError::Io(e.to_string()))?
        {
            let metadata = entry
                .metadata()
                .await
                .map_err(|e| BlobStoreError::Io(e.to_string()))?;
            if !metadata.is_file() {
                continue;
            }
            let pathname = entry.file_name().to_string_lossy().to_string();
            blobs.push(BlobInfo {
                url: self.url_for(&pathname),
                pathname,
                size: metadata.len(),
                uploaded_at: metadata.modified().ok().map(DateTime::<Utc>::from),
            });
        }

        blobs.sort_by(|a, b| a.pathname.cmp(&b.pathname));
        Ok(blobs)
    }

    async fn delete(&self, _token: &str, urls: &[String]) -> Result<(), BlobStoreError> {
        for url in urls {
            let Some(path) = self.path_for_url(url) else {
                tracing::warn!(url = %url, "Skipping blob outside local store");
                continue;
            };
            if path.exists() {
                fs::remove_file(&path)
                    .await
                    .map_err(|e| BlobStoreError::Io(e.to_string()))?;
                tracing::debug!(path = %path.display(), "Deleted blob");
            }
        }
        Ok(())
    }

    async fn put(
        &self,
        _token: &str,
        pathname: &str,
        data: Vec<u8>,
        _options: PutOptions,
    ) -> Result<BlobInfo, BlobStoreError> {
        if !valid_pathname(pathname) {
            return Err(BlobStoreError::Io(format!("Invalid pathname: {}", pathname)));
        }

        let size = data.len() as u64;
        fs::write(self.base_dir.join(pathname), data)
            .await
            .map_err(|e| BlobStoreError::Io(e.to_string()))?;

        tracing::debug!(pathname = %pathname, size = size, "Saved blob");

        Ok(BlobInfo {
            url: self.url_for(pathname),
            pathname: pathname.to_string(),
            size,
            uploaded_at: Some(Utc::now()),
        })
    }
}
