//! Vercel Blob Client - 调用 Vercel Blob REST API
//!
//! 实现 BlobStorePort
//!
//! 外部 API (Authorization: Bearer <token>):
//! GET  {base_url}?limit=&cursor=      -> {"blobs": [...], "cursor": "...", "hasMore": bool}
//! POST {base_url}/delete              <- {"urls": [...]}
//! PUT  {base_url}/{pathname}          <- 原始字节, 返回 {"url": "...", "pathname": "..."}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{BlobInfo, BlobStoreError, BlobStorePort, PutOptions};

const API_VERSION: &str = "7";
const LIST_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListedBlob {
    url: String,
    pathname: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPage {
    blobs: Vec<ListedBlob>,
    #[serde(default)]
    cursor: Option<String>,
    #[serde(default)]
    has_more: bool,
}

#[derive(Debug, Serialize)]
struct DeleteBody<'a> {
    urls: &'a [String],
}

#[derive(Debug, Deserialize)]
struct PutResult {
    url: String,
    pathname: String,
}

impl From<ListedBlob> for BlobInfo {
    fn from(blob: ListedBlob) -> Self {
        Self {
            url: blob.url,
            pathname: blob.pathname,
            size: blob.size,
            uploaded_at: blob.uploaded_at,
        }
    }
}

/// Vercel Blob 客户端配置
#[derive(Debug, Clone)]
pub struct VercelBlobConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for VercelBlobConfig {
    fn default() -> Self {
        Self {
            base_url: "https://blob.vercel-storage.com".to_string(),
            timeout_secs: 60,
        }
    }
}

pub struct VercelBlobStore {
    client: Client,
    base_url: String,
}

impl VercelBlobStore {
    pub fn new(config: VercelBlobConfig) -> Result<Self, BlobStoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BlobStoreError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn authorized(&self, builder: reqwest::RequestBuilder, token: &str) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(token)
            .header("x-api-version", API_VERSION)
    }
}

async fn ensure_success(response: Response) -> Result<Response, BlobStoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(BlobStoreError::Upstream {
        status: status.as_u16(),
        body,
    })
}

fn transport(e: reqwest::Error) -> BlobStoreError {
    BlobStoreError::Transport(e.to_string())
}

#[async_trait]
impl BlobStorePort for VercelBlobStore {
    async fn list(&self, token: &str) -> Result<Vec<BlobInfo>, BlobStoreError> {
        let mut blobs = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut query = vec![("limit", LIST_PAGE_SIZE.to_string())];
            if let Some(c) = &cursor {
                query.push(("cursor", c.clone()));
            }

            let response = self
                .authorized(self.client.get(&self.base_url), token)
                .query(&query)
                .send()
                .await
                .map_err(transport)?;

            let page: ListPage = ensure_success(response)
                .await?
                .json()
                .await
                .map_err(|e| BlobStoreError::InvalidResponse(e.to_string()))?;

            blobs.extend(page.blobs.into_iter().map(BlobInfo::from));

            match (page.has_more, page.cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        tracing::debug!(count = blobs.len(), "Listed blobs");
        Ok(blobs)
    }

    async fn delete(&self, token: &str, urls: &[String]) -> Result<(), BlobStoreError> {
        let response = self
            .authorized(self.client.post(format!("{}/delete", self.base_url)), token)
            .json(&DeleteBody { urls })
            .send()
            .await
            .map_err(transport)?;

        ensure_success(response).await?;
        tracing::debug!(count = urls.len(), "Deleted blobs");
        Ok(())
    }

    async fn put(
        &self,
        token: &str,
        pathname: &str,
        data: Vec<u8>,
        options: PutOptions,
    ) -> Result<BlobInfo, BlobStoreError> {
        let size = data.len() as u64;
        let response = self
            .authorized(
                self.client.put(format!("{}/{}", self.base_url, pathname)),
                token,
            )
            .header("x-content-type", &options.content_type)
            .header("x-vercel-blob-access", options.access.as_str())
            .header(header::CONTENT_TYPE, &options.content_type)
            .body(data)
            .send()
            .await
            .map_err(transport)?;

        let result: PutResult = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| BlobStoreError::InvalidResponse(e.to_string()))?;

        tracing::info!(url = %result.url, size = size, "Blob stored");

        Ok(BlobInfo {
            url: result.url,
            pathname: result.pathname,
            size,
            uploaded_at: Some(Utc::now()),
        })
    }
}
