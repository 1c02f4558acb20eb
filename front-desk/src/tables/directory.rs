//! Table directory sources
//!
//! The store never fetches tables itself; it asks a [`TableDirectory`].
//! Sources may be slow or fail, and the store copes with both.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::error::ApiResponse;
use shared::models::Table;
use tracing::debug;

use super::error::{DirectoryError, DirectoryResult};
use crate::core::Config;

/// Supplier of the table directory
#[async_trait]
pub trait TableDirectory: Send + Sync {
    /// Fetch the full, ordered table list
    async fn load_tables(&self) -> DirectoryResult<Vec<Table>>;
}

/// Accepted payload shapes: a bare array or the API response envelope
#[derive(Deserialize)]
#[serde(untagged)]
enum TablesPayload {
    Bare(Vec<Table>),
    Envelope(ApiResponse<Vec<Table>>),
}

/// Parse a directory payload
pub fn parse_tables(body: &str) -> DirectoryResult<Vec<Table>> {
    let payload: TablesPayload = serde_json::from_str(body)?;
    match payload {
        TablesPayload::Bare(tables) => Ok(tables),
        TablesPayload::Envelope(envelope) => {
            if !envelope.is_success() {
                return Err(DirectoryError::Api {
                    code: envelope.code.unwrap_or_default(),
                    message: envelope.message,
                });
            }
            envelope
                .data
                .ok_or_else(|| DirectoryError::InvalidResponse("Missing table data".to_string()))
        }
    }
}

/// HTTP directory source
#[derive(Debug, Clone)]
pub struct HttpTableDirectory {
    client: Client,
    url: String,
}

impl HttpTableDirectory {
    /// Create a directory source for `{base_url}/{path}`
    pub fn new(base_url: &str, path: &str, timeout: Duration) -> DirectoryResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Self { client, url })
    }

    /// Create from configuration
    pub fn from_config(config: &Config) -> DirectoryResult<Self> {
        Self::new(
            &config.tables_api_url,
            &config.tables_api_path,
            config.request_timeout(),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TableDirectory for HttpTableDirectory {
    async fn load_tables(&self) -> DirectoryResult<Vec<Table>> {
        debug!(url = %self.url, "Fetching table directory");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_tables(&body)
    }
}

/// Directory read from a JSON file on every load
#[derive(Debug, Clone)]
pub struct JsonFileTableDirectory {
    path: PathBuf,
}

impl JsonFileTableDirectory {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl TableDirectory for JsonFileTableDirectory {
    async fn load_tables(&self) -> DirectoryResult<Vec<Table>> {
        debug!(path = %self.path.display(), "Reading table directory file");
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_tables(&body)
    }
}

/// Fixed in-memory directory
#[derive(Debug, Clone, Default)]
pub struct StaticTableDirectory {
    tables: Vec<Table>,
}

impl StaticTableDirectory {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl TableDirectory for StaticTableDirectory {
    async fn load_tables(&self) -> DirectoryResult<Vec<Table>> {
        Ok(self.tables.clone())
    }
}

/// Build the configured directory source
///
/// `TABLES_FILE` wins over the HTTP endpoint when both are set.
pub fn directory_from_config(config: &Config) -> DirectoryResult<Arc<dyn TableDirectory>> {
    match &config.tables_file {
        Some(path) => Ok(Arc::new(JsonFileTableDirectory::new(path))),
        None => Ok(Arc::new(HttpTableDirectory::from_config(config)?)),
    }
}
