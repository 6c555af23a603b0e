//! HTTP bindings for the entry endpoints.

use std::sync::Arc;

use serde::Serialize;

use gratitude_core::{Entry, EntryId};

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// The four entry operations, as seen from the client.
///
/// [`HttpEntriesApi`] is the real implementation; tests substitute fakes.
#[async_trait::async_trait]
pub trait EntriesApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Entry>, ClientError>;
    async fn create(&self, text: &str) -> Result<Entry, ClientError>;
    async fn update(&self, id: EntryId, text: &str) -> Result<Entry, ClientError>;
    async fn delete(&self, id: EntryId) -> Result<(), ClientError>;
}

#[async_trait::async_trait]
impl<A> EntriesApi for Arc<A>
where
    A: EntriesApi + ?Sized,
{
    async fn list(&self) -> Result<Vec<Entry>, ClientError> {
        (**self).list().await
    }

    async fn create(&self, text: &str) -> Result<Entry, ClientError> {
        (**self).create(text).await
    }

    async fn update(&self, id: EntryId, text: &str) -> Result<Entry, ClientError> {
        (**self).update(id, text).await
    }

    async fn delete(&self, id: EntryId) -> Result<(), ClientError> {
        (**self).delete(id).await
    }
}

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

/// Client for the entry API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEntriesApi {
    api_url: String,
    http: reqwest::Client,
}

impl HttpEntriesApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL from `GRATITUDE_API_URL`, or [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        let api_url = std::env::var("GRATITUDE_API_URL").unwrap_or_else(|_| {
            tracing::info!("GRATITUDE_API_URL not set, using default: {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        Self::new(api_url)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn entries_url(&self) -> String {
        format!("{}/entries", self.api_url)
    }

    fn entry_url(&self, id: EntryId) -> String {
        format!("{}/entries/{}", self.api_url, id)
    }
}

/// Map a response to `T`, turning any non-2xx status into [`ClientError::Api`].
async fn read_json<T>(resp: reqwest::Response) -> Result<T, ClientError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = check_status(resp).await?;
    resp.json().await.map_err(|e| ClientError::Parse(e.to_string()))
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    Err(ClientError::Api(status, resp.text().await.unwrap_or_default()))
}

fn network(e: reqwest::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

#[async_trait::async_trait]
impl EntriesApi for HttpEntriesApi {
    async fn list(&self) -> Result<Vec<Entry>, ClientError> {
        let resp = self
            .http
            .get(self.entries_url())
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }

    async fn create(&self, text: &str) -> Result<Entry, ClientError> {
        let resp = self
            .http
            .post(self.entries_url())
            .json(&TextBody { text })
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }

    async fn update(&self, id: EntryId, text: &str) -> Result<Entry, ClientError> {
        let resp = self
            .http
            .put(self.entry_url(id))
            .json(&TextBody { text })
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }

    async fn delete(&self, id: EntryId) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.entry_url(id))
            .send()
            .await
            .map_err(network)?;
        check_status(resp).await?;
        Ok(())
    }
}
