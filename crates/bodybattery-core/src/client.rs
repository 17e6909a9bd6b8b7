//! HTTP client for the energy journal REST API.
//!
//! Four operations against one configured base resource URL:
//! `GET {base}` lists, `POST {base}` creates, `PUT {base}{pk}` updates,
//! `DELETE {base}{pk}` removes. Every call is asynchronous and a single
//! attempt -- no retry, no configured timeout -- and every failure surfaces
//! as a typed [`ApiError`].

use reqwest::{Client, Response};
use url::Url;

use crate::entry::{EnergyDraft, EnergyEntry, EntryPayload};
use crate::error::ApiError;

/// Default endpoint of the journal backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/energy-journal/";

/// Connection settings for [`JournalClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base resource URL. Must end with a trailing slash so that detail
    /// URLs (`{base}{pk}`) join onto the collection path.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Thin wrapper over the journal's REST operations.
pub struct JournalClient {
    http: Client,
    base_url: Url,
}

impl JournalClient {
    /// Build a client from explicit configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|source| ApiError::BaseUrl {
            url: config.base_url.clone(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    /// The configured base resource URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the record identified by `pk`.
    fn detail_url(&self, pk: i64) -> Result<Url, ApiError> {
        self.base_url
            .join(&pk.to_string())
            .map_err(|source| ApiError::BaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }

    /// Fetch the full collection, in whatever order the server returns it.
    pub async fn list_entries(&self) -> Result<Vec<EnergyEntry>, ApiError> {
        let url = self.base_url.clone();
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        let response = check_status(url.as_str(), response)?;
        response.json().await.map_err(|source| ApiError::Body {
            url: url.to_string(),
            source,
        })
    }

    /// Create a record; the server assigns `pk` and `date_added`.
    ///
    /// The backend answers 201 with an empty body, so success is
    /// confirmation only -- callers refresh the store to observe the
    /// stored record.
    pub async fn create_entry(&self, draft: &EnergyDraft) -> Result<(), ApiError> {
        let url = self.base_url.clone();
        let response = self
            .http
            .post(url.clone())
            .json(&EntryPayload::create(draft))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        check_status(url.as_str(), response)?;
        Ok(())
    }

    /// Replace the three ratings of the record identified by `pk`.
    /// `date_added` is untouched; the server owns it.
    pub async fn update_entry(&self, pk: i64, draft: &EnergyDraft) -> Result<(), ApiError> {
        let url = self.detail_url(pk)?;
        let response = self
            .http
            .put(url.clone())
            .json(&EntryPayload::update(pk, draft))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        check_status(url.as_str(), response)?;
        Ok(())
    }

    /// Remove the record identified by `pk`.
    pub async fn delete_entry(&self, pk: i64) -> Result<(), ApiError> {
        let url = self.detail_url(pk)?;
        let response = self
            .http
            .delete(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        check_status(url.as_str(), response)?;
        Ok(())
    }
}

fn check_status(url: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status,
        })
    }
}
