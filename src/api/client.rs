//! CRUD client for the `film_collection` table.
//!
//! Thin wrappers over the backend's PostgREST-style REST dialect: rows
//! are fetched and written as JSON with enum columns display-string-typed
//! on the wire. No retries - a failed request surfaces as an error.

use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, warn};

use super::config::BackendConfig;
use crate::error::{Error, Result};
use crate::types::FilmRoll;

const FILM_TABLE: &str = "film_collection";

/// Asks PostgREST for a bare object instead of a one-element array.
const ACCEPT_SINGLE: &str = "application/vnd.pgrst.object+json";

pub struct FilmCollectionClient {
    client: Client,
    config: BackendConfig,
}

impl FilmCollectionClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn table_url(&self) -> String {
        self.config.table_url(FILM_TABLE)
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    /// Map non-2xx responses to [`Error::Api`], otherwise return the body.
    async fn read_body(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), %body, "backend request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// Fetch all rolls, typed.
    pub async fn list(&self) -> Result<Vec<FilmRoll>> {
        let url = format!("{}?select=*&order=id.asc", self.table_url());
        debug!(%url, "listing film collection");
        let response = self.authed(self.client.get(&url)).send().await?;
        let body = Self::read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch all rolls as raw rows, for callers that feed the dynamic
    /// enum converter instead of the typed model.
    pub async fn list_raw(&self) -> Result<Vec<Value>> {
        let url = format!("{}?select=*&order=id.asc", self.table_url());
        debug!(%url, "listing film collection (raw)");
        let response = self.authed(self.client.get(&url)).send().await?;
        let body = Self::read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Insert a new roll and return the stored row. Server-assigned
    /// columns (`id`, unset `created_at`) are stripped from the payload.
    pub async fn create(&self, roll: &FilmRoll) -> Result<FilmRoll> {
        let payload = insert_payload(roll)?;
        debug!(name = %roll.name, "creating film roll");
        let response = self
            .authed(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .header(reqwest::header::ACCEPT, ACCEPT_SINGLE)
            .json(&payload)
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Apply a partial update to one roll and return the stored row.
    pub async fn update(&self, id: i64, patch: &Value) -> Result<FilmRoll> {
        let url = format!("{}?id=eq.{}", self.table_url(), id);
        debug!(id, "updating film roll");
        let response = self
            .authed(self.client.patch(&url))
            .header("Prefer", "return=representation")
            .header(reqwest::header::ACCEPT, ACCEPT_SINGLE)
            .json(patch)
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Delete one roll.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let url = format!("{}?id=eq.{}", self.table_url(), id);
        debug!(id, "deleting film roll");
        let response = self.authed(self.client.delete(&url)).send().await?;
        Self::read_body(response).await?;
        Ok(())
    }
}

/// Serialize a roll for insertion, dropping server-assigned columns.
fn insert_payload(roll: &FilmRoll) -> Result<Value> {
    let mut value = serde_json::to_value(roll)?;
    if let Some(fields) = value.as_object_mut() {
        fields.remove("id");
        if fields.get("created_at").is_some_and(Value::is_null) {
            fields.remove("created_at");
        }
    }
    Ok(value)
}
