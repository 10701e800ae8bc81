//! Hosted Record-Store über eine PostgREST-kompatible REST-API
//! (`/rest/v1/...`, `/auth/v1/user`).

use super::{LocationQuery, RecordStore, StoreError, StoreResult};
use crate::core::{Location, NewSubmissionRow, Profile, Session, SubmissionInput, SubmissionRecord};
use crate::shared::StoreOptions;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Antwort von `GET /auth/v1/user` (nur benötigte Felder).
#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
}

/// REST-Client mit anonymem API-Key.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl RestStore {
    /// Erstellt einen Client für `base_url` (ohne abschließenden Slash).
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Erstellt den Client aus den Store-Optionen.
    pub fn from_options(options: &StoreOptions) -> anyhow::Result<Self> {
        let url = options
            .url
            .as_deref()
            .context("Store-URL fehlt (SUPABASE_URL)")?;
        let key = options
            .anon_key
            .as_deref()
            .context("Store-Key fehlt (SUPABASE_ANON_KEY)")?;
        let store = Self::new(url, key, Duration::from_millis(options.timeout_ms))?;
        log::info!("REST-Store: {}", store.base_url);
        Ok(store)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Setzt `apikey` und `Authorization` mit dem anonymen Key.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Wandelt Fehlerstatus in `StoreError::Status` um.
    async fn check_status(response: Response) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn select_locations(&self, query: &LocationQuery) -> StoreResult<Vec<Location>> {
        let mut params = vec![
            ("select", "*".to_string()),
            ("order", "created_at.desc".to_string()),
        ];
        if let Some(category) = query.category {
            params.push(("category", format!("eq.{category}")));
        }

        let response = self
            .authorized(self.client.get(self.rest_url("locations")))
            .query(&params)
            .send()
            .await?;
        let locations = Self::check_status(response)
            .await?
            .json::<Vec<Location>>()
            .await?;
        log::debug!("{} Orte geladen ({:?})", locations.len(), query.category);
        Ok(locations)
    }

    async fn insert_submission(&self, input: &SubmissionInput) -> StoreResult<SubmissionRecord> {
        let response = self
            .authorized(self.client.post(self.rest_url("location_submissions")))
            .header("Prefer", "return=representation")
            .json(&NewSubmissionRow::from(input))
            .send()
            .await?;
        let rows = Self::check_status(response)
            .await?
            .json::<Vec<SubmissionRecord>>()
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("Insert lieferte keine Zeile zurück".to_string()))
    }

    async fn resolve_session(&self, access_token: &str) -> StoreResult<Option<Session>> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }
        let user = Self::check_status(response)
            .await?
            .json::<AuthUser>()
            .await?;
        Ok(Some(Session { user_id: user.id }))
    }

    async fn find_profile(&self, user_id: &str) -> StoreResult<Option<Profile>> {
        let response = self
            .authorized(self.client.get(self.rest_url("profiles")))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{user_id}"))])
            .send()
            .await?;
        let profiles = Self::check_status(response)
            .await?
            .json::<Vec<Profile>>()
            .await?;
        Ok(profiles.into_iter().next())
    }
}
