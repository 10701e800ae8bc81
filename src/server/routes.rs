use axum::{
    body::Bytes,
    extract::{Query, State},
    http::Uri,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::state::ServerState;
use crate::core::{Location, LocationCategory, SubmissionInput};
use crate::store::LocationQuery;

#[derive(Debug, Deserialize)]
pub struct LocationsParams {
    category: Option<String>,
}

/// `POST /api/submit`: eine Einreichung ohne serverseitige Prüfung speichern.
///
/// Der Body wird selbst dekodiert, damit ein kaputter Body dieselbe
/// 500-Antwort erzeugt wie jeder andere unerwartete Fehler.
pub async fn submit(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let input: SubmissionInput = serde_json::from_slice(&body).map_err(|err| {
        log::error!("Ungültiger Submit-Body: {err}");
        ApiError::Internal
    })?;

    let record = state.store.insert_submission(&input).await.map_err(|err| {
        log::error!("Einreichung konnte nicht gespeichert werden: {err}");
        ApiError::SubmitFailed
    })?;

    log::info!("Einreichung '{}' angenommen ({})", record.name, record.id);
    Ok(Json(json!({ "submission": record })))
}

/// `GET /api/locations[?category=...]`: Orte, neueste zuerst.
pub async fn list_locations(
    State(state): State<ServerState>,
    Query(params): Query<LocationsParams>,
) -> Result<Json<Vec<Location>>, ApiError> {
    let category = match params.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<LocationCategory>()?),
    };

    let locations = state
        .store
        .select_locations(&LocationQuery { category })
        .await
        .map_err(|err| {
            log::error!("Orte konnten nicht geladen werden: {err}");
            ApiError::LocationsUnavailable
        })?;
    Ok(Json(locations))
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn home() -> &'static str {
    "CultureMap KC"
}

pub async fn login() -> &'static str {
    "Login"
}

/// Admin-Bereich; erreichbar nur über das Access-Gate.
pub async fn admin_overview(uri: Uri) -> Json<Value> {
    Json(json!({ "area": "admin", "path": uri.path() }))
}
