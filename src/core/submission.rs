//! Oeffentliche Einreichungen neuer Orte (Tabelle `location_submissions`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LocationCategory;

/// Review-Status einer Einreichung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Wartet auf manuelle Pruefung
    #[default]
    Pending,
    /// Freigegeben
    Approved,
    /// Abgelehnt
    Rejected,
}

/// Eingabe einer Einreichung, wie sie der POST-Endpunkt als JSON erwartet (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionInput {
    pub name: String,
    #[serde(default)]
    pub category: LocationCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub submitted_by: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

/// Gespeicherte Einreichung (Zeile in `location_submissions`, snake_case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub name: String,
    pub category: LocationCategory,
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub submitted_by: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}

/// Insert-Zeile fuer den Store (ohne serverseitig vergebene Felder).
#[derive(Debug, Clone, Serialize)]
pub struct NewSubmissionRow<'a> {
    pub name: &'a str,
    pub category: LocationCategory,
    pub description: &'a str,
    pub website: Option<&'a str>,
    pub photo_url: Option<&'a str>,
    pub address: Option<&'a str>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub submitted_by: Option<&'a str>,
    pub contact_email: Option<&'a str>,
}

impl<'a> From<&'a SubmissionInput> for NewSubmissionRow<'a> {
    fn from(input: &'a SubmissionInput) -> Self {
        Self {
            name: &input.name,
            category: input.category,
            description: &input.description,
            website: input.website.as_deref(),
            photo_url: input.photo_url.as_deref(),
            address: input.address.as_deref(),
            latitude: input.latitude,
            longitude: input.longitude,
            submitted_by: input.submitted_by.as_deref(),
            contact_email: input.contact_email.as_deref(),
        }
    }
}

impl SubmissionRecord {
    /// Baut einen neuen `pending`-Datensatz aus einer Eingabe.
    pub fn from_input(id: String, input: &SubmissionInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name.clone(),
            category: input.category,
            description: input.description.clone(),
            website: input.website.clone(),
            photo_url: input.photo_url.clone(),
            address: input.address.clone(),
            latitude: input.latitude,
            longitude: input.longitude,
            submitted_by: input.submitted_by.clone(),
            contact_email: input.contact_email.clone(),
            status: ReviewStatus::Pending,
            created_at,
        }
    }
}
