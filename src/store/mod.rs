//! Record-Store: Lesen der Orte, Einfügen von Einreichungen, Session- und
//! Profil-Lookup für den Admin-Bereich.

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use crate::core::{
    Location, LocationCategory, Profile, Session, SubmissionInput, SubmissionRecord,
};
use async_trait::async_trait;

/// Filter für `select_locations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocationQuery {
    /// `None` = alle Kategorien
    pub category: Option<LocationCategory>,
}

impl LocationQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(category: LocationCategory) -> Self {
        Self {
            category: Some(category),
        }
    }

    /// Prüft, ob ein Ort den Filter erfüllt.
    pub fn matches(&self, location: &Location) -> bool {
        self.category.is_none_or(|c| c == location.category)
    }
}

/// Fehler einer Store-Operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Netzwerk-/Verbindungsfehler oder Timeout
    #[error("Store nicht erreichbar: {0}")]
    Unavailable(String),
    /// Store hat mit einem Fehlerstatus geantwortet
    #[error("Store-Antwort {status}: {message}")]
    Status { status: u16, message: String },
    /// Antwort ließ sich nicht dekodieren
    #[error("Ungültige Store-Antwort: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            StoreError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            StoreError::Unavailable(err.to_string())
        }
    }
}

/// Ergebnis-Alias für Store-Aufrufe.
pub type StoreResult<T> = Result<T, StoreError>;

/// Generischer Record-Store hinter Directory, Formular und Access-Gate.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Orte (optional nach Kategorie gefiltert), neueste zuerst.
    async fn select_locations(&self, query: &LocationQuery) -> StoreResult<Vec<Location>>;

    /// Legt eine neue Einreichung mit Status `pending` an.
    async fn insert_submission(&self, input: &SubmissionInput) -> StoreResult<SubmissionRecord>;

    /// Löst ein Access-Token in eine Session auf (`None` = ungültig).
    async fn resolve_session(&self, access_token: &str) -> StoreResult<Option<Session>>;

    /// Lädt das Profil eines Benutzers.
    async fn find_profile(&self, user_id: &str) -> StoreResult<Option<Profile>>;
}
