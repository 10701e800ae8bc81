//! Benutzerprofile und Sessions (Rollenpruefung des Admin-Bereichs).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Zeile der `profiles`-Tabelle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Rolle, z.B. `admin`
    #[serde(default)]
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Erstellt ein Profil mit optionaler Rolle.
    pub fn with_role(id: impl Into<String>, role: Option<&str>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            username: None,
            full_name: None,
            avatar_url: None,
            role: role.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    /// Prueft die Rolle gegen den erwarteten Rollennamen.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }
}

/// Aufgeloeste Session eines Access-Tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// ID des angemeldeten Benutzers
    pub user_id: String,
}
