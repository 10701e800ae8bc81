//! Kultureller Ort (Location) und Kategorie-Enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kategorie eines Ortes. Die Wire-Werte sind stabil (UI, Filter, Speicherung).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationCategory {
    /// Museum
    Museum,
    /// Galerie
    Gallery,
    /// Musik-Location
    MusicVenue,
    /// Wandbild
    Mural,
    /// Historischer Ort
    HistoricPlace,
    /// Theater
    Theater,
    /// Sonstiges (auch Fallback fuer unbekannte Wire-Werte)
    #[default]
    #[serde(other)]
    Other,
}

impl LocationCategory {
    /// Alle Kategorien in Anzeige-Reihenfolge des Filters.
    pub const ALL: [LocationCategory; 7] = [
        LocationCategory::Mural,
        LocationCategory::MusicVenue,
        LocationCategory::Museum,
        LocationCategory::HistoricPlace,
        LocationCategory::Gallery,
        LocationCategory::Theater,
        LocationCategory::Other,
    ];

    /// Stabiler Wire-Wert (`music_venue`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            LocationCategory::Museum => "museum",
            LocationCategory::Gallery => "gallery",
            LocationCategory::MusicVenue => "music_venue",
            LocationCategory::Mural => "mural",
            LocationCategory::HistoricPlace => "historic_place",
            LocationCategory::Theater => "theater",
            LocationCategory::Other => "other",
        }
    }

    /// Einzahl-Label (Formular, Popup).
    pub fn label(self) -> &'static str {
        match self {
            LocationCategory::Museum => "Museum",
            LocationCategory::Gallery => "Gallery",
            LocationCategory::MusicVenue => "Music Venue",
            LocationCategory::Mural => "Mural",
            LocationCategory::HistoricPlace => "Historic Place",
            LocationCategory::Theater => "Theater",
            LocationCategory::Other => "Other",
        }
    }

    /// Mehrzahl-Label (Kategorie-Filter, Sidebar).
    pub fn plural_label(self) -> &'static str {
        match self {
            LocationCategory::Museum => "Museums",
            LocationCategory::Gallery => "Galleries",
            LocationCategory::MusicVenue => "Music Venues",
            LocationCategory::Mural => "Murals",
            LocationCategory::HistoricPlace => "Historic Places",
            LocationCategory::Theater => "Theaters",
            LocationCategory::Other => "Other",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fehler beim Parsen eines Kategorie-Strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unbekannte Kategorie: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for LocationCategory {
    type Err = UnknownCategory;

    /// Striktes Parsen (Query-Parameter); unbekannte Werte sind hier ein Fehler.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocationCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Geografische Position in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    /// Laengengrad
    pub lng: f64,
    /// Breitengrad
    pub lat: f64,
}

/// Ein kultureller Ort aus der `locations`-Tabelle.
///
/// Unveraenderlich nach dem Laden; bei jedem Re-Fetch wird die komplette Liste ersetzt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Stabile, eindeutige ID
    pub id: String,
    /// Anzeigename
    pub title: String,
    /// Beschreibung (darf leer sein)
    #[serde(default)]
    pub description: String,
    /// Kategorie
    #[serde(default)]
    pub category: LocationCategory,
    /// Breitengrad (None = nicht platzierbar)
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Laengengrad (None = nicht platzierbar)
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Eigenes Marker-Icon (ersetzt den farbigen Punkt)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_icon_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// Erstellt einen Ort mit Pflichtfeldern; optionale Felder bleiben leer.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: LocationCategory,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category,
            latitude,
            longitude,
            address: None,
            website: None,
            phone: None,
            custom_icon_url: None,
            category_icon_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Position fuer die Karte, falls beide Koordinaten gueltig sind.
    ///
    /// Fehlende, nicht-endliche oder ausserhalb des Wertebereichs liegende
    /// Koordinaten machen den Ort nicht platzierbar (kein Fehler).
    pub fn position(&self) -> Option<LngLat> {
        let lat = self.latitude?;
        let lng = self.longitude?;
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        valid.then_some(LngLat { lng, lat })
    }

    /// Gibt zurueck, ob der Ort einen Marker bekommt.
    pub fn is_placeable(&self) -> bool {
        self.position().is_some()
    }

    /// Case-insensitiver Treffer auf Titel, Adresse oder Beschreibung.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .address
                .as_deref()
                .is_some_and(|a| a.to_lowercase().contains(&needle))
    }
}
