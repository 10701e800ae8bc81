//! Directory-Szene als expliziter Übergabevertrag zwischen App und UI-Host.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie nur anzeigt.

use super::form::FormField;
use super::navigation::NavTarget;
use crate::core::LocationCategory;

/// Zustand des Karten-Panels.
#[derive(Debug, Clone, PartialEq)]
pub enum MapPanel {
    /// Karte lädt noch ("Loading map...")
    Loading,
    /// Terminaler Fehler mit statischer Meldung
    Failed { message: String },
    /// Karte bereit
    Ready { marker_count: usize },
    /// Karte wurde entsorgt
    Closed,
}

/// Ein Eintrag der Ortsliste.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub address: Option<String>,
    /// Hervorhebung der aktuellen Selektion
    pub selected: bool,
    /// Ob der Ort einen Marker auf der Karte hat
    pub on_map: bool,
}

/// Zustand des Listen-Panels.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPanel {
    /// Platzhalter während ein Fetch läuft
    Loading,
    /// Einzelne Fehlermeldung, keine Teildaten
    Error { message: String },
    /// "No locations found"
    Empty,
    Items(Vec<ListItem>),
}

/// Button des Kategorie-Filters (`None` = "All Categories").
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryButton {
    pub category: Option<LocationCategory>,
    pub label: &'static str,
    pub active: bool,
}

/// Eintrag der Sidebar-Navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub target: NavTarget,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Read-only Daten für einen Frame der Verzeichnis-Ansicht.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryScene {
    pub map: MapPanel,
    pub list: ListPanel,
    pub categories: Vec<CategoryButton>,
    pub navigation: Vec<NavEntry>,
    /// Kategorien im aufgeklappten Sidebar-Untermenü (leer wenn zu)
    pub sidebar_categories: Vec<CategoryButton>,
    pub sidebar_open: bool,
    pub sidebar_collapsed: bool,
    pub search_query: String,
    /// Fallback-Panel für unerwartete Fehler ("Something went wrong")
    pub fatal_error: Option<String>,
}

/// Read-only Daten für das Einreichungsformular.
#[derive(Debug, Clone, PartialEq)]
pub struct FormScene {
    /// Zeichenzähler der Beschreibung, z.B. "12/300"
    pub description_counter: String,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub success_notice: Option<&'static str>,
    pub error_notice: Option<&'static str>,
    pub field_errors: Vec<(FormField, String)>,
    pub category_options: Vec<(LocationCategory, &'static str)>,
}

impl DirectoryScene {
    /// Gibt zurück, ob die Liste Einträge zeigt.
    pub fn has_items(&self) -> bool {
        matches!(&self.list, ListPanel::Items(items) if !items.is_empty())
    }
}
