//! Navigationsziele der Sidebar.

use serde::{Deserialize, Serialize};

/// Ziel eines Sidebar-Eintrags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavTarget {
    /// Startseite mit Karte
    Home,
    /// Kategorie-Übersicht (hat Untermenü)
    Categories,
    /// Eigene Einreichungen
    Contributions,
    /// Gespeicherte Orte
    Saved,
    /// Einreichungsformular
    Submit,
    /// Projektinfo
    About,
}

impl NavTarget {
    /// Reihenfolge in der Sidebar.
    pub const ALL: [NavTarget; 6] = [
        NavTarget::Home,
        NavTarget::Categories,
        NavTarget::Contributions,
        NavTarget::Saved,
        NavTarget::Submit,
        NavTarget::About,
    ];

    /// Routen-Pfad.
    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::Categories => "/categories",
            NavTarget::Contributions => "/contributions",
            NavTarget::Saved => "/saved",
            NavTarget::Submit => "/submit",
            NavTarget::About => "/about",
        }
    }

    /// Anzeigetext.
    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Home => "Home / Map View",
            NavTarget::Categories => "Explore Categories",
            NavTarget::Contributions => "My Contributions",
            NavTarget::Saved => "Saved Places",
            NavTarget::Submit => "Submit a Location",
            NavTarget::About => "About / Project Info",
        }
    }

    /// Ob der Eintrag ein aufklappbares Untermenü statt eines Links ist.
    pub fn has_submenu(self) -> bool {
        matches!(self, NavTarget::Categories)
    }
}
