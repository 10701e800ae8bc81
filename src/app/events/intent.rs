use super::super::effects::{FetchTicket, SubmitTicket};
use super::super::state::FieldEdit;
use crate::core::{Location, LocationCategory, SubmissionRecord};
use crate::map::{MarkerHandle, PopupHandle, SurfaceEvent};
use crate::shared::NavTarget;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Verzeichnis-Ansicht wurde eingeblendet (erster Fetch)
    DirectoryMounted,
    /// Kategorie-Filter gewählt (`None` = "All Categories")
    CategorySelected { category: Option<LocationCategory> },
    /// Ergebnis eines Fetches (Fehler als Text)
    LocationsLoaded {
        ticket: FetchTicket,
        result: Result<Vec<Location>, String>,
    },
    /// Listeneintrag angeklickt
    LocationListItemClicked { location_id: String },
    /// Suche abgeschickt
    SearchSubmitted { query: String },
    /// Suche geleert
    SearchCleared,

    /// Karte meldet `load`
    MapLoaded,
    /// Karte meldet einen Fehler oder konnte nicht initialisiert werden
    MapFailed { message: String },
    /// Marker angeklickt
    MarkerClicked { marker: MarkerHandle },
    /// Popup geöffnet
    PopupOpened { popup: PopupHandle },
    /// Popup geschlossen
    PopupClosed { popup: PopupHandle },
    /// Nächster Turn: vorgemerkte Popup-Views freigeben
    DeferredReleaseDue,
    /// Karten-Komponente wird entfernt
    MapDisposed,

    /// Navigation zu einer Seite
    NavigateRequested { target: NavTarget },
    /// Sidebar ein-/ausblenden (Menü-Button)
    SidebarToggled,
    /// Sidebar schließen (Overlay / X)
    SidebarClosed,
    /// Sidebar ein-/ausklappen
    SidebarCollapseToggled,
    /// Kategorie-Untermenü auf-/zuklappen
    SidebarCategoriesToggled,
    /// Kategorie im Sidebar-Untermenü angeklickt
    SidebarCategoryClicked { category: LocationCategory },

    /// Formularfeld geändert
    SubmissionFieldEdited { edit: FieldEdit },
    /// Formular abschicken
    SubmitRequested,
    /// Ergebnis eines Submits
    SubmissionCompleted {
        ticket: SubmitTicket,
        result: Result<SubmissionRecord, String>,
    },
    /// Anzeigedauer der Erfolgsmeldung abgelaufen
    SuccessNoticeElapsed { ticket: SubmitTicket },

    /// Fehler-Panel bestätigt ("Try again")
    FatalErrorDismissed,
}

impl From<SurfaceEvent> for AppIntent {
    fn from(event: SurfaceEvent) -> Self {
        match event {
            SurfaceEvent::Loaded => AppIntent::MapLoaded,
            SurfaceEvent::Failed { message } => AppIntent::MapFailed { message },
            SurfaceEvent::MarkerClicked { marker } => AppIntent::MarkerClicked { marker },
            SurfaceEvent::PopupOpened { popup } => AppIntent::PopupOpened { popup },
            SurfaceEvent::PopupClosed { popup } => AppIntent::PopupClosed { popup },
        }
    }
}
