use super::super::effects::{FetchTicket, SubmitTicket};
use super::super::state::FieldEdit;
use crate::core::{Location, LocationCategory, SubmissionRecord};
use crate::map::PopupHandle;
use crate::shared::NavTarget;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Fetch für den aktuellen Filter ausgeben
    StartLocationFetch,
    /// Fetch-Ergebnis übernehmen (nur aktuelles Ticket)
    ApplyFetchResult {
        ticket: FetchTicket,
        result: Result<Vec<Location>, String>,
    },
    /// Kategorie-Filter setzen
    SetCategory { category: Option<LocationCategory> },
    /// Ort auswählen (Marker-Klick)
    SelectLocation { location: Location },
    /// Ort der aktuellen Liste per ID auswählen (Listen-Klick)
    SelectLocationById { location_id: String },
    /// Auswahl aufheben
    ClearSelection,
    /// Suchbegriff setzen
    SetSearchQuery { query: String },

    /// Karte ist geladen
    MarkMapLoaded,
    /// Karte terminal als fehlgeschlagen markieren
    FailMap { message: String },
    /// Popup wurde geöffnet
    ReopenPopup { popup: PopupHandle },
    /// Popup wurde geschlossen
    ClosePopup { popup: PopupHandle },
    /// Vorgemerkte Popup-Views freigeben
    FlushDeferredReleases,
    /// Karte entsorgen
    DisposeMap,

    /// Seite wechseln
    Navigate { target: NavTarget },
    ToggleSidebar,
    CloseSidebar,
    ToggleSidebarCollapsed,
    ToggleCategoriesMenu,

    /// Formularfeld setzen
    EditFormField { edit: FieldEdit },
    /// Formular prüfen und ggf. abschicken
    SubmitForm,
    /// Submit-Ergebnis übernehmen (nur aktuelles Ticket)
    ApplySubmitResult {
        ticket: SubmitTicket,
        result: Result<SubmissionRecord, String>,
    },
    /// Formular nach Erfolgsmeldung zurücksetzen
    ResetFormAfterSuccess { ticket: SubmitTicket },

    /// Fehler-Panel schließen
    DismissFatalError,
}
