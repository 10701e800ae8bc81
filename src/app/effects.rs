//! Seiteneffekte, die der Controller anfordert und die Runtime ausführt.
//!
//! Der Controller bleibt synchron; Store-Aufrufe und Timer laufen in der
//! `DirectoryRuntime` und melden ihr Ergebnis als Intent mit Ticket zurück.

use crate::core::SubmissionInput;
use crate::store::LocationQuery;
use std::time::Duration;

/// Kennung eines ausgegebenen Fetches (monoton steigend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchTicket(pub u64);

/// Kennung eines Submit-Vorgangs (monoton steigend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmitTicket(pub u64);

/// Angeforderter Seiteneffekt.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Orte laden → `AppIntent::LocationsLoaded`
    FetchLocations {
        ticket: FetchTicket,
        query: LocationQuery,
    },
    /// Einreichung speichern → `AppIntent::SubmissionCompleted`
    SubmitLocation {
        ticket: SubmitTicket,
        input: SubmissionInput,
    },
    /// Erfolgsmeldung nach Ablauf zurücksetzen → `AppIntent::SuccessNoticeElapsed`
    ScheduleFormReset {
        ticket: SubmitTicket,
        delay: Duration,
    },
}
