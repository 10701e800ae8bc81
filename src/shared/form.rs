//! Felder und Meldungstexte des Einreichungsformulars.

/// Ein Eingabefeld des Formulars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Category,
    Description,
    Website,
    PhotoUrl,
    Address,
    Latitude,
    Longitude,
    SubmittedBy,
    ContactEmail,
    Consent,
}

pub const MSG_NAME_REQUIRED: &str = "Location name is required";
pub const MSG_DESCRIPTION_REQUIRED: &str = "Description is required";
pub const MSG_CONSENT_REQUIRED: &str = "You must agree to the terms";
pub const MSG_INVALID_EMAIL: &str = "Invalid email format";
/// Erfolgsmeldung nach erfolgreichem Insert.
pub const MSG_SUBMIT_SUCCESS: &str = "Thanks! Your submission will be reviewed.";
/// Generische Fehlermeldung nach fehlgeschlagenem Insert.
pub const MSG_SUBMIT_FAILED: &str = "Failed to submit location";

/// Meldung für eine zu lange Beschreibung.
pub fn description_too_long_message(max_chars: usize) -> String {
    format!("Description must be {max_chars} characters or less")
}
