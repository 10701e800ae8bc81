//! Lokale Prüfung des Einreichungsformulars.

use crate::app::state::FormValues;
use crate::core::SubmissionInput;
use crate::shared::form::{
    description_too_long_message, MSG_CONSENT_REQUIRED, MSG_DESCRIPTION_REQUIRED,
    MSG_INVALID_EMAIL, MSG_NAME_REQUIRED,
};
use crate::shared::FormField;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Grobe E-Mail-Form: `x@y.z` ohne Leerzeichen.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Prüft die Form einer E-Mail-Adresse.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Prüft alle Felder und liefert die Fehler in Feldreihenfolge.
pub fn validate(values: &FormValues, description_max_chars: usize) -> IndexMap<FormField, String> {
    let mut errors = IndexMap::new();

    if values.name.trim().is_empty() {
        errors.insert(FormField::Name, MSG_NAME_REQUIRED.to_string());
    }

    if values.description.trim().is_empty() {
        errors.insert(FormField::Description, MSG_DESCRIPTION_REQUIRED.to_string());
    } else if values.description.chars().count() > description_max_chars {
        errors.insert(
            FormField::Description,
            description_too_long_message(description_max_chars),
        );
    }

    if !values.consent {
        errors.insert(FormField::Consent, MSG_CONSENT_REQUIRED.to_string());
    }

    if !values.contact_email.is_empty() && !is_valid_email(&values.contact_email) {
        errors.insert(FormField::ContactEmail, MSG_INVALID_EMAIL.to_string());
    }

    errors
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Baut die Store-Eingabe aus geprüften Formularwerten.
pub fn to_submission_input(values: &FormValues) -> SubmissionInput {
    SubmissionInput {
        name: values.name.trim().to_string(),
        category: values.category,
        description: values.description.clone(),
        website: optional(&values.website),
        photo_url: optional(&values.photo_url),
        address: optional(&values.address),
        latitude: values.latitude,
        longitude: values.longitude,
        submitted_by: optional(&values.submitted_by),
        contact_email: optional(&values.contact_email),
    }
}
