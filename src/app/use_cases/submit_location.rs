//! Use-Cases des Einreichungsformulars.

use super::form_validation;
use crate::app::effects::{Effect, SubmitTicket};
use crate::app::state::{FieldEdit, FormValues};
use crate::app::AppState;
use crate::core::SubmissionRecord;
use std::time::Duration;

/// Übernimmt eine Feldänderung; ein alter Fehler dieses Feldes bleibt bis zur
/// nächsten Prüfung stehen.
pub fn edit_field(state: &mut AppState, edit: FieldEdit) {
    let values = &mut state.form.values;
    match edit {
        FieldEdit::Name(v) => values.name = v,
        FieldEdit::Category(c) => values.category = c,
        FieldEdit::Description(v) => values.description = v,
        FieldEdit::Website(v) => values.website = v,
        FieldEdit::PhotoUrl(v) => values.photo_url = v,
        FieldEdit::Address(v) => values.address = v,
        FieldEdit::Latitude(v) => values.latitude = v,
        FieldEdit::Longitude(v) => values.longitude = v,
        FieldEdit::SubmittedBy(v) => values.submitted_by = v,
        FieldEdit::ContactEmail(v) => values.contact_email = v,
        FieldEdit::Consent(v) => values.consent = v,
    }
}

/// Prüft das Formular und fordert bei Erfolg genau einen Insert an.
pub fn submit(state: &mut AppState) {
    if state.form.submitting {
        log::debug!("Submit läuft bereits, ignoriert");
        return;
    }

    let errors =
        form_validation::validate(&state.form.values, state.options.form.description_max_chars);
    state.form.show_error = false;
    if !errors.is_empty() {
        log::debug!("Formular ungültig: {} Fehler", errors.len());
        state.form.errors = errors;
        return;
    }
    state.form.errors.clear();

    let input = form_validation::to_submission_input(&state.form.values);
    let ticket = state.form.issue_submit_ticket();
    state.form.submitting = true;
    log::info!("Einreichung '{}' wird gesendet", input.name);
    state.push_effect(Effect::SubmitLocation { ticket, input });
}

/// Übernimmt das Ergebnis eines Submits.
pub fn apply_submit_result(
    state: &mut AppState,
    ticket: SubmitTicket,
    result: Result<SubmissionRecord, String>,
) {
    if !state.form.is_current(ticket) || !state.form.submitting {
        log::debug!("Veraltetes Submit-Ergebnis {} verworfen", ticket.0);
        return;
    }

    match result {
        Ok(record) => {
            log::info!("Einreichung gespeichert ({})", record.id);
            state.form.show_success = true;
            let delay = Duration::from_millis(state.options.form.success_notice_delay_ms);
            state.push_effect(Effect::ScheduleFormReset { ticket, delay });
        }
        Err(message) => {
            log::error!("Einreichung fehlgeschlagen: {}", message);
            state.form.submitting = false;
            state.form.show_error = true;
        }
    }
}

/// Leert das Formular nach Ablauf der Erfolgsmeldung.
pub fn reset_after_success(state: &mut AppState, ticket: SubmitTicket) {
    if !state.form.is_current(ticket) || !state.form.show_success {
        return;
    }
    state.form.values = FormValues::default();
    state.form.errors.clear();
    state.form.show_success = false;
    state.form.submitting = false;
}
