//! Handler für das Einreichungsformular.

use crate::app::effects::SubmitTicket;
use crate::app::state::FieldEdit;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SubmissionRecord;

pub fn edit_field(state: &mut AppState, edit: FieldEdit) {
    use_cases::submit_location::edit_field(state, edit);
}

pub fn submit(state: &mut AppState) {
    use_cases::submit_location::submit(state);
}

pub fn apply_result(
    state: &mut AppState,
    ticket: SubmitTicket,
    result: Result<SubmissionRecord, String>,
) {
    use_cases::submit_location::apply_submit_result(state, ticket, result);
}

pub fn reset_after_success(state: &mut AppState, ticket: SubmitTicket) {
    use_cases::submit_location::reset_after_success(state, ticket);
}
