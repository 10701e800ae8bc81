use culture_map::app::{Effect, FieldEdit};
use culture_map::shared::FormField;
use culture_map::{AppController, AppIntent, AppState, LocationCategory, SubmissionRecord};

fn edit(controller: &mut AppController, state: &mut AppState, edit: FieldEdit) {
    controller
        .handle_intent(state, AppIntent::SubmissionFieldEdited { edit })
        .expect("SubmissionFieldEdited sollte ohne Fehler durchlaufen");
}

fn valid_form(description: &str) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    edit(&mut controller, &mut state, FieldEdit::Name("Crossroads Mural".to_string()));
    edit(&mut controller, &mut state, FieldEdit::Category(LocationCategory::Mural));
    edit(&mut controller, &mut state, FieldEdit::Description(description.to_string()));
    edit(&mut controller, &mut state, FieldEdit::Consent(true));
    (controller, state)
}

fn submit(controller: &mut AppController, state: &mut AppState) -> Vec<Effect> {
    controller
        .handle_intent(state, AppIntent::SubmitRequested)
        .expect("SubmitRequested sollte ohne Fehler durchlaufen");
    state.take_effects()
}

fn record_for(state: &AppState) -> SubmissionRecord {
    let input = culture_map::SubmissionInput {
        name: state.form.values.name.clone(),
        category: state.form.values.category,
        description: state.form.values.description.clone(),
        website: None,
        photo_url: None,
        address: None,
        latitude: None,
        longitude: None,
        submitted_by: None,
        contact_email: None,
    };
    SubmissionRecord::from_input("sub-1".to_string(), &input, chrono::Utc::now())
}

#[test]
fn test_description_with_301_chars_is_rejected_without_network_call() {
    let (mut controller, mut state) = valid_form(&"a".repeat(301));

    let effects = submit(&mut controller, &mut state);

    assert!(effects.is_empty());
    assert!(!state.form.submitting);
    assert_eq!(
        state.form.errors.get(&FormField::Description).map(String::as_str),
        Some("Description must be 300 characters or less")
    );
}

#[test]
fn test_description_with_exactly_300_chars_is_accepted() {
    let (mut controller, mut state) = valid_form(&"ü".repeat(300));

    let effects = submit(&mut controller, &mut state);

    assert_eq!(effects.len(), 1);
    assert!(matches!(effects[0], Effect::SubmitLocation { .. }));
    assert!(state.form.errors.is_empty());
    assert!(state.form.submitting);
}

#[test]
fn test_contact_email_shape_is_checked() {
    let (mut controller, mut state) = valid_form("Painted wall");
    edit(&mut controller, &mut state, FieldEdit::ContactEmail("not-an-email".to_string()));
    assert!(submit(&mut controller, &mut state).is_empty());
    assert_eq!(
        state.form.errors.get(&FormField::ContactEmail).map(String::as_str),
        Some("Invalid email format")
    );

    edit(&mut controller, &mut state, FieldEdit::ContactEmail("a@b.co".to_string()));
    let effects = submit(&mut controller, &mut state);
    let Some(Effect::SubmitLocation { input, .. }) = effects.first() else {
        panic!("SubmitLocation erwartet, erhalten: {effects:?}");
    };
    assert_eq!(input.contact_email.as_deref(), Some("a@b.co"));
}

#[test]
fn test_empty_form_reports_errors_in_field_order() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    edit(&mut controller, &mut state, FieldEdit::ContactEmail("nope".to_string()));

    assert!(submit(&mut controller, &mut state).is_empty());

    let fields: Vec<FormField> = state.form.errors.keys().copied().collect();
    assert_eq!(
        fields,
        vec![
            FormField::Name,
            FormField::Description,
            FormField::Consent,
            FormField::ContactEmail
        ]
    );
}

#[test]
fn test_failed_submit_keeps_values_and_reenables_button() {
    let (mut controller, mut state) = valid_form("Painted wall");
    let effects = submit(&mut controller, &mut state);
    let Some(Effect::SubmitLocation { ticket, .. }) = effects.first().cloned() else {
        panic!("SubmitLocation erwartet");
    };
    assert!(!controller.build_form_scene(&state).submit_enabled);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SubmissionCompleted {
                ticket,
                result: Err("500".to_string()),
            },
        )
        .unwrap();

    let scene = controller.build_form_scene(&state);
    assert!(scene.submit_enabled);
    assert_eq!(scene.submit_label, "Submit Location");
    assert_eq!(scene.error_notice, Some("Failed to submit location"));
    assert_eq!(state.form.values.name, "Crossroads Mural");
}

#[test]
fn test_successful_submit_clears_form_after_notice() {
    let (mut controller, mut state) = valid_form("Painted wall");
    let effects = submit(&mut controller, &mut state);
    let Some(Effect::SubmitLocation { ticket, .. }) = effects.first().cloned() else {
        panic!("SubmitLocation erwartet");
    };

    let record = record_for(&state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::SubmissionCompleted {
                ticket,
                result: Ok(record),
            },
        )
        .unwrap();

    let effects = state.take_effects();
    assert_eq!(
        effects,
        vec![Effect::ScheduleFormReset {
            ticket,
            delay: std::time::Duration::from_secs(3)
        }]
    );
    let scene = controller.build_form_scene(&state);
    assert!(scene.success_notice.is_some());
    assert!(!scene.submit_enabled, "Button bleibt bis zum Reset deaktiviert");

    controller
        .handle_intent(&mut state, AppIntent::SuccessNoticeElapsed { ticket })
        .unwrap();

    assert!(state.form.values.name.is_empty());
    assert!(!state.form.values.consent);
    assert!(controller.build_form_scene(&state).submit_enabled);
}

#[test]
fn test_second_submit_while_in_flight_is_ignored() {
    let (mut controller, mut state) = valid_form("Painted wall");
    assert_eq!(submit(&mut controller, &mut state).len(), 1);
    assert!(submit(&mut controller, &mut state).is_empty());
}
