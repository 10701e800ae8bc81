use culture_map::store::{LocationQuery, RecordStore, RestStore, StoreError};
use culture_map::{LocationCategory, SubmissionInput};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANON_KEY: &str = "anon-key";

fn store_for(server: &MockServer) -> RestStore {
    RestStore::new(&server.uri(), ANON_KEY, Duration::from_secs(5)).expect("Client baubar")
}

fn location_row(id: &str, category: &str, latitude: Option<f64>) -> serde_json::Value {
    json!({
        "id": id,
        "title": id.to_uppercase(),
        "description": "",
        "category": category,
        "latitude": latitude,
        "longitude": -94.58,
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:00:00Z"
    })
}

#[tokio::test]
async fn select_sends_filter_order_and_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/locations"))
        .and(query_param("select", "*"))
        .and(query_param("order", "created_at.desc"))
        .and(query_param("category", "eq.music_venue"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            location_row("blue-room", "music_venue", Some(39.09)),
            location_row("unknown-kind", "cinema", None),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let locations = store_for(&server)
        .select_locations(&LocationQuery::category(LocationCategory::MusicVenue))
        .await
        .expect("Select erfolgreich");

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].id, "blue-room");
    assert!(locations[0].is_placeable());
    assert_eq!(locations[1].category, LocationCategory::Other);
    assert!(!locations[1].is_placeable());
}

#[tokio::test]
async fn select_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/locations"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .select_locations(&LocationQuery::all())
        .await
        .expect_err("503 ist ein Fehler");

    match err {
        StoreError::Status { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "down");
        }
        other => panic!("Status-Fehler erwartet, erhalten: {other:?}"),
    }
}

#[tokio::test]
async fn insert_posts_snake_case_row_and_returns_representation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/location_submissions"))
        .and(header("prefer", "return=representation"))
        .and(body_partial_json(json!({
            "name": "Crossroads Mural",
            "category": "mural",
            "photo_url": "https://example.org/p.jpg",
            "contact_email": "a@b.co"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": "sub-1",
            "name": "Crossroads Mural",
            "category": "mural",
            "description": "Painted wall",
            "photo_url": "https://example.org/p.jpg",
            "contact_email": "a@b.co",
            "status": "pending",
            "created_at": "2024-05-02T08:30:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let input = SubmissionInput {
        name: "Crossroads Mural".to_string(),
        category: LocationCategory::Mural,
        description: "Painted wall".to_string(),
        website: None,
        photo_url: Some("https://example.org/p.jpg".to_string()),
        address: None,
        latitude: None,
        longitude: None,
        submitted_by: None,
        contact_email: Some("a@b.co".to_string()),
    };
    let record = store_for(&server)
        .insert_submission(&input)
        .await
        .expect("Insert erfolgreich");

    assert_eq!(record.id, "sub-1");
    assert_eq!(record.status, culture_map::core::ReviewStatus::Pending);
}

#[tokio::test]
async fn rejected_token_resolves_to_no_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let session = store_for(&server)
        .resolve_session("expired")
        .await
        .expect("401 ist kein Store-Fehler");

    assert!(session.is_none());
}

#[tokio::test]
async fn valid_token_and_profile_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1",
            "email": "admin@example.org"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", "eq.u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "u-1",
            "role": "admin",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let session = store
        .resolve_session("good")
        .await
        .unwrap()
        .expect("Session erwartet");
    assert_eq!(session.user_id, "u-1");

    let profile = store
        .find_profile(&session.user_id)
        .await
        .unwrap()
        .expect("Profil erwartet");
    assert!(profile.has_role("admin"));
}
