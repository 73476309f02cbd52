use actix_web::{test, web, App};
use room_store::SqliteRoomStore;
use serde_json::{json, Value};
use web_service::{server::app_config, AppState};

async fn seeded_state(dir: &tempfile::TempDir) -> web::Data<AppState> {
    let store = SqliteRoomStore::new(dir.path().join("hotel.db"));
    store.init().await.unwrap();

    let seed_path = dir.path().join("rooms.csv");
    std::fs::write(
        &seed_path,
        "id,type,price,availability\n\
         1,Single,100.00,Available\n\
         2,Double,150.00,Available\n\
         3,Suite,300.00,Available\n",
    )
    .unwrap();
    store.import_csv(&seed_path).await.unwrap();

    // no LLM in tests: replies use the engine's deterministic wording
    web::Data::new(AppState::new(store, None, None))
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_state(&dir).await;
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(app_config)).await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn index_serves_the_chat_page() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_state(&dir).await;
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(app_config)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("AI Hotel Receptionist"));
}

#[actix_web::test]
async fn create_session_returns_the_greeting() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_state(&dir).await;
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(app_config)).await;

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["session_id"].is_string());
    assert!(body["greeting"]
        .as_str()
        .unwrap()
        .starts_with("Welcome to our hotel!"));
}

#[actix_web::test]
async fn booking_flow_over_the_api() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_state(&dir).await;
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(app_config)).await;

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let send = |message: &str| {
        test::TestRequest::post()
            .uri(&format!("/api/v1/sessions/{session_id}/messages"))
            .set_json(json!({ "message": message }))
            .to_request()
    };

    let proposal: Value = test::call_and_read_body_json(&app, send("book a double")).await;
    assert_eq!(proposal["action"], "booking_proposed");
    assert!(proposal["message"]
        .as_str()
        .unwrap()
        .contains("$150.00 per night"));

    let confirmed: Value = test::call_and_read_body_json(&app, send("yes")).await;
    assert_eq!(confirmed["action"], "booking_confirmed");

    // the booking shows up in the listing
    let req = test::TestRequest::get().uri("/api/v1/bookings").to_request();
    let bookings: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bookings.as_array().unwrap().len(), 1);
    assert_eq!(bookings[0]["room_id"], 2);
    assert_eq!(bookings[0]["status"], "reserved");
}

#[actix_web::test]
async fn history_replays_the_conversation() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_state(&dir).await;
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(app_config)).await;

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{session_id}/messages"))
        .set_json(json!({ "message": "any rooms free?" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{session_id}/history"))
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    let messages = history["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3); // greeting, guest, reply
    assert_eq!(messages[1]["role"], "guest");
    assert_eq!(messages[1]["text"], "any rooms free?");
}

#[actix_web::test]
async fn unknown_session_is_a_404() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_state(&dir).await;
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(app_config)).await;

    let req = test::TestRequest::post()
        .uri(&format!(
            "/api/v1/sessions/{}/messages",
            uuid::Uuid::new_v4()
        ))
        .set_json(json!({ "message": "hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["type"], "api_error");
}

#[actix_web::test]
async fn rooms_listing_supports_a_price_band() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_state(&dir).await;
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(app_config)).await;

    let req = test::TestRequest::get().uri("/api/v1/rooms").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/api/v1/rooms?min_price=100&max_price=200")
        .to_request();
    let band: Value = test::call_and_read_body_json(&app, req).await;
    let rows = band.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row["price"].as_f64().unwrap() <= 200.0));
}

#[actix_web::test]
async fn check_in_and_out_by_booking_reference() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_state(&dir).await;
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(app_config)).await;

    let booking = state.store().reserve_room(1, None).await.unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/bookings/{}/check-in", booking.id))
        .to_request();
    let checked_in: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(checked_in["status"], "checked_in");

    // checking in again conflicts
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/bookings/{}/check-in", booking.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/bookings/{}/check-out", booking.id))
        .to_request();
    let checked_out: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(checked_out["status"], "checked_out");
}

#[actix_web::test]
async fn cancelling_a_booking_frees_the_room() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_state(&dir).await;
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(app_config)).await;

    let booking = state.store().reserve_room(3, None).await.unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/bookings/{}/cancel", booking.id))
        .to_request();
    let cancelled: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cancelled["status"], "cancelled");

    let req = test::TestRequest::get().uri("/api/v1/rooms").to_request();
    let rooms: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rooms.as_array().unwrap().len(), 3);

    // cancelling an unknown booking is a 404
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/bookings/{}/cancel", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
