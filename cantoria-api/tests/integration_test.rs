/// Integration tests for the Cantoria API
///
/// These tests verify the full system works end-to-end:
/// - Seeded-credential login and session gating
/// - Role enforcement (member reads, admin writes)
/// - Roster / repertoire / schedule CRUD with referential delete guards
/// - Assignment and song-list contracts over HTTP
/// - Derived upcoming/past views and dashboard stats
mod common;

use axum::http::{Method, StatusCode};
use common::TestContext;
use serde_json::json;

/// Date strings a week either side of today, so derived views are stable
fn week_offset(days: i64) -> String {
    (chrono::Utc::now().date_naive() + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

async fn create_musician(ctx: &TestContext, name: &str, email: &str) -> String {
    let body = ctx
        .admin_json(
            Method::POST,
            "/api/musicians",
            Some(json!({
                "name": name,
                "email": email,
                "instruments": ["Piano"],
                "skill_level": "advanced",
                "availability": [{ "day": "sunday", "period": "morning" }]
            })),
            StatusCode::CREATED,
        )
        .await;
    body["id"].as_str().unwrap().to_string()
}

async fn create_song(ctx: &TestContext, title: &str, key: &str) -> String {
    let body = ctx
        .admin_json(
            Method::POST,
            "/api/songs",
            Some(json!({
                "title": title,
                "artist": "Traditional",
                "key": key,
                "tempo": 86
            })),
            StatusCode::CREATED,
        )
        .await;
    body["id"].as_str().unwrap().to_string()
}

async fn create_schedule(ctx: &TestContext, title: &str, date: &str) -> String {
    let body = ctx
        .admin_json(
            Method::POST,
            "/api/schedules",
            Some(json!({
                "title": title,
                "date": date,
                "time": "10:00:00",
                "location": "Main hall"
            })),
            StatusCode::CREATED,
        )
        .await;
    body["id"].as_str().unwrap().to_string()
}

/// Seeded admin login returns the admin user view and a usable token
#[tokio::test]
async fn test_login_seeded_admin() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .anonymous(
            Method::POST,
            "/api/auth/login",
            Some(json!({
                "email": common::ADMIN_EMAIL,
                "password": common::ADMIN_PASSWORD
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::read_json(response).await;
    assert_eq!(body["user"]["email"], common::ADMIN_EMAIL);
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["token"].as_str().is_some());
    assert!(body["user"].get("password_hash").is_none());
}

/// Wrong password and unknown email both answer the same 401
#[tokio::test]
async fn test_login_rejects_bad_credentials_uniformly() {
    let ctx = TestContext::new().await.unwrap();

    let wrong_password = ctx
        .anonymous(
            Method::POST,
            "/api/auth/login",
            Some(json!({
                "email": common::ADMIN_EMAIL,
                "password": "not-the-password"
            })),
        )
        .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_body = common::read_json(wrong_password).await;

    let unknown_email = ctx
        .anonymous(
            Method::POST,
            "/api/auth/login",
            Some(json!({
                "email": "nobody@cantoria.app",
                "password": "whatever"
            })),
        )
        .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_body = common::read_json(unknown_email).await;

    // Same message either way, so the response does not leak which emails exist
    assert_eq!(wrong_body["message"], unknown_body["message"]);
}

/// /auth/me echoes the user carried by the session token
#[tokio::test]
async fn test_me_reads_session_back() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.member(Method::GET, "/api/auth/me", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::read_json(response).await;
    assert_eq!(body["email"], common::MEMBER_EMAIL);
    assert_eq!(body["role"], "member");
}

/// Everything under /api except login requires a session
#[tokio::test]
async fn test_session_required() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.anonymous(Method::GET, "/api/musicians", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = ctx.anonymous(Method::GET, "/api/stats", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Members can read but not write
#[tokio::test]
async fn test_member_writes_forbidden() {
    let ctx = TestContext::new().await.unwrap();

    let read = ctx.member(Method::GET, "/api/songs", None).await;
    assert_eq!(read.status(), StatusCode::OK);

    let write = ctx
        .member(
            Method::POST,
            "/api/songs",
            Some(json!({ "title": "Nope", "key": "C", "tempo": 100 })),
        )
        .await;
    assert_eq!(write.status(), StatusCode::FORBIDDEN);
}

/// Health endpoint is public and reports store counts
#[tokio::test]
async fn test_health_is_public() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.anonymous(Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::read_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["musicians"], 0);
}

/// Musician CRUD round trip
#[tokio::test]
async fn test_musician_crud() {
    let ctx = TestContext::new().await.unwrap();

    let id = create_musician(&ctx, "Ana Souza", "ana@example.com").await;

    let fetched = ctx
        .admin_json(Method::GET, &format!("/api/musicians/{id}"), None, StatusCode::OK)
        .await;
    assert_eq!(fetched["name"], "Ana Souza");
    assert!(fetched["joined_date"].as_str().is_some());

    let updated = ctx
        .admin_json(
            Method::PUT,
            &format!("/api/musicians/{id}"),
            Some(json!({ "instruments": ["Piano", "Organ"] })),
            StatusCode::OK,
        )
        .await;
    assert_eq!(updated["instruments"].as_array().unwrap().len(), 2);
    assert_eq!(updated["email"], "ana@example.com");

    let removed = ctx
        .admin(Method::DELETE, &format!("/api/musicians/{id}"), None)
        .await;
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);

    let gone = ctx
        .admin(Method::GET, &format!("/api/musicians/{id}"), None)
        .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

/// Roster listing is ordered by name
#[tokio::test]
async fn test_musician_list_sorted_by_name() {
    let ctx = TestContext::new().await.unwrap();

    create_musician(&ctx, "Clara Lima", "clara@example.com").await;
    create_musician(&ctx, "Ana Souza", "ana@example.com").await;
    create_musician(&ctx, "Bruno Costa", "bruno@example.com").await;

    let list = ctx
        .admin_json(Method::GET, "/api/musicians", None, StatusCode::OK)
        .await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana Souza", "Bruno Costa", "Clara Lima"]);
}

/// Song creation validates key notation and tempo range
#[tokio::test]
async fn test_song_validation() {
    let ctx = TestContext::new().await.unwrap();

    let bad_key = ctx
        .admin(
            Method::POST,
            "/api/songs",
            Some(json!({ "title": "Hino 1", "key": "H", "tempo": 100 })),
        )
        .await;
    assert_eq!(bad_key.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::read_json(bad_key).await;
    assert_eq!(body["details"][0]["field"], "key");

    let bad_tempo = ctx
        .admin(
            Method::POST,
            "/api/songs",
            Some(json!({ "title": "Hino 1", "key": "C", "tempo": 300 })),
        )
        .await;
    assert_eq!(bad_tempo.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Minor keys use the m suffix
    let minor = ctx
        .admin(
            Method::POST,
            "/api/songs",
            Some(json!({ "title": "Hino 2", "key": "Bbm", "tempo": 72 })),
        )
        .await;
    assert_eq!(minor.status(), StatusCode::CREATED);
}

/// New songs start with zeroed usage counters
#[tokio::test]
async fn test_song_counters_start_zeroed() {
    let ctx = TestContext::new().await.unwrap();

    let id = create_song(&ctx, "Oceans", "D").await;
    let song = ctx
        .admin_json(Method::GET, &format!("/api/songs/{id}"), None, StatusCode::OK)
        .await;

    assert_eq!(song["times_played"], 0);
    assert!(song["last_played"].is_null());
}

/// Deleting a referenced musician answers 409 until the assignment is removed
#[tokio::test]
async fn test_referenced_musician_delete_conflicts() {
    let ctx = TestContext::new().await.unwrap();

    let musician_id = create_musician(&ctx, "Ana Souza", "ana@example.com").await;
    let schedule_id = create_schedule(&ctx, "Culto", &week_offset(7)).await;

    ctx.admin_json(
        Method::POST,
        &format!("/api/schedules/{schedule_id}/musicians"),
        Some(json!({ "musician_id": musician_id, "instrument": "Piano" })),
        StatusCode::OK,
    )
    .await;

    let blocked = ctx
        .admin(Method::DELETE, &format!("/api/musicians/{musician_id}"), None)
        .await;
    assert_eq!(blocked.status(), StatusCode::CONFLICT);

    ctx.admin_json(
        Method::DELETE,
        &format!("/api/schedules/{schedule_id}/musicians/{musician_id}"),
        None,
        StatusCode::OK,
    )
    .await;

    let freed = ctx
        .admin(Method::DELETE, &format!("/api/musicians/{musician_id}"), None)
        .await;
    assert_eq!(freed.status(), StatusCode::NO_CONTENT);
}

/// Deleting a listed song answers 409 until the list drops it
#[tokio::test]
async fn test_listed_song_delete_conflicts() {
    let ctx = TestContext::new().await.unwrap();

    let song_id = create_song(&ctx, "Oceans", "D").await;
    let schedule_id = create_schedule(&ctx, "Culto", &week_offset(7)).await;

    ctx.admin_json(
        Method::PUT,
        &format!("/api/schedules/{schedule_id}/songs"),
        Some(json!({ "song_ids": [song_id] })),
        StatusCode::OK,
    )
    .await;

    let blocked = ctx
        .admin(Method::DELETE, &format!("/api/songs/{song_id}"), None)
        .await;
    assert_eq!(blocked.status(), StatusCode::CONFLICT);

    ctx.admin_json(
        Method::PUT,
        &format!("/api/schedules/{schedule_id}/songs"),
        Some(json!({ "song_ids": [] })),
        StatusCode::OK,
    )
    .await;

    let freed = ctx
        .admin(Method::DELETE, &format!("/api/songs/{song_id}"), None)
        .await;
    assert_eq!(freed.status(), StatusCode::NO_CONTENT);
}

/// Re-posting an assigned musician overwrites the instrument and keeps the flag
#[tokio::test]
async fn test_reassignment_overwrites_instrument_keeps_confirmation() {
    let ctx = TestContext::new().await.unwrap();

    let musician_id = create_musician(&ctx, "Bruno Costa", "bruno@example.com").await;
    let schedule_id = create_schedule(&ctx, "Ensaio", &week_offset(7)).await;

    let assigned = ctx
        .admin_json(
            Method::POST,
            &format!("/api/schedules/{schedule_id}/musicians"),
            Some(json!({ "musician_id": musician_id, "instrument": "Guitar" })),
            StatusCode::OK,
        )
        .await;
    assert_eq!(assigned["musicians"][0]["confirmed"], false);

    ctx.admin_json(
        Method::PUT,
        &format!("/api/schedules/{schedule_id}/musicians/{musician_id}/confirmation"),
        Some(json!({ "confirmed": true })),
        StatusCode::OK,
    )
    .await;

    let reassigned = ctx
        .admin_json(
            Method::POST,
            &format!("/api/schedules/{schedule_id}/musicians"),
            Some(json!({ "musician_id": musician_id, "instrument": "Bass" })),
            StatusCode::OK,
        )
        .await;

    let assignments = reassigned["musicians"].as_array().unwrap();
    assert_eq!(assignments.len(), 1, "no duplicate assignment");
    assert_eq!(assignments[0]["instrument"], "Bass");
    assert_eq!(assignments[0]["confirmed"], true, "flag survives re-instrument");
}

/// The song list is replaced wholesale, preserving request order
#[tokio::test]
async fn test_set_songs_replaces_in_order() {
    let ctx = TestContext::new().await.unwrap();

    let first = create_song(&ctx, "Hino 1", "G").await;
    let second = create_song(&ctx, "Oceans", "D").await;
    let schedule_id = create_schedule(&ctx, "Culto", &week_offset(7)).await;

    ctx.admin_json(
        Method::PUT,
        &format!("/api/schedules/{schedule_id}/songs"),
        Some(json!({ "song_ids": [first] })),
        StatusCode::OK,
    )
    .await;

    let replaced = ctx
        .admin_json(
            Method::PUT,
            &format!("/api/schedules/{schedule_id}/songs"),
            Some(json!({ "song_ids": [second, first] })),
            StatusCode::OK,
        )
        .await;

    let songs: Vec<&str> = replaced["songs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(songs, vec![second.as_str(), first.as_str()]);
}

/// Assigning an unknown musician or listing an unknown song answers 404
#[tokio::test]
async fn test_unknown_references_rejected() {
    let ctx = TestContext::new().await.unwrap();

    let schedule_id = create_schedule(&ctx, "Culto", &week_offset(7)).await;
    let ghost = uuid::Uuid::new_v4();

    let assign = ctx
        .admin(
            Method::POST,
            &format!("/api/schedules/{schedule_id}/musicians"),
            Some(json!({ "musician_id": ghost, "instrument": "Piano" })),
        )
        .await;
    assert_eq!(assign.status(), StatusCode::NOT_FOUND);

    let songs = ctx
        .admin(
            Method::PUT,
            &format!("/api/schedules/{schedule_id}/songs"),
            Some(json!({ "song_ids": [ghost] })),
        )
        .await;
    assert_eq!(songs.status(), StatusCode::NOT_FOUND);

    // Nothing was partially applied
    let schedule = ctx
        .admin_json(
            Method::GET,
            &format!("/api/schedules/{schedule_id}"),
            None,
            StatusCode::OK,
        )
        .await;
    assert!(schedule["musicians"].as_array().unwrap().is_empty());
    assert!(schedule["songs"].as_array().unwrap().is_empty());
}

/// Upcoming and past views split on the event start instant
#[tokio::test]
async fn test_upcoming_and_past_views() {
    let ctx = TestContext::new().await.unwrap();

    let upcoming_id = create_schedule(&ctx, "Culto", &week_offset(7)).await;
    let past_id = create_schedule(&ctx, "Ensaio", &week_offset(-7)).await;

    let upcoming = ctx
        .admin_json(Method::GET, "/api/schedules/upcoming", None, StatusCode::OK)
        .await;
    let upcoming_ids: Vec<&str> = upcoming
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(upcoming_ids, vec![upcoming_id.as_str()]);

    let past = ctx
        .admin_json(Method::GET, "/api/schedules/past", None, StatusCode::OK)
        .await;
    let past_ids: Vec<&str> = past
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(past_ids, vec![past_id.as_str()]);
}

/// Stats combine confirmation counts with roster composition
#[tokio::test]
async fn test_stats() {
    let ctx = TestContext::new().await.unwrap();

    let musician_id = create_musician(&ctx, "Ana Souza", "ana@example.com").await;
    let schedule_id = create_schedule(&ctx, "Culto", &week_offset(7)).await;
    ctx.admin_json(
        Method::POST,
        &format!("/api/schedules/{schedule_id}/musicians"),
        Some(json!({ "musician_id": musician_id, "instrument": "Piano" })),
        StatusCode::OK,
    )
    .await;

    let stats = ctx
        .admin_json(Method::GET, "/api/stats", None, StatusCode::OK)
        .await;

    assert_eq!(stats["confirmations"]["confirmed"], 0);
    assert_eq!(stats["confirmations"]["pending"], 1);
    assert_eq!(stats["roster"]["by_instrument"]["Piano"], 1);
    assert_eq!(stats["roster"]["by_period"]["morning"], 1);
}

/// Full coordination flow: roster a musician, add a song, schedule the
/// service, assign, confirm, pick the set list, and read the agenda back.
#[tokio::test]
async fn test_full_coordination_flow() {
    let ctx = TestContext::new().await.unwrap();

    let ana = create_musician(&ctx, "Ana Souza", "ana@example.com").await;
    let hino = create_song(&ctx, "Hino 1", "G").await;
    let culto = create_schedule(&ctx, "Culto", &week_offset(7)).await;

    let assigned = ctx
        .admin_json(
            Method::POST,
            &format!("/api/schedules/{culto}/musicians"),
            Some(json!({ "musician_id": ana, "instrument": "Piano" })),
            StatusCode::OK,
        )
        .await;
    assert_eq!(assigned["musicians"][0]["confirmed"], false);

    let confirmed = ctx
        .admin_json(
            Method::PUT,
            &format!("/api/schedules/{culto}/musicians/{ana}/confirmation"),
            Some(json!({ "confirmed": true })),
            StatusCode::OK,
        )
        .await;
    assert_eq!(confirmed["musicians"][0]["confirmed"], true);

    ctx.admin_json(
        Method::PUT,
        &format!("/api/schedules/{culto}/songs"),
        Some(json!({ "song_ids": [hino] })),
        StatusCode::OK,
    )
    .await;

    // The member can read Ana's agenda: one upcoming event, nothing past
    let agenda_response = ctx
        .member(Method::GET, &format!("/api/schedules/musician/{ana}"), None)
        .await;
    assert_eq!(agenda_response.status(), StatusCode::OK);
    let agenda = common::read_json(agenda_response).await;

    let upcoming = agenda["upcoming"].as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["id"].as_str().unwrap(), culto);
    assert_eq!(upcoming[0]["songs"][0].as_str().unwrap(), hino);
    assert!(agenda["past"].as_array().unwrap().is_empty());
}
