//! API Integration Tests
//!
//! Each test spawns its own server on an ephemeral port with a fresh,
//! fixture-seeded store. No external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use fitness_common::AppConfig;
use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn first_member(server: &TestServer) -> Member {
    let response = server.get("/api/members").await.unwrap();
    let members: Vec<Member> = assert_json(response, StatusCode::OK).await.unwrap();
    members.into_iter().next().unwrap()
}

async fn first_exercise(server: &TestServer) -> Exercise {
    let response = server.get("/api/exercises").await.unwrap();
    let exercises: Vec<Exercise> = assert_json(response, StatusCode::OK).await.unwrap();
    exercises.into_iter().next().unwrap()
}

async fn first_session(server: &TestServer) -> Session {
    let response = server.get("/api/sessions").await.unwrap();
    let sessions: Vec<Session> = assert_json(response, StatusCode::OK).await.unwrap();
    sessions.into_iter().next().unwrap()
}

async fn start_session(server: &TestServer) -> Session {
    let member = first_member(server).await;
    let exercise = first_exercise(server).await;
    let response = server
        .post("/api/sessions", &CreateSessionBody::new(&member.id, &exercise.id))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["store"]["members"], 3);
    assert_eq!(body["store"]["exercises"], 5);
    assert_eq!(body["store"]["sessions"], 3);
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_dashboard_scenario() {
    let server = TestServer::start().await.unwrap();

    // Seeded directory
    let response = server.get("/api/members").await.unwrap();
    let members: Vec<Member> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 3);

    // Register Pat
    let pat = CreateMemberBody::new("Pat", "pat@example.com");
    let response = server.post("/api/members", &pat).await.unwrap();
    let created: Member = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(created.is_active);
    assert_eq!(created.name, "Pat");

    // Same email again
    let response = server.post("/api/members", &pat).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get("/api/members").await.unwrap();
    let members: Vec<Member> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 4);

    // Patch reps only
    let before = first_session(&server).await;
    let response = server
        .patch(&format!("/api/sessions/{}", before.id), &json!({"reps": 55}))
        .await
        .unwrap();
    let after: Session = assert_json(response, StatusCode::OK).await.unwrap();

    let mut expected = before.clone();
    expected.reps = 55;
    assert_eq!(after, expected);
}

#[tokio::test]
async fn test_get_member_by_id() {
    let server = TestServer::start().await.unwrap();
    let member = first_member(&server).await;

    let response = server.get(&format!("/api/members/{}", member.id)).await.unwrap();
    let fetched: Member = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, member);
    assert_eq!(fetched.email, "alex@example.com");
}

#[tokio::test]
async fn test_get_member_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/members/does-not-exist").await.unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_duplicate_email_message() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/api/members", &CreateMemberBody::new("Alex Again", "alex@example.com"))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["message"], "Email already exists");
}

#[tokio::test]
async fn test_create_member_missing_email() {
    let server = TestServer::start().await.unwrap();
    let response = server.post("/api/members", &json!({"name": "Pat"})).await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_create_member_wrong_type() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            "/api/members",
            &json!({"name": "Pat", "email": "pat@example.com", "isActive": "yes"}),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error["message"].as_str().unwrap().contains("isActive"));
}

#[tokio::test]
async fn test_create_member_malformed_json() {
    let server = TestServer::start().await.unwrap();
    let response = server.post_raw("/api/members", "{\"name\": ").await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_member_invalid_email() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/api/members", &CreateMemberBody::new("Pat", "not-an-email"))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error["details"].get("email").is_some());
}

#[tokio::test]
async fn test_update_member_ignores_identity_fields() {
    let server = TestServer::start().await.unwrap();
    let member = first_member(&server).await;

    let response = server
        .patch(
            &format!("/api/members/{}", member.id),
            &json!({
                "id": "hijacked",
                "joinedAt": "2000-01-01T00:00:00Z",
                "isActive": false
            }),
        )
        .await
        .unwrap();
    let updated: Member = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.id, member.id);
    assert_eq!(updated.joined_at, member.joined_at);
    assert!(!updated.is_active);
}

#[tokio::test]
async fn test_update_member_clears_avatar() {
    let server = TestServer::start().await.unwrap();
    let mut body = CreateMemberBody::unique();
    body.avatar = Some("a.png".to_string());

    let response = server.post("/api/members", &body).await.unwrap();
    let created: Member = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.avatar.as_deref(), Some("a.png"));
    let path = format!("/api/members/{}", created.id);

    // Omitted: unchanged
    let response = server.patch(&path, &json!({"name": "Renamed"})).await.unwrap();
    let renamed: Member = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(renamed.avatar.as_deref(), Some("a.png"));

    // null: cleared
    let response = server.patch(&path, &json!({"avatar": null})).await.unwrap();
    let cleared: Member = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(cleared.avatar.is_none());
    assert_eq!(cleared.name, "Renamed");

    // Blank behaves like create: stored as absent
    server.patch(&path, &json!({"avatar": "b.png"})).await.unwrap();
    let response = server.patch(&path, &json!({"avatar": ""})).await.unwrap();
    let blanked: Member = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(blanked.avatar.is_none());

    let response = server.get(&path).await.unwrap();
    let fetched: Member = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, blanked);
}

#[tokio::test]
async fn test_padded_member_id_does_not_match() {
    let server = TestServer::start().await.unwrap();
    let member = first_member(&server).await;

    let response = server
        .get(&format!("/api/members/%20{}", member.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_member_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .patch("/api/members/missing", &json!({"name": "Nobody"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_member_sessions() {
    let server = TestServer::start().await.unwrap();
    let member = first_member(&server).await;
    let started = start_session(&server).await;

    let response = server
        .get(&format!("/api/members/{}/sessions", member.id))
        .await
        .unwrap();
    let sessions: Vec<Session> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(sessions.len(), 2);
    assert!(sessions.iter().all(|s| s.member_id == member.id));
    assert_eq!(sessions[1].id, started.id);
}

#[tokio::test]
async fn test_unknown_member_sessions_is_empty() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/members/nobody/sessions").await.unwrap();
    let sessions: Vec<Session> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(sessions.is_empty());
}

// ============================================================================
// Exercise Tests
// ============================================================================

#[tokio::test]
async fn test_list_exercises() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/exercises").await.unwrap();
    let exercises: Vec<Exercise> = assert_json(response, StatusCode::OK).await.unwrap();

    let names: Vec<_> = exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Push-ups", "Squats", "Burpees", "Plank", "Lunges"]);
}

#[tokio::test]
async fn test_create_and_update_exercise() {
    let server = TestServer::start().await.unwrap();
    let body = CreateExerciseBody::unique();

    let response = server.post("/api/exercises", &body).await.unwrap();
    let created: Exercise = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.name, body.name);
    assert_eq!(created.proper_form_tips, body.proper_form_tips);

    let response = server
        .patch(
            &format!("/api/exercises/{}", created.id),
            &json!({"difficulty": "intermediate"}),
        )
        .await
        .unwrap();
    let updated: Exercise = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.difficulty, "intermediate");
    assert_eq!(updated.category, created.category);

    let response = server.get(&format!("/api/exercises/{}", created.id)).await.unwrap();
    let fetched: Exercise = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_create_exercise_missing_fields() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/api/exercises", &json!({"name": "Half an exercise"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_exercise_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/exercises/missing").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .patch("/api/exercises/missing", &json!({"name": "x"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_create_session_defaults() {
    let server = TestServer::start().await.unwrap();
    let member = first_member(&server).await;
    let exercise = first_exercise(&server).await;

    let response = server
        .post(
            "/api/sessions",
            &json!({
                "memberId": member.id,
                "exerciseId": exercise.id,
                "status": "completed",
                "postureScores": [99.0],
                "endTime": "2024-01-01T00:00:00Z"
            }),
        )
        .await
        .unwrap();
    let session: Session = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(session.status, "in_progress");
    assert!(session.posture_scores.is_empty());
    assert!(session.end_time.is_none());
    assert!(session.duration.is_none());
    assert_eq!(session.reps, 0);

    let response = server.get(&format!("/api/sessions/{}", session.id)).await.unwrap();
    let fetched: Session = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, session);
}

#[tokio::test]
async fn test_create_session_with_dangling_references() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/api/sessions", &CreateSessionBody::new("ghost", "nothing"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_verified_references_reject_dangling_ids() {
    let mut config: AppConfig = test_config();
    config.workouts.verify_references = true;
    let server = TestServer::start_with_config(config).await.unwrap();

    let response = server
        .post("/api/sessions", &CreateSessionBody::new("ghost", "nothing"))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["code"], "INVALID_MEMBER_REFERENCE");
}

#[tokio::test]
async fn test_complete_session() {
    let server = TestServer::start().await.unwrap();
    let started = start_session(&server).await;

    let end_time = chrono::Utc::now().to_rfc3339();
    let response = server
        .patch(
            &format!("/api/sessions/{}", started.id),
            &json!({"status": "completed", "endTime": end_time}),
        )
        .await
        .unwrap();
    let completed: Session = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(completed.status, "completed");
    assert!(completed.end_time.is_some());
    assert_eq!(completed.start_time, started.start_time);
    assert_eq!(completed.reps, started.reps);
    assert_eq!(completed.posture_scores, started.posture_scores);
}

#[tokio::test]
async fn test_posture_scores_replace() {
    let server = TestServer::start().await.unwrap();
    let session = first_session(&server).await;
    assert_eq!(session.posture_scores.len(), 5);

    let response = server
        .patch(
            &format!("/api/sessions/{}", session.id),
            &json!({"postureScores": [70.0, 71.5]}),
        )
        .await
        .unwrap();
    let updated: Session = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.posture_scores, vec![70.0, 71.5]);
}

#[tokio::test]
async fn test_update_session_unknown_field() {
    let server = TestServer::start().await.unwrap();
    let session = first_session(&server).await;

    let response = server
        .patch(
            &format!("/api/sessions/{}", session.id),
            &json!({"memberId": "someone-else"}),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["code"], "VALIDATION_ERROR");

    // Nothing changed
    let response = server.get(&format!("/api/sessions/{}", session.id)).await.unwrap();
    let fetched: Session = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, session);
}

#[tokio::test]
async fn test_update_session_invalid_status() {
    let server = TestServer::start().await.unwrap();
    let session = first_session(&server).await;

    let response = server
        .patch(
            &format!("/api/sessions/{}", session.id),
            &json!({"status": "finished"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_session_score_out_of_range() {
    let server = TestServer::start().await.unwrap();
    let session = first_session(&server).await;

    let response = server
        .patch(
            &format!("/api/sessions/{}", session.id),
            &json!({"postureScores": [50.0, 150.0]}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_session_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .patch("/api/sessions/missing", &json!({"reps": 1}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/api/sessions").await.unwrap();
    let sessions: Vec<Session> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(sessions.len(), 3);
}

#[tokio::test]
async fn test_empty_patch_is_idempotent() {
    let server = TestServer::start().await.unwrap();
    let session = first_session(&server).await;

    let response = server
        .patch(&format!("/api/sessions/{}", session.id), &json!({}))
        .await
        .unwrap();
    let unchanged: Session = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unchanged, session);
}

#[tokio::test]
async fn test_completed_session_can_reopen_by_default() {
    let server = TestServer::start().await.unwrap();
    let session = first_session(&server).await;
    assert_eq!(session.status, "completed");

    let response = server
        .patch(
            &format!("/api/sessions/{}", session.id),
            &json!({"status": "in_progress"}),
        )
        .await
        .unwrap();
    let reopened: Session = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reopened.status, "in_progress");
}

#[tokio::test]
async fn test_strict_transitions_keep_completed_terminal() {
    let mut config = test_config();
    config.workouts.strict_transitions = true;
    let server = TestServer::start_with_config(config).await.unwrap();
    let session = first_session(&server).await;

    let response = server
        .patch(
            &format!("/api/sessions/{}", session.id),
            &json!({"status": "paused"}),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["code"], "INVALID_STATUS_TRANSITION");
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_stats_follow_the_store() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/stats").await.unwrap();
    let stats: Stats = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_members, 3);
    assert_eq!(stats.active_members, 3);
    assert_eq!(stats.total_exercises, 5);
    assert_eq!(stats.total_sessions, 3);
    assert_eq!(stats.completed_sessions, 3);
    assert_eq!(stats.total_reps, 120);
    assert!((stats.total_calories - 650.0).abs() < 1e-9);
    assert!((stats.average_posture_accuracy - 257.0 / 3.0).abs() < 1e-9);

    start_session(&server).await;
    server
        .post("/api/members", &CreateMemberBody::unique())
        .await
        .unwrap();

    let response = server.get("/api/stats").await.unwrap();
    let stats: Stats = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_members, 4);
    assert_eq!(stats.total_sessions, 4);
    assert_eq!(stats.in_progress_sessions, 1);
}

#[tokio::test]
async fn test_unseeded_server_starts_empty() {
    let mut config = test_config();
    config.store.seed_fixtures = false;
    let server = TestServer::start_with_config(config).await.unwrap();

    let response = server.get("/api/members").await.unwrap();
    let members: Vec<Member> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(members.is_empty());

    let response = server.get("/api/stats").await.unwrap();
    let stats: Stats = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_sessions, 0);
    assert!(stats.average_posture_accuracy.abs() < f64::EPSILON);
}
