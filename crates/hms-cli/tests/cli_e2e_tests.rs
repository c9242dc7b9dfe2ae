//! End-to-end tests for the hms binary
//!
//! Each test runs the real binary against a mock backend with its session
//! database in a temporary directory. Stdin is not a terminal here, so no
//! command ever prompts.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Command wired to the mock server and an isolated session database
fn hms(server: &MockServer, session: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hms").unwrap();
    cmd.env("HMS_SESSION_DB", session.path().join("session.db"))
        .env_remove("HMS_API_URL")
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_OUTPUT")
        .env("NO_COLOR", "1")
        .arg("--api-url")
        .arg(server.uri());
    cmd
}

fn token_response() -> serde_json::Value {
    json!({"access": "access-1", "refresh": "refresh-1"})
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token/"))
        .and(body_json(json!({"email": "nurse@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .mount(server)
        .await;
}

fn login(server: &MockServer, session: &TempDir) {
    hms(server, session)
        .args(["login", "--email", "nurse@example.com", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as nurse@example.com"));
}

// ============================================================================
// Session
// ============================================================================

#[tokio::test]
async fn test_login_with_empty_fields_sends_nothing() {
    let server = MockServer::start().await;
    let session = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .expect(0)
        .mount(&server)
        .await;

    hms(&server, &session)
        .args(["login", "--email", "", "--password", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email is required"))
        .stderr(predicate::str::contains("Password is required"));
}

#[tokio::test]
async fn test_login_then_list_uses_stored_token() {
    let server = MockServer::start().await;
    let session = TempDir::new().unwrap();
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/patients/"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "patients": [{
                "id": 1,
                "first_name": "Ada",
                "last_name": "Okafor",
                "date_of_birth": "1990-06-15",
                "gender": "Female",
                "phone_number": "555-0101"
            }],
            "count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    login(&server, &session);

    hms(&server, &session)
        .args(["patients", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Okafor"))
        .stdout(predicate::str::contains("1 patient(s)"));
}

#[tokio::test]
async fn test_bad_credentials_show_server_detail() {
    let server = MockServer::start().await;
    let session = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/token/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "No active account found with the given credentials"
        })))
        .mount(&server)
        .await;

    hms(&server, &session)
        .args(["login", "--email", "nurse@example.com", "--password", "wrong"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "No active account found with the given credentials",
        ));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let server = MockServer::start().await;
    let session = TempDir::new().unwrap();
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    login(&server, &session);

    hms(&server, &session)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"signed in:\s+yes").unwrap());

    hms(&server, &session).arg("logout").assert().success();

    hms(&server, &session)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"signed in:\s+no").unwrap());
}

#[tokio::test]
async fn test_token_refresh_stores_new_access_token() {
    let server = MockServer::start().await;
    let session = TempDir::new().unwrap();
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .and(body_json(json!({"refresh": "refresh-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "access-2"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/staff/doctors"))
        .and(header("authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "doctors": [],
            "count": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    login(&server, &session);

    hms(&server, &session)
        .args(["token", "refresh"])
        .assert()
        .success();

    hms(&server, &session)
        .args(["doctors", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No doctors found."));
}

#[tokio::test]
async fn test_token_refresh_without_session() {
    let server = MockServer::start().await;
    let session = TempDir::new().unwrap();

    hms(&server, &session)
        .args(["token", "refresh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hms login"));
}

// ============================================================================
// Appointments
// ============================================================================

#[tokio::test]
async fn test_book_appointment() {
    let server = MockServer::start().await;
    let session = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/patients/appointments"))
        .and(body_json(json!({
            "patient": 5,
            "doctor": 2,
            "date": "2024-12-15",
            "time": "10:00",
            "status": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "patient": 5,
            "doctor": 2,
            "date": "2024-12-15",
            "time": "10:00",
            "status": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    hms(&server, &session)
        .args([
            "appointments",
            "book",
            "--patient",
            "5",
            "--doctor",
            "2",
            "--date",
            "2024-12-15",
            "--time",
            "10:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment 11 booked"));
}

#[tokio::test]
async fn test_book_appointment_missing_fields() {
    let server = MockServer::start().await;
    let session = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    hms(&server, &session)
        .args(["appointments", "book", "--patient", "5", "--time", "10:00"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("doctor:"))
        .stderr(predicate::str::contains("date:"));
}

// ============================================================================
// Misc
// ============================================================================

#[tokio::test]
async fn test_delete_requires_yes_without_terminal() {
    let server = MockServer::start().await;
    let session = TempDir::new().unwrap();

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    hms(&server, &session)
        .args(["patients", "delete", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[tokio::test]
async fn test_delete_with_yes() {
    let server = MockServer::start().await;
    let session = TempDir::new().unwrap();

    Mock::given(method("DELETE"))
        .and(path("/patients/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    hms(&server, &session)
        .args(["patients", "delete", "3", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted patient 3"));
}

#[test]
fn test_config_show_uses_env_url() {
    let session = TempDir::new().unwrap();

    Command::cargo_bin("hms")
        .unwrap()
        .env("HMS_API_URL", "http://hms.example.test")
        .env("HMS_SESSION_DB", session.path().join("session.db"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://hms.example.test"));
}

#[test]
fn test_no_subcommand_prints_help() {
    Command::cargo_bin("hms")
        .unwrap()
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage"));
}
