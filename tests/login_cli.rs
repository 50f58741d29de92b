use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;

fn authc() -> Command {
    let mut cmd = Command::cargo_bin("authc").unwrap();
    cmd.env_remove("AUTHC_API_URL").env_remove("AUTHC_PASSWORD");
    cmd
}

#[test]
fn test_login_prints_token() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("POST", "/api/login")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "code": 0,
                "message": "Login successful",
                "data": { "token": "abc-123", "username": "admin" }
            }"#,
        )
        .create();

    authc()
        .args([
            "login",
            "--username",
            "admin",
            "--password",
            "123456",
            "--api-url",
            &format!("{}/api", url),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin"))
        .stdout(predicate::str::contains("abc-123"));

    mock.assert();
}

#[test]
fn test_login_rejected_surfaces_backend_message() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("POST", "/api/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "bad credentials"}"#)
        .create();

    authc()
        .args([
            "login",
            "-u",
            "admin",
            "-p",
            "wrong",
            "--api-url",
            &format!("{}/api", url),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad credentials"));

    mock.assert();
}

#[test]
fn test_login_unreachable_backend_reports_network_error() {
    authc()
        .args([
            "login",
            "-u",
            "admin",
            "-p",
            "123456",
            "--api-url",
            "http://127.0.0.1:9/api",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "network error, check the backend service",
        ));
}

#[test]
fn test_login_invalid_api_url_reports_request_error() {
    authc()
        .args([
            "login",
            "-u",
            "admin",
            "-p",
            "123456",
            "--api-url",
            "not a url",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request configuration error"));
}

#[test]
fn test_password_from_environment() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("POST", "/api/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": 0, "data": { "token": "t", "username": "admin" }}"#)
        .create();

    authc()
        .env("AUTHC_PASSWORD", "123456")
        .args([
            "login",
            "-u",
            "admin",
            "--api-url",
            &format!("{}/api", url),
        ])
        .assert()
        .success();

    mock.assert();
}
