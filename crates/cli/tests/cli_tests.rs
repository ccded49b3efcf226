//! CLI integration tests
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use predicates::prelude::*;
use tempfile::TempDir;

/// Nothing listens on the discard port, so a cache miss fails fast.
const OFFLINE_BASE_URL: &str = "http://127.0.0.1:9/user/show/";

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("shelfwise");
    cmd.env_remove("GOODREADS_USER").env_remove("RUST_LOG");
    cmd
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

/// A cache directory holding `fixture` as the page for `id`.
fn seeded_cache(id: &str, fixture: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::copy(get_fixture_path(fixture), tmp.path().join(format!("user_{}.html", id))).unwrap();
    tmp
}

fn offline(cmd: &mut assert_cmd::Command, cache: &TempDir) {
    cmd.args(["--base-url", OFFLINE_BASE_URL, "--timeout", "2", "--cache-dir"])
        .arg(cache.path());
}

/// Serves one canned response on an ephemeral local port and returns the
/// profile base URL pointing at it.
fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/user/show/", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0_u8; 4096];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let size = stream.read(&mut buf).unwrap();
            if size == 0 {
                break;
            }
            request.extend_from_slice(&buf[..size]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.write_all(body.as_bytes()).unwrap();
    });

    (base_url, handle)
}

#[test]
fn test_cli_cached_profile_text() {
    let cache = seeded_cache("12345", "profile.html");
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.args(["--user", "12345"])
        .assert()
        .success()
        .stdout(
            "Extract Data for User: Jane Doe\n\
             Shelves: [read (312), currently-reading (3), to-read (1045), Sci-Fi & Fantasy (87)]\n",
        )
        .stderr(predicate::str::contains("Loading from local cache"));
}

#[test]
fn test_cli_user_from_env() {
    let cache = seeded_cache("12345", "profile.html");
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.env("GOODREADS_USER", "12345")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"));
}

#[test]
fn test_cli_flag_overrides_env() {
    let cache = seeded_cache("777", "private_profile.html");
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.env("GOODREADS_USER", "12345")
        .args(["--user", "777"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User name not found"));
}

#[test]
fn test_cli_user_from_prompt() {
    let cache = seeded_cache("12345", "profile.html");
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.write_stdin("12345\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stderr(predicate::str::contains("Enter Goodreads ID:"));
}

#[test]
fn test_cli_private_profile() {
    let cache = seeded_cache("777", "private_profile.html");
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.args(["-u", "777"])
        .assert()
        .success()
        .stdout("Extract Data for User: User name not found\nShelves: []\n")
        .stderr(predicate::str::contains("may be private"));
}

#[test]
fn test_cli_json_format() {
    let cache = seeded_cache("12345", "profile.html");
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    let output = cmd.args(["-u", "12345", "-f", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Jane Doe");
    assert_eq!(value["shelves"].as_array().unwrap().len(), 4);
    assert_eq!(value["shelves"][0]["count"], 312);
}

#[test]
fn test_cli_total() {
    let cache = seeded_cache("12345", "profile.html");
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.args(["-u", "12345", "--total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1447 books"));
}

#[test]
fn test_cli_output_file() {
    let cache = seeded_cache("12345", "profile.html");
    let output = cache.path().join("out.txt");
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.args(["-u", "12345", "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(output).unwrap();
    assert!(written.starts_with("Extract Data for User: Jane Doe"));
}

#[test]
fn test_cli_verbose() {
    let cache = seeded_cache("12345", "profile.html");
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.args(["-v", "-u", "12345"])
        .assert()
        .success()
        .stderr(predicate::str::contains("shelfwise"))
        .stderr(predicate::str::contains("Size:"));
}

#[test]
fn test_cli_invalid_identifier() {
    let cache = TempDir::new().unwrap();
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.args(["-u", "../../etc/passwd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Goodreads ID"));
}

#[test]
fn test_cli_empty_prompt_fails() {
    let cache = TempDir::new().unwrap();
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.write_stdin("").assert().failure();
}

#[test]
fn test_cli_network_failure_is_fatal() {
    let cache = TempDir::new().unwrap();
    let mut cmd = cmd();
    offline(&mut cmd, &cache);

    cmd.args(["-u", "404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fetching from Goodreads"))
        .stderr(predicate::str::contains("Failed to load profile 404"));

    assert!(!cache.path().join("user_404.html").exists());
}

#[test]
fn test_cli_invalid_format() {
    cmd().args(["-u", "1", "-f", "yaml"]).assert().failure();
}

#[test]
fn test_cli_cache_miss_fetches_then_caches() {
    let cache = TempDir::new().unwrap();
    let page = std::fs::read_to_string(get_fixture_path("profile.html")).unwrap();
    let (base_url, server) = serve_once("200 OK", page.clone());

    cmd()
        .args(["-u", "12345", "--base-url", &base_url, "--timeout", "5", "--cache-dir"])
        .arg(cache.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract Data for User: Jane Doe"))
        .stderr(predicate::str::contains("Fetching from Goodreads"));
    server.join().unwrap();

    let cached = std::fs::read_to_string(cache.path().join("user_12345.html")).unwrap();
    assert_eq!(cached, page);

    let mut cmd = cmd();
    offline(&mut cmd, &cache);
    cmd.args(["-u", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stderr(predicate::str::contains("Loading from local cache"));
}

#[test]
fn test_cli_error_status_page_is_parsed_by_default() {
    let cache = TempDir::new().unwrap();
    let page = std::fs::read_to_string(get_fixture_path("private_profile.html")).unwrap();
    let (base_url, server) = serve_once("404 Not Found", page);

    cmd()
        .args(["-u", "777", "--base-url", &base_url, "--timeout", "5", "--cache-dir"])
        .arg(cache.path())
        .assert()
        .success()
        .stdout("Extract Data for User: User name not found\nShelves: []\n");
    server.join().unwrap();

    assert!(cache.path().join("user_777.html").exists());
}

#[test]
fn test_cli_strict_rejects_error_status() {
    let cache = TempDir::new().unwrap();
    let page = std::fs::read_to_string(get_fixture_path("profile.html")).unwrap();
    let (base_url, server) = serve_once("404 Not Found", page);

    cmd()
        .args(["-u", "12345", "--strict", "--base-url", &base_url, "--timeout", "5", "--cache-dir"])
        .arg(cache.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("HTTP 404"));
    server.join().unwrap();

    assert!(!cache.path().join("user_12345.html").exists());
}
