//! Integration tests for the `squeakdash` CLI binary.
//!
//! Parsing, help, completions and config handling run without any admin
//! service; the rest run against a wiremock stand-in.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `squeakdash` binary with env isolation.
///
/// Clears all `SQUEAKDASH_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn squeakdash_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("squeakdash");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SQUEAKDASH_PROFILE")
        .env_remove("SQUEAKDASH_HOST")
        .env_remove("SQUEAKDASH_PORT")
        .env_remove("SQUEAKDASH_OUTPUT")
        .env_remove("SQUEAKDASH_TIMEOUT");
    cmd
}

/// Isolated command with a throwaway, nonexistent home.
fn isolated_cmd() -> assert_cmd::Command {
    squeakdash_cmd(Path::new("/tmp/squeakdash-cli-test-nonexistent"))
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn rpc_path(method: &str) -> String {
    format!("/squeak_admin.SqueakAdmin/{method}")
}

async fn reply(server: &MockServer, rpc: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(rpc_path(rpc)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Run the binary against `server`, off the async runtime.
async fn run_against(server: &MockServer, args: &[&str]) -> std::process::Output {
    let port = server.address().port().to_string();
    let mut cmd = isolated_cmd();
    cmd.args(["--host", "127.0.0.1", "--port", &port, "--timeout", "5"])
        .args(args);
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

fn peers_reply() -> serde_json::Value {
    json!({
        "squeakPeers": [
            {
                "peerId": "7",
                "peerName": "alice",
                "host": "10.0.0.7",
                "port": 8555,
                "uploading": true,
                "downloading": false
            },
            { "peerId": 9, "host": "10.0.0.9" }
        ]
    })
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = isolated_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    isolated_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("squeaknode")
            .and(predicate::str::contains("profiles"))
            .and(predicate::str::contains("peers"))
            .and(predicate::str::contains("lightning-peers")),
    );
}

#[test]
fn test_version_flag() {
    isolated_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("squeakdash"));
}

#[test]
fn test_completions_zsh() {
    isolated_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_bash() {
    isolated_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Argument errors ─────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = isolated_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = isolated_cmd()
        .args(["--output", "yaml", "peers", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_toggle_requires_on_or_off() {
    let output = isolated_cmd()
        .args(["peers", "uploading", "7", "maybe"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_delete_without_yes_is_refused() {
    let output = isolated_cmd().args(["peers", "delete", "7"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("--yes"), "Expected hint about --yes:\n{text}");
}

#[test]
fn test_unknown_profile_without_host() {
    let output = isolated_cmd()
        .args(["--profile", "office", "peers", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("office"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_init_then_show() {
    let home = tempfile::tempdir().unwrap();

    squeakdash_cmd(home.path())
        .args([
            "config",
            "init",
            "--name",
            "home",
            "--admin-host",
            "node.local",
            "--admin-port",
            "9000",
        ])
        .assert()
        .success();

    squeakdash_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("default_profile = \"home\"")
                .and(predicate::str::contains("node.local"))
                .and(predicate::str::contains("9000")),
        );

    squeakdash_cmd(home.path())
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("home *"));
}

#[test]
fn test_config_init_needs_host_when_not_interactive() {
    let home = tempfile::tempdir().unwrap();
    let output = squeakdash_cmd(home.path())
        .args(["config", "init"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("admin-host"));
}

#[test]
fn test_config_use_unknown_profile() {
    let home = tempfile::tempdir().unwrap();
    let output = squeakdash_cmd(home.path())
        .args(["config", "use", "office"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

// ── Against an admin service ────────────────────────────────────────

#[test]
fn test_unreachable_service_exits_with_connection_code() {
    let output = isolated_cmd()
        .args(["--host", "127.0.0.1", "--port", "9", "--timeout", "2", "hello"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_hello_prints_greeting() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(rpc_path("SayHello")))
        .and(body_json(json!({ "name": "World" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Hello, World!" })))
        .mount(&server)
        .await;

    let output = run_against(&server, &["hello"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Hello, World!");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_peers_list_plain() {
    let server = MockServer::start().await;
    reply(&server, "GetPeers", peers_reply()).await;

    let output = run_against(&server, &["-o", "plain", "peers", "list"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "7\talice\t10.0.0.7\t8555\ttrue\tfalse\n9\tunknown\t10.0.0.9\tunknown\tfalse\tfalse\n"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_peers_open_prints_path() {
    let server = MockServer::start().await;
    reply(&server, "GetPeers", peers_reply()).await;

    let output = run_against(&server, &["peers", "open", "2"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "/app/peer/9");

    let output = run_against(&server, &["peers", "open", "3"]).await;
    assert_eq!(output.status.code(), Some(4));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_delete_reports_alert() {
    let server = MockServer::start().await;
    reply(&server, "GetPeers", peers_reply()).await;
    Mock::given(method("POST"))
        .and(path(rpc_path("DeletePeer")))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "code": 2, "message": "db locked" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, &["--yes", "peers", "delete", "7"]).await;
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(
        text.contains("Error deleting peer: db locked"),
        "Expected alert text:\n{text}"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_successful_toggle_refetches_peers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(rpc_path("GetPeers")))
        .respond_with(ResponseTemplate::new(200).set_body_json(peers_reply()))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(rpc_path("SetPeerDownloading")))
        .and(body_json(json!({ "peerId": 7, "downloading": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, &["-o", "plain", "peers", "downloading", "7", "on"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stdout).contains("alice"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_lightning_peer_open_uses_parsed_address() {
    let server = MockServer::start().await;
    reply(
        &server,
        "LndListPeers",
        json!({
            "peers": [
                { "pubKey": "02abc", "address": "1.2.3.4:9735", "inbound": true },
                { "pubKey": "03def" }
            ]
        }),
    )
    .await;

    let output = run_against(&server, &["lightning-peers", "open", "1"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "/app/lightningnode/02abc/1.2.3.4/9735"
    );

    let output = run_against(&server, &["lightning-peers", "open", "2"]).await;
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "/app/lightningnode/03def/unknown/unknown"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_screen_with_every_read_failing_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "code": 14, "message": "down" })),
        )
        .mount(&server)
        .await;

    let output = run_against(&server, &["wallet"]).await;
    assert_eq!(output.status.code(), Some(7));
    assert!(combined_output(&output).contains("wallet"));
}

async fn profiles_replies(server: &MockServer) {
    reply(server, "SayHello", json!({ "message": "Hello, World!" })).await;
    reply(server, "LndGetInfo", json!({ "alias": "node-a", "blockHeight": 700000 })).await;
    reply(
        server,
        "GetFollowedSqueakDisplays",
        json!({ "squeakDisplayEntries": [{
            "squeakHash": "aa11", "isUnlocked": true, "contentStr": "gm",
            "blockHeight": 700001, "isAuthorKnown": true, "authorName": "Alice"
        }]}),
    )
    .await;
    reply(
        server,
        "GetSigningProfiles",
        json!({ "squeakProfiles": [
            { "profileId": 1, "profileName": "Alice", "address": "1alice",
              "following": true, "sharing": true }
        ]}),
    )
    .await;
    reply(server, "GetContactProfiles", json!({})).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_profiles_json_includes_node_and_squeaks() {
    let server = MockServer::start().await;
    profiles_replies(&server).await;

    let output = run_against(&server, &["-o", "json", "profiles", "list"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(view["greeting"], "Hello, World!");
    assert_eq!(view["node"][0], json!({ "Field": "Alias", "Value": "node-a" }));
    assert_eq!(
        view["squeaks"],
        json!([{ "Hash": "aa11", "Author": "Alice", "Content": "gm", "Block": "700001" }])
    );
    assert_eq!(view["signing"][0]["Name"], "Alice");
    assert_eq!(view["contacts"], json!([]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_profiles_table_shows_node_and_squeak_sections() {
    let server = MockServer::start().await;
    profiles_replies(&server).await;

    let output = run_against(&server, &["profiles", "list"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["Node", "node-a", "Followed squeaks", "gm", "Signing profiles"] {
        assert!(stdout.contains(needle), "missing {needle:?} in:\n{stdout}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_signing_profile_refetches_profiles() {
    let server = MockServer::start().await;
    profiles_replies(&server).await;
    Mock::given(method("POST"))
        .and(path(rpc_path("CreateSigningProfile")))
        .and(body_json(json!({ "profileName": "carol" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "profileId": 2 })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, &["profiles", "create-signing", "carol"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("Created signing profile 'carol'"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_add_contact_sends_address() {
    let server = MockServer::start().await;
    profiles_replies(&server).await;
    Mock::given(method("POST"))
        .and(path(rpc_path("CreateContactProfile")))
        .and(body_json(json!({ "profileName": "dave", "address": "1dave" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "profileId": 3 })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, &["profiles", "add-contact", "dave", "1dave"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_sharing_toggle_reports_alert() {
    let server = MockServer::start().await;
    profiles_replies(&server).await;
    Mock::given(method("POST"))
        .and(path(rpc_path("SetSqueakProfileSharing")))
        .and(body_json(json!({ "profileId": 1, "sharing": false })))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "code": 5, "message": "profile not found" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(rpc_path("SetSqueakProfileFollowing")))
        .and(body_json(json!({ "profileId": 1, "following": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, &["profiles", "sharing", "1", "off"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("Error updating profile sharing: profile not found"));

    let output = run_against(&server, &["profiles", "following", "1", "off"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("Unfollowed profile 1"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_peers_create_with_port() {
    let server = MockServer::start().await;
    reply(&server, "GetPeers", peers_reply()).await;
    Mock::given(method("POST"))
        .and(path(rpc_path("CreatePeer")))
        .and(body_json(json!({ "peerName": "relay", "host": "relay.example", "port": 8774 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "peerId": 11 })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(
        &server,
        &["peers", "create", "relay", "relay.example", "8774"],
    )
    .await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("Created peer 'relay'"));
}
