//! End-to-end tests for the `edgeblocks` binary.

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::prelude::*;
use tempfile::TempDir;

const QUERY_PATH: &str = "/graphql/execute.json/wknd/adventures-all";

const ITEMS: &str = r#"{"data":{"adventureList":{"items":[
    {"_path":"/content/dam/wknd/en/adventures/bali","title":"Bali Surf Camp",
     "slug":{"plaintext":"Surf the south shore"},
     "primaryImage":{"_dynamicUrl":"/adobe/dynamicmedia/deliver/bali.jpg",
                     "_authorUrl":"https://author-p1.example.com/content/dam/bali.jpg",
                     "_publishUrl":"https://publish-p1.example.com/content/dam/bali.jpg",
                     "width":1600,"height":1200,"mimeType":"image/jpeg"}}
]}}}"#;

/// Binary isolated from the developer's own config file and log settings.
struct Harness {
    home: TempDir,
}

impl Harness {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("edgeblocks").unwrap();
        cmd.env_remove("RUST_LOG")
            .env_remove("NO_COLOR")
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path())
            .current_dir(self.home.path());
        cmd
    }
}

#[test]
fn help_lists_subcommands() {
    Harness::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("adventures"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    Harness::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_url_is_usage_error() {
    Harness::new()
        .cmd()
        .arg("adventures")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<URL>"));
}

#[test]
fn adventures_render_list_from_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path(QUERY_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(ITEMS);
    });

    Harness::new()
        .cmd()
        .args(["--output-format", "plain", "adventures", &server.url(QUERY_PATH)])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<div class="adventures-list"><ul>"#))
        .stdout(predicate::str::contains(r#"alt="Bali Surf Camp""#))
        .stdout(predicate::str::contains(
            r#"src="https://127.0.0.1/adobe/dynamicmedia/deliver/bali.jpg""#,
        ));

    mock.assert();
}

#[test]
fn unreachable_endpoint_still_succeeds_with_empty_block() {
    Harness::new()
        .cmd()
        .args([
            "--output-format",
            "plain",
            "adventures",
            "http://127.0.0.1:9/graphql/execute.json/q",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("<div class=\"adventures-list\"></div>\n"));
}

#[test]
fn relative_link_resolves_against_configured_base() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path(QUERY_PATH);
        then.status(200).body(ITEMS);
    });

    Harness::new()
        .cmd()
        .env("EDGEBLOCKS__PAGE__BASE_URL", server.url("/en/index.html"))
        .args(["--output-format", "plain", "adventures", QUERY_PATH])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bali Surf Camp"));

    mock.assert();
}

#[test]
fn categories_send_configured_credentials_and_cache_killer() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path(QUERY_PATH)
            .query_param_exists("ck")
            .header("authorization", "Bearer secret");
        then.status(200).body(ITEMS);
    });

    Harness::new()
        .cmd()
        .env("EDGEBLOCKS__HTTP__BEARER_TOKEN", "secret")
        .args(["--output-format", "plain", "categories", &server.url(QUERY_PATH)])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<div class="category-list">"#))
        .stdout(predicate::str::contains("Surf the south shore"))
        .stdout(predicate::str::contains(
            "https://publish-p1.example.com/adobe/dynamicmedia/deliver/bali.jpg",
        ));

    mock.assert();
}

#[test]
fn categories_in_editor_use_author_images() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path(QUERY_PATH);
        then.status(200).body(ITEMS);
    });

    Harness::new()
        .cmd()
        .args([
            "--output-format",
            "plain",
            "categories",
            &server.url(QUERY_PATH),
            "--ancestor-origin",
            "https://experience.adobe.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"src="https://author-p1.example.com/content/dam/bali.jpg""#,
        ));
}

#[test]
fn categories_failure_leaves_empty_wrapper() {
    Harness::new()
        .cmd()
        .args([
            "--output-format",
            "plain",
            "categories",
            "http://127.0.0.1:9/graphql/execute.json/q",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<div class="contentfragmentlist"><div class="category-list"></div></div>"#,
        ));
}

#[test]
fn invalid_ancestor_origin_is_user_error() {
    Harness::new()
        .cmd()
        .args([
            "categories",
            "https://x.test/q",
            "--ancestor-origin",
            "experience",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid ancestor origin"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn json_output_is_element_tree() {
    let output = Harness::new()
        .cmd()
        .args([
            "--output-format",
            "json",
            "adventures",
            "http://127.0.0.1:9/q",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["tag"], "div");
    assert_eq!(tree["children"].as_array().map(Vec::len), Some(0));
}

#[test]
fn explicit_missing_config_is_configuration_error() {
    Harness::new()
        .cmd()
        .args(["--config", "does-not-exist.toml", "config", "show"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_show_masks_secrets() {
    Harness::new()
        .cmd()
        .env("EDGEBLOCKS__HTTP__COOKIE", "login-token=abc")
        .args(["--output-format", "plain", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cookie = \"********\""))
        .stdout(predicate::str::contains("login-token").not());
}

#[test]
fn config_path_names_toml_file() {
    Harness::new()
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_generate_for_bash() {
    Harness::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("edgeblocks"));
}
