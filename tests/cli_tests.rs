mod common;

use assert_cmd::Command;
use common::{CategoriesReply, StubConfig};
use predicates::prelude::*;
use tempfile::TempDir;

fn trivia_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("trivia"));
    cmd.env_remove("TRIVIA_API_URL");
    cmd
}

/// Command running in an empty directory against `base_url`.
fn against(base_url: &str, temp_dir: &TempDir) -> Command {
    let mut cmd = trivia_cmd();
    cmd.current_dir(temp_dir.path()).args(["--api-url", base_url]);
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    trivia_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trivia questions"));
}

#[test]
fn test_version() {
    trivia_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trivia"));
}

#[test]
fn test_add_rejects_out_of_range_difficulty() {
    trivia_cmd()
        .args(["add", "-q", "Q", "-a", "A", "-d", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Difficulty must be between 1 and 5"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    trivia_cmd()
        .args(["init", "--api-url", "http://quiz.local:8080"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let config = std::fs::read_to_string(temp_dir.path().join(".trivia.yml")).unwrap();
    assert!(config.contains("http://quiz.local:8080"));
    assert!(config.contains("/categories"));
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();

    trivia_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    trivia_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_rejects_bad_url() {
    let temp_dir = TempDir::new().unwrap();

    trivia_cmd()
        .args(["init", "--api-url", "not a url"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();

    assert!(!temp_dir.path().join(".trivia.yml").exists());
}

#[test]
fn test_config_file_is_used() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".trivia.yml"),
        format!("api:\n  base_url: {}\n", stub.base_url),
    )
    .unwrap();
    let nested = temp_dir.path().join("sub");
    std::fs::create_dir_all(&nested).unwrap();

    trivia_cmd()
        .arg("categories")
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("Science"));
}

#[test]
fn test_api_url_flag_overrides_config_file() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".trivia.yml"),
        "api:\n  base_url: http://127.0.0.1:9\n  timeout_secs: 5\n",
    )
    .unwrap();

    trivia_cmd()
        .args(["--api-url", stub.base_url.as_str(), "categories"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Science"));
}

#[test]
fn test_api_url_env_overrides_config_file() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".trivia.yml"),
        "api:\n  base_url: http://127.0.0.1:9\n  timeout_secs: 5\n",
    )
    .unwrap();

    trivia_cmd()
        .env("TRIVIA_API_URL", &stub.base_url)
        .arg("categories")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Science"));
}

#[test]
fn test_dead_config_url_fails_without_override() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".trivia.yml"),
        "api:\n  base_url: http://127.0.0.1:9\n  timeout_secs: 5\n",
    )
    .unwrap();

    trivia_cmd()
        .arg("categories")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to load categories"));
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn test_categories_lists_names() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();

    against(&stub.base_url, &temp_dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Science")
                .and(predicate::str::contains("Art"))
                .and(predicate::str::contains("Sports")),
        );
}

#[test]
fn test_categories_json() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();

    let output = against(&stub.base_url, &temp_dir)
        .args(["categories", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["10"], "Sports");
}

#[test]
fn test_categories_malformed_prints_placeholder() {
    let stub = common::start(StubConfig {
        categories: CategoriesReply::Body(serde_json::json!({"success": true})),
        ..StubConfig::default()
    });
    let temp_dir = TempDir::new().unwrap();

    against(&stub.base_url, &temp_dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories available"));
}

#[test]
fn test_categories_server_error_fails() {
    let stub = common::start(StubConfig {
        categories: CategoriesReply::Status(404),
        ..StubConfig::default()
    });
    let temp_dir = TempDir::new().unwrap();

    against(&stub.base_url, &temp_dir)
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to load categories"));
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_posts_question() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();

    against(&stub.base_url, &temp_dir)
        .args(["add", "-q", "Largest ocean?", "-a", "Pacific", "-d", "3", "-c", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added").and(predicate::str::contains("42")));

    assert_eq!(
        stub.received(),
        vec![serde_json::json!({
            "question": "Largest ocean?",
            "answer": "Pacific",
            "difficulty": 3,
            "category": 1,
        })]
    );
}

#[test]
fn test_add_failure_exits_non_zero() {
    let stub = common::start(StubConfig {
        add_status: 422,
        ..StubConfig::default()
    });
    let temp_dir = TempDir::new().unwrap();

    against(&stub.base_url, &temp_dir)
        .args(["add", "-q", "Q", "-a", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to add question").and(predicate::str::contains("422")));
}

// =============================================================================
// Browsing
// =============================================================================

#[test]
fn test_questions_and_search() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();

    against(&stub.base_url, &temp_dir)
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jupiter").and(predicate::str::contains("Leonardo")));

    against(&stub.base_url, &temp_dir)
        .args(["search", "mona"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 results"));

    against(&stub.base_url, &temp_dir)
        .args(["search", "volcano"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions found"));
}

#[test]
fn test_by_category_names_category() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();

    against(&stub.base_url, &temp_dir)
        .args(["by-category", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Science").and(predicate::str::contains("Mercury")));
}

#[test]
fn test_delete_with_force() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();

    against(&stub.base_url, &temp_dir)
        .args(["delete", "2", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
}

#[test]
fn test_delete_cancelled() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();

    against(&stub.base_url, &temp_dir)
        .args(["delete", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));
}

#[test]
fn test_quiz_json_and_exhaustion() {
    let stub = common::start(StubConfig::default());
    let temp_dir = TempDir::new().unwrap();

    let output = against(&stub.base_url, &temp_dir)
        .args(["quiz", "--category", "2", "--json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["answer"], "Leonardo");

    against(&stub.base_url, &temp_dir)
        .args(["quiz", "--category", "2", "--previous", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions left"));
}
