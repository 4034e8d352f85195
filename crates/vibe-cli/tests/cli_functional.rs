//! Functional tests that spawn the `vibe` binary against session files.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vibe"))
        .args(args)
        .current_dir(dir)
        .env_remove("VIBE_LOG")
        .env_remove("VIBE_VALIDATION__EXPECTED_QUESTIONS")
        .output()
        .expect("failed to spawn vibe")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "vibe failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn write_session(dir: &Path, host: &[u8], guest: &[u8]) -> String {
    let catalog = json!([
        {"id": "q1", "text": "Pizza", "order_index": 1},
        {"id": "q2", "text": "Sushi", "order_index": 2},
        {"id": "q3", "text": "Burgers", "order_index": 3},
        {"id": "q4", "text": "Pasta", "order_index": 4},
        {"id": "q0", "text": "Tacos", "order_index": 0, "is_active": false}
    ]);

    let mut responses = Vec::new();
    for (role, bits) in [("host", host), ("guest", guest)] {
        for (index, bit) in bits.iter().enumerate() {
            responses.push(json!({
                "session_id": "room-42",
                "participant_id": format!("{role}-id"),
                "participant_role": role,
                "question_id": format!("q{}", index + 1),
                "answer": bit,
            }));
        }
    }

    let session = json!({
        "session_id": "room-42",
        "catalog": catalog,
        "responses": responses,
    });
    let path = dir.join("session.json");
    std::fs::write(&path, session.to_string()).expect("write session");
    path.to_string_lossy().into_owned()
}

#[test]
fn evaluate_scores_finished_session() {
    let dir = TempDir::new().unwrap();
    let file = write_session(dir.path(), &[1, 1, 0, 1], &[1, 1, 0, 1]);

    let value = stdout_json(&run_cli(dir.path(), &["evaluate", &file]));

    assert_eq!(value["status"], "ready");
    assert_eq!(value["result"]["match_percentage"], 100);
    assert_eq!(value["result"]["shared_item"], "Pizza");
    assert!(value["readiness"].is_null());
}

#[test]
fn evaluate_reports_progress_while_pending() {
    let dir = TempDir::new().unwrap();
    let file = write_session(dir.path(), &[1, 1], &[1, 1, 0, 1]);

    let value = stdout_json(&run_cli(dir.path(), &["evaluate", &file]));

    assert_eq!(value["status"], "pending");
    assert_eq!(value["readiness"]["total_expected"], 4);
    assert_eq!(value["readiness"]["host"]["percentage"], 50);
    assert_eq!(value["readiness"]["guest"]["completed"], true);
    assert_eq!(value["message"], "host has answered 2/4 questions");
    assert!(value["result"].is_null());
}

#[test]
fn validate_names_short_participant() {
    let dir = TempDir::new().unwrap();
    let file = write_session(dir.path(), &[1], &[1, 0, 0, 1]);

    let value = stdout_json(&run_cli(dir.path(), &["validate", &file, "--format", "raw"]));

    assert_eq!(value["valid"], false);
    assert_eq!(value["expected_questions"], 4);
    assert_eq!(value["message"], "host has answered 1/4 questions");
}

#[test]
fn expected_flag_overrides_catalog_size() {
    let dir = TempDir::new().unwrap();
    let file = write_session(dir.path(), &[1, 0], &[1, 1]);

    let value = stdout_json(&run_cli(dir.path(), &["validate", &file, "--expected", "2"]));
    assert_eq!(value["valid"], true);
}

#[test]
fn dotenv_in_working_directory_is_loaded() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "VIBE_VALIDATION__EXPECTED_QUESTIONS=2\n",
    )
    .unwrap();
    let file = write_session(dir.path(), &[1, 0], &[1, 1]);

    let value = stdout_json(&run_cli(dir.path(), &["validate", &file]));
    assert_eq!(value["valid"], true);
    assert_eq!(value["expected_questions"], 2);
}

#[test]
fn project_config_overrides_messages() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".vibe")).unwrap();
    std::fs::write(
        dir.path().join(".vibe/config.toml"),
        "[messages]\ndifferent_preferences = \"Opposites attract\"\n",
    )
    .unwrap();
    let file = write_session(dir.path(), &[1, 0, 0, 0], &[0, 1, 0, 0]);

    let value = stdout_json(&run_cli(dir.path(), &["calculate", &file]));

    assert_eq!(value["shared_item"], "Opposites attract");
    assert_eq!(value["shared_item_kind"], "different_preferences");
    assert_eq!(value["match_percentage"], 50);
}

#[test]
fn calculate_without_responses_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_session(dir.path(), &[], &[]);

    let output = run_cli(dir.path(), &["calculate", &file]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("both players must have responses"), "{stderr}");
}

#[test]
fn malformed_session_is_rejected_at_boundary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"session_id": "room-42", "responses": []}"#).unwrap();

    let output = run_cli(dir.path(), &["evaluate", &path.to_string_lossy()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid session input"), "{stderr}");
}

#[test]
fn schema_lists_and_prints() {
    let dir = TempDir::new().unwrap();

    let names = stdout_json(&run_cli(dir.path(), &["schema"]));
    assert!(
        names
            .as_array()
            .unwrap()
            .contains(&Value::String("match_result".into()))
    );

    let schema = stdout_json(&run_cli(dir.path(), &["schema", "match_result"]));
    assert!(schema["properties"]["shared_item"].is_object());

    let unknown = run_cli(dir.path(), &["schema", "room"]);
    assert!(!unknown.status.success());
}

#[test]
fn table_format_prints_flattened_keys() {
    let dir = TempDir::new().unwrap();
    let file = write_session(dir.path(), &[1, 1, 0, 0], &[1, 1, 1, 1]);

    let output = run_cli(dir.path(), &["evaluate", &file, "--format", "table", "--color", "never"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("result.match_percentage"));
    assert!(stdout.contains("50"));
}
