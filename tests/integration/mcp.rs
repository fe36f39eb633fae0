use predicates::prelude::*;
use serde_json::{Value, json};

use crate::common::TestProject;

const MCP_FILE: &str = ".cursor/mcp.json";

fn read_json(project: &TestProject) -> Value {
    serde_json::from_str(&project.read(MCP_FILE)).unwrap()
}

#[test]
fn test_set_creates_registry() {
    let project = TestProject::new();

    project
        .leagueops()
        .args([
            "mcp",
            "set",
            "github",
            "--url",
            "https://api.githubcopilot.com/mcp/",
            "--header",
            "Authorization=Bearer ghp_x",
            "--description",
            "GitHub tools",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added MCP server 'github'"));

    assert_eq!(
        read_json(&project),
        json!({
            "mcpServers": {
                "github": {
                    "type": "http",
                    "url": "https://api.githubcopilot.com/mcp/",
                    "headers": { "Authorization": "Bearer ghp_x" },
                    "description": "GitHub tools"
                }
            }
        })
    );
    assert!(project.read(MCP_FILE).ends_with("}\n"));
    assert!(project.backups_of(MCP_FILE).is_empty());
}

#[test]
fn test_supabase_uses_environment() {
    let project = TestProject::new();
    project.write(MCP_FILE, "{\n  \"editor\": {\"theme\": \"dark\"},\n  \"mcpServers\": {}\n}\n");

    project
        .leagueops()
        .args(["mcp", "supabase"])
        .env("SUPABASE_PROJECT_REF", "abcd1234")
        .env("SUPABASE_ACCESS_TOKEN", "sbp_secret")
        .assert()
        .success();

    let doc = read_json(&project);
    assert_eq!(doc["editor"], json!({ "theme": "dark" }));
    assert_eq!(doc["mcpServers"]["supabase"]["url"], "https://mcp.supabase.com/mcp?project_ref=abcd1234");
    assert_eq!(doc["mcpServers"]["supabase"]["headers"]["Authorization"], "Bearer sbp_secret");
    assert_eq!(project.backups_of(MCP_FILE).len(), 1);
}

#[test]
fn test_supabase_reads_env_file() {
    let project = TestProject::new();
    project.write("ops.env", "SUPABASE_PROJECT_REF=fromfile\nSUPABASE_ACCESS_TOKEN=sbp_file\n");

    project.leagueops().args(["--env-file", "ops.env", "mcp", "supabase"]).assert().success();

    assert_eq!(
        read_json(&project)["mcpServers"]["supabase"]["url"],
        "https://mcp.supabase.com/mcp?project_ref=fromfile"
    );
}

#[test]
fn test_supabase_without_settings_fails() {
    let project = TestProject::new();

    project
        .leagueops()
        .args(["mcp", "supabase"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SUPABASE_PROJECT_REF"));
}

#[test]
fn test_set_replaces_entry_and_keeps_siblings_in_order() {
    let project = TestProject::new();
    project.write(
        MCP_FILE,
        r#"{"mcpServers": {"a": {"command": "node"}, "b": {"type": "http", "url": "https://old", "keep": false}, "c": {"type": "http", "url": "https://c"}}}"#,
    );

    project
        .leagueops()
        .args(["mcp", "set", "b", "--url", "https://new", "--type", "streamable-http"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let doc = read_json(&project);
    let names: Vec<_> = doc["mcpServers"].as_object().unwrap().keys().cloned().collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(doc["mcpServers"]["b"], json!({ "type": "streamable-http", "url": "https://new" }));
    assert_eq!(doc["mcpServers"]["a"], json!({ "command": "node" }));
}

#[test]
fn test_list_and_remove() {
    let project = TestProject::new();
    project.write(
        MCP_FILE,
        r#"{"mcpServers": {"local": {"command": "node"}, "remote": {"type": "http", "url": "https://remote"}}}"#,
    );

    project
        .leagueops()
        .args(["mcp", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remote (http) https://remote"))
        .stdout(predicate::str::contains("local (unrecognised entry)"));

    project.leagueops().args(["mcp", "remove", "remote"]).assert().success();
    assert!(read_json(&project)["mcpServers"].get("remote").is_none());

    project
        .leagueops()
        .args(["mcp", "remove", "remote"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to remove"));
}

#[test]
fn test_invalid_json_is_left_untouched() {
    let project = TestProject::new();
    project.write(MCP_FILE, "{ not json");

    project
        .leagueops()
        .args(["mcp", "set", "x", "--url", "https://x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));

    assert_eq!(project.read(MCP_FILE), "{ not json");
    assert!(project.backups_of(MCP_FILE).is_empty());
}

#[test]
fn test_custom_file_and_dry_run() {
    let project = TestProject::new();
    project.write("editor/mcp.json", "{}");

    project
        .leagueops()
        .args(["mcp", "--file", "editor/mcp.json", "set", "x", "--url", "https://x", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"url\": \"https://x\""));

    assert_eq!(project.read("editor/mcp.json"), "{}");
}
