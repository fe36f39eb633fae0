use crate::core::LeagueOpsError;
use crate::mcp::{McpConfig, McpServerConfig, ServerListing, TransportType};
use serde_json::{Value, json};
use std::fs;
use tempfile::tempdir;

use super::write_mcp_file;

fn supabase() -> McpServerConfig {
    McpServerConfig::supabase("abcd", "sbp_1")
}

#[test]
fn test_mcp_config_load_nonexistent() {
    let temp = tempdir().unwrap();
    let path = temp.path().join(".cursor").join("mcp.json");

    let config = McpConfig::load_or_default(&path).unwrap();
    assert!(config.servers().is_empty());
    assert_eq!(config.to_pretty_string().unwrap(), "{}\n");
}

#[test]
fn test_mcp_config_load_invalid_json() {
    let temp = tempdir().unwrap();
    let path = write_mcp_file(temp.path(), "invalid json {");

    let err = McpConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err.downcast_ref::<LeagueOpsError>(), Some(LeagueOpsError::InvalidJson { .. })));
}

#[test]
fn test_non_object_servers_is_an_error() {
    let temp = tempdir().unwrap();
    let path = write_mcp_file(temp.path(), r#"{"mcpServers": []}"#);

    let err = McpConfig::load_or_default(&path).unwrap_err();
    assert!(err.to_string().contains("mcpServers"));
}

#[test]
fn test_set_creates_file_with_stable_format() {
    let temp = tempdir().unwrap();
    let path = temp.path().join(".cursor").join("mcp.json");

    let mut config = McpConfig::load_or_default(&path).unwrap();
    assert!(!config.set_server("supabase", &supabase()).unwrap());
    let backup = config.save().unwrap();

    assert!(backup.is_none());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("{\n  \"mcpServers\": {\n    \"supabase\": {\n      \"type\": \"http\""));
    assert!(written.ends_with("}\n"));
}

#[test]
fn test_set_preserves_unknown_keys_and_order() {
    let temp = tempdir().unwrap();
    let path = write_mcp_file(
        temp.path(),
        r#"{
  "zeta": true,
  "mcpServers": {
    "local": { "command": "node", "args": ["server.js"] },
    "supabase": { "type": "http", "url": "https://old", "extra": 1 },
    "github": { "type": "http", "url": "https://api.githubcopilot.com/mcp/" }
  },
  "alpha": { "nested": [1, 2] }
}
"#,
    );

    let mut config = McpConfig::load_or_default(&path).unwrap();
    assert!(config.set_server("supabase", &supabase()).unwrap());
    config.save().unwrap();

    let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let top: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    assert_eq!(top, vec!["zeta", "mcpServers", "alpha"]);

    let servers = doc["mcpServers"].as_object().unwrap();
    let names: Vec<_> = servers.keys().cloned().collect();
    assert_eq!(names, vec!["local", "supabase", "github"]);

    assert_eq!(servers["local"], json!({ "command": "node", "args": ["server.js"] }));
    assert_eq!(doc["alpha"], json!({ "nested": [1, 2] }));
    assert!(servers["supabase"].get("extra").is_none(), "entry must be replaced, not merged");
}

#[test]
fn test_save_backs_up_existing_file() {
    let temp = tempdir().unwrap();
    let original = "{\"mcpServers\": {}}";
    let path = write_mcp_file(temp.path(), original);

    let mut config = McpConfig::load_or_default(&path).unwrap();
    config.set_server("supabase", &supabase()).unwrap();
    let backup = config.save().unwrap().expect("backup should be created");

    assert_eq!(fs::read_to_string(&backup).unwrap(), original);
    assert!(backup.file_name().unwrap().to_string_lossy().starts_with("mcp.json.backup."));
}

#[test]
fn test_remove_server() {
    let temp = tempdir().unwrap();
    let path = write_mcp_file(
        temp.path(),
        r#"{"mcpServers": {"a": {"type": "http", "url": "1"}, "b": {"type": "http", "url": "2"}, "c": {"type": "http", "url": "3"}}}"#,
    );

    let mut config = McpConfig::load_or_default(&path).unwrap();
    assert!(config.remove_server("a"));
    assert!(!config.remove_server("missing"));

    let names: Vec<_> = config.servers().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["b", "c"]);
}

#[test]
fn test_servers_flags_unrecognised_entries() {
    let temp = tempdir().unwrap();
    let path = write_mcp_file(
        temp.path(),
        r#"{"mcpServers": {"local": {"command": "node"}, "remote": {"type": "streamable-http", "url": "https://x"}}}"#,
    );

    let config = McpConfig::load_or_default(&path).unwrap();
    let servers = config.servers();

    assert!(matches!(servers[0].1, ServerListing::Unrecognised(_)));
    match &servers[1].1 {
        ServerListing::Http(entry) => assert_eq!(entry.r#type, TransportType::StreamableHttp),
        other => panic!("expected an HTTP entry, got {other:?}"),
    }
    assert!(config.get_server("local").is_some());
}
