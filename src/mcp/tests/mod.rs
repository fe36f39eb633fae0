use std::fs;
use std::path::{Path, PathBuf};

/// Test helper: writes `content` as `.cursor/mcp.json` under `root`.
pub(crate) fn write_mcp_file(root: &Path, content: &str) -> PathBuf {
    let path = root.join(".cursor").join("mcp.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

mod config_tests;
