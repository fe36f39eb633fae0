use crate::core::LeagueOpsError;
use crate::mcp::models::McpServerConfig;
use crate::utils::BackupManager;
use crate::utils::fs::{read_text_file, to_pretty_json, write_json_file};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key holding the server registry in the editor's MCP file.
pub const MCP_SERVERS_KEY: &str = "mcpServers";

/// One entry as found on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerListing {
    /// The entry has the HTTP server shape
    Http(McpServerConfig),
    /// Anything else, e.g. a command-based server or a hand-edited object
    Unrecognised(Value),
}

/// The editor's MCP configuration file, held as a raw JSON document.
///
/// Only `mcpServers.<name>` is ever touched. Every other key, at the top level and
/// inside `mcpServers`, keeps its value and its position.
#[derive(Debug, Clone)]
pub struct McpConfig {
    path: PathBuf,
    root: Map<String, Value>,
}

impl McpConfig {
    /// Load an existing MCP file or start from `{}`.
    ///
    /// # Errors
    ///
    /// [`LeagueOpsError::InvalidJson`] when the file does not parse, is not a JSON
    /// object, or has an `mcpServers` value that is not an object.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("{} does not exist; starting from an empty document", path.display());
            return Ok(Self {
                path: path.to_path_buf(),
                root: Map::new(),
            });
        }

        let text = read_text_file(path)?;
        let invalid = |reason: String| LeagueOpsError::InvalidJson {
            file: path.display().to_string(),
            reason,
        };

        let root = match serde_json::from_str::<Value>(&text).map_err(|e| invalid(e.to_string()))? {
            Value::Object(map) => map,
            _ => return Err(invalid("top-level value must be an object".to_string()).into()),
        };
        if root.get(MCP_SERVERS_KEY).is_some_and(|servers| !servers.is_object()) {
            return Err(invalid(format!("'{MCP_SERVERS_KEY}' must be an object")).into());
        }

        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries under `mcpServers`, in file order.
    pub fn servers(&self) -> Vec<(String, ServerListing)> {
        let Some(Value::Object(servers)) = self.root.get(MCP_SERVERS_KEY) else {
            return Vec::new();
        };
        servers
            .iter()
            .map(|(name, value)| {
                let listing = serde_json::from_value::<McpServerConfig>(value.clone())
                    .map_or_else(|_| ServerListing::Unrecognised(value.clone()), ServerListing::Http);
                (name.clone(), listing)
            })
            .collect()
    }

    /// Raw entry stored under `name`.
    pub fn get_server(&self, name: &str) -> Option<&Value> {
        self.root.get(MCP_SERVERS_KEY).and_then(|servers| servers.get(name))
    }

    /// Store `config` under `name`, replacing any existing entry in place.
    ///
    /// Returns true when an entry was replaced rather than added.
    pub fn set_server(&mut self, name: &str, config: &McpServerConfig) -> Result<bool> {
        let value = serde_json::to_value(config)?;
        let servers = self.servers_mut()?;
        let replaced = servers.insert(name.to_string(), value).is_some();
        debug!("{} MCP server '{name}'", if replaced { "Replaced" } else { "Added" });
        Ok(replaced)
    }

    /// Delete the entry under `name`. Returns false when there was none.
    pub fn remove_server(&mut self, name: &str) -> bool {
        match self.root.get_mut(MCP_SERVERS_KEY) {
            Some(Value::Object(servers)) => servers.shift_remove(name).is_some(),
            _ => false,
        }
    }

    /// The document as written to disk: two-space indentation, trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        to_pretty_json(&self.root)
    }

    /// Back up the existing file, then replace it atomically.
    ///
    /// Returns the backup path when there was a file to back up.
    pub fn save(&self) -> Result<Option<PathBuf>> {
        let backup = BackupManager::new(self.path.clone());
        let backup_path = backup.create_backup_if_exists()?.map(Path::to_path_buf);

        write_json_file(&self.path, &self.root)
            .with_context(|| format!("Failed to write MCP configuration to: {}", self.path.display()))?;

        Ok(backup_path)
    }

    fn servers_mut(&mut self) -> Result<&mut Map<String, Value>> {
        let servers = self
            .root
            .entry(MCP_SERVERS_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        servers.as_object_mut().ok_or_else(|| {
            LeagueOpsError::InvalidJson {
                file: self.path.display().to_string(),
                reason: format!("'{MCP_SERVERS_KEY}' must be an object"),
            }
            .into()
        })
    }
}
