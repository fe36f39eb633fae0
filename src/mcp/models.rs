use crate::constants::SUPABASE_MCP_URL;
use crate::core::LeagueOpsError;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Transport an HTTP MCP server speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TransportType {
    #[default]
    Http,
    StreamableHttp,
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Http => "http",
            Self::StreamableHttp => "streamable-http",
        })
    }
}

/// Individual MCP server entry under `mcpServers` in `.cursor/mcp.json`.
///
/// Writing an entry always replaces the whole object stored under its name; fields
/// not listed here are not carried over from the previous entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct McpServerConfig {
    /// Transport type; the editor reads this from the `type` field
    pub r#type: TransportType,

    /// Server URL
    pub url: String,

    /// HTTP headers sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,

    /// Free-form note shown by some editors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl McpServerConfig {
    pub fn new(r#type: TransportType, url: impl Into<String>) -> Self {
        Self {
            r#type,
            url: url.into(),
            headers: None,
            description: None,
        }
    }

    /// Add a header, creating the map on first use.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.get_or_insert_with(BTreeMap::new).insert(name.into(), value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Entry for the hosted Supabase MCP endpoint of one project.
    pub fn supabase(project_ref: &str, access_token: &str) -> Self {
        Self::new(TransportType::Http, format!("{SUPABASE_MCP_URL}?project_ref={project_ref}"))
            .with_header("Authorization", format!("Bearer {access_token}"))
            .with_description(format!("Supabase project {project_ref}"))
    }
}

/// Split a `--header` argument of the form `Name=Value`.
///
/// The value may itself contain `=`; the name may not be empty.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(LeagueOpsError::InvalidArgument {
            name: "--header".to_string(),
            reason: format!("expected NAME=VALUE, got '{raw}'"),
        }
        .into()),
    }
}
