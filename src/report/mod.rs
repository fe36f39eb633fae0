//! Draft pool summaries.
//!
//! Two reports over the draft pool table, both read-only:
//!
//! - [`point_value_report`]: how many Pokémon sit at one point value, which ones, and
//!   how they break down by draft status
//! - [`tier_summary`]: row counts for every point value from 20 down to 1
//!
//! Both are generic over [`TableSource`] so they run against Supabase in production and
//! an in-memory table in tests.

use crate::core::LeagueOpsError;
use crate::supabase::{Row, TableQuery, TableSource};
use anyhow::Result;
use serde_json::Value;
use std::fmt;
use tracing::debug;

pub const MIN_POINT_VALUE: u8 = 1;
pub const MAX_POINT_VALUE: u8 = 20;

/// Draft statuses, in the order they are tallied.
pub const STATUSES: [&str; 4] = ["available", "drafted", "banned", "unavailable"];

const NAME_COLUMN: &str = "pokemon_name";
const POINT_VALUE_COLUMN: &str = "point_value";
const STATUS_COLUMN: &str = "status";

/// Reject point values outside 1..=20 before any request is made.
pub fn validate_point_value(value: i64) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| (MIN_POINT_VALUE..=MAX_POINT_VALUE).contains(v))
        .ok_or_else(|| {
            LeagueOpsError::InvalidArgument {
                name: "POINT_VALUE".to_string(),
                reason: format!("{value} is outside {MIN_POINT_VALUE}..={MAX_POINT_VALUE}"),
            }
            .into()
        })
}

/// Parse a point value as typed on the command line, then range-check it.
pub fn parse_point_value(raw: &str) -> Result<u8> {
    let value = raw.trim().parse::<i64>().map_err(|_| LeagueOpsError::InvalidArgument {
        name: "POINT_VALUE".to_string(),
        reason: format!("'{raw}' is not a whole number"),
    })?;
    validate_point_value(value)
}

/// The columns the reports read from a draft pool row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEntry {
    pub pokemon_name: Option<String>,
    pub status: Option<String>,
}

impl From<&Row> for PoolEntry {
    fn from(row: &Row) -> Self {
        let text = |column: &str| match row.get(column) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        Self {
            pokemon_name: text(NAME_COLUMN),
            status: text(STATUS_COLUMN),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointValueReport {
    pub point_value: u8,
    pub total: u64,
    /// Up to `limit` entries, ordered by name
    pub entries: Vec<PoolEntry>,
    pub by_status: Vec<(&'static str, u64)>,
}

/// Count, list and tally the rows at one point value.
pub async fn point_value_report<S: TableSource>(
    source: &S,
    table: &str,
    point_value: u8,
    limit: usize,
) -> Result<PointValueReport> {
    let base = TableQuery::new(table).eq(POINT_VALUE_COLUMN, point_value);

    let total = source.count(&base).await?;
    debug!("{total} rows in {table} at point value {point_value}");

    let rows = source
        .rows(
            &base
                .clone()
                .select(format!("{NAME_COLUMN},{POINT_VALUE_COLUMN},{STATUS_COLUMN}"))
                .order(NAME_COLUMN)
                .limit(limit),
        )
        .await?;

    let mut by_status = Vec::with_capacity(STATUSES.len());
    for status in STATUSES {
        let count = source.count(&base.clone().eq(STATUS_COLUMN, status)).await?;
        by_status.push((status, count));
    }

    Ok(PointValueReport {
        point_value,
        total,
        entries: rows.iter().map(PoolEntry::from).collect(),
        by_status,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierSummary {
    /// Non-empty tiers, highest point value first
    pub tiers: Vec<(u8, u64)>,
    pub total: u64,
}

/// Count rows for every point value from 20 down to 1.
pub async fn tier_summary<S: TableSource>(source: &S, table: &str) -> Result<TierSummary> {
    let mut tiers = Vec::new();
    let mut total = 0;

    for point_value in (MIN_POINT_VALUE..=MAX_POINT_VALUE).rev() {
        let count = source.count(&TableQuery::new(table).eq(POINT_VALUE_COLUMN, point_value)).await?;
        total += count;
        if count > 0 {
            tiers.push((point_value, count));
        }
    }

    Ok(TierSummary {
        tiers,
        total,
    })
}

impl fmt::Display for PointValueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Point value {}: {} Pokémon", self.point_value, self.total)?;

        let width = self
            .entries
            .iter()
            .filter_map(|e| e.pokemon_name.as_deref())
            .map(|n| n.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &self.entries {
            writeln!(
                f,
                "  {:<width$}  {}",
                entry.pokemon_name.as_deref().unwrap_or("-"),
                entry.status.as_deref().unwrap_or("-"),
            )?;
        }
        if (self.entries.len() as u64) < self.total {
            writeln!(f, "  ... showing {} of {}", self.entries.len(), self.total)?;
        }

        let tally: Vec<String> = self.by_status.iter().map(|(s, n)| format!("{s} {n}")).collect();
        write!(f, "By status: {}", tally.join(", "))
    }
}

impl fmt::Display for TierSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Draft pool by point value:")?;
        for (point_value, count) in &self.tiers {
            writeln!(f, "  {point_value:>2} pts: {count}")?;
        }
        write!(f, "Total: {}", self.total)
    }
}
