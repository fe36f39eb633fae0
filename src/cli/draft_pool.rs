//! `leagueops draft-pool`: read-only draft pool summaries.

use crate::config::SupabaseSettings;
use crate::constants::{DEFAULT_DRAFT_POOL_TABLE, DEFAULT_ROW_LIMIT};
use crate::report::{parse_point_value, point_value_report, tier_summary};
use crate::supabase::SupabaseClient;
use anyhow::Result;
use clap::Args;
use tracing::info;

/// Summarise the draft pool, either per tier or for one point value.
#[derive(Debug, Args)]
pub struct DraftPoolCommand {
    /// Point value to list (1-20); omit for counts per point value
    #[arg(allow_negative_numbers = true)]
    point_value: Option<String>,

    /// Table to query
    #[arg(long, default_value = DEFAULT_DRAFT_POOL_TABLE)]
    table: String,

    /// Maximum rows to list for a single point value
    #[arg(long, default_value_t = DEFAULT_ROW_LIMIT)]
    limit: usize,
}

impl DraftPoolCommand {
    pub async fn execute(self, settings: &SupabaseSettings) -> Result<()> {
        let point_value = self.point_value.as_deref().map(parse_point_value).transpose()?;
        let client = SupabaseClient::new(settings)?;
        info!("Querying {} at {}", self.table, settings.url);

        match point_value {
            Some(point_value) => {
                let report = point_value_report(&client, &self.table, point_value, self.limit).await?;
                println!("{report}");
            }
            None => {
                let summary = tier_summary(&client, &self.table).await?;
                println!("{summary}");
            }
        }
        Ok(())
    }
}
