use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// One row of the season-record table as it arrives from the data file.
///
/// Wins and losses may be missing for teams the standings feed did not
/// cover; such rows are skipped when ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    #[serde(
        rename = "teamId",
        alias = "id",
        alias = "team_id",
        deserialize_with = "string_or_number"
    )]
    pub team_id: String,

    #[serde(rename = "displayName", alias = "full_name", alias = "display_name", default)]
    pub display_name: String,

    /// `None` when missing or not a non-negative integer
    #[serde(default, deserialize_with = "lenient_count")]
    pub wins: Option<u32>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub losses: Option<u32>,
}

impl SeasonRecord {
    pub fn new(
        team_id: impl Into<String>,
        display_name: impl Into<String>,
        wins: Option<u32>,
        losses: Option<u32>,
    ) -> Self {
        SeasonRecord {
            team_id: team_id.into(),
            display_name: display_name.into(),
            wins,
            losses,
        }
    }

    /// Validated record, or `None` if wins or losses are missing or the
    /// team has not played.
    pub fn to_team_record(&self) -> Option<TeamRecord> {
        let (wins, losses) = (self.wins?, self.losses?);
        if wins as u64 + losses as u64 == 0 {
            return None;
        }
        Some(TeamRecord {
            team_id: self.team_id.clone(),
            display_name: self.display_name.clone(),
            wins,
            losses,
        })
    }
}

/// A franchise's current-season result with at least one game played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub team_id: String,
    pub display_name: String,
    pub wins: u32,
    pub losses: u32,
}

impl TeamRecord {
    pub fn games_played(&self) -> u64 {
        self.wins as u64 + self.losses as u64
    }

    pub fn win_pct(&self) -> f64 {
        self.wins as f64 / self.games_played() as f64
    }

    /// Record formatted as "W-L"
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    /// Exact win-percentage comparison.
    ///
    /// Cross-multiplies instead of dividing so equal percentages from
    /// different game counts compare as equal.
    pub fn cmp_win_pct(&self, other: &TeamRecord) -> Ordering {
        let lhs = self.wins as u128 * other.games_played() as u128;
        let rhs = other.wins as u128 * self.games_played() as u128;
        lhs.cmp(&rhs)
    }
}

/// Parse a JSON array of season records.
pub fn parse_season_records(json: &str) -> Result<Vec<SeasonRecord>> {
    let records: Vec<SeasonRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// Read a JSON array of season records from disk.
pub fn load_season_records(path: impl AsRef<Path>) -> Result<Vec<SeasonRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let records = parse_season_records(&content)?;
    tracing::debug!("Loaded {} season records from {}", records.len(), path.display());
    Ok(records)
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Win or loss count that drops to `None` instead of failing the table.
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Valid(u32),
        Invalid(IgnoredAny),
    }

    Ok(match Count::deserialize(deserializer)? {
        Count::Valid(n) => Some(n),
        Count::Invalid(_) => None,
    })
}
