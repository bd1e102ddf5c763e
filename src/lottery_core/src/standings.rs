use serde::Serialize;

use crate::constants::{LotteryOddsRow, LOTTERY_FIELD_SIZE, LOTTERY_ODDS};
use crate::team::{SeasonRecord, TeamRecord};

/// A lottery team with its standings position and published odds.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTeam {
    #[serde(flatten)]
    pub team: TeamRecord,

    /// 1-based position, worst record first
    pub lottery_rank: usize,

    pub pick_odds: [f64; LOTTERY_FIELD_SIZE],
    pub top4_odds: f64,
    pub num1_odds: f64,

    /// Games better than the worst team; `None` for the worst team itself
    /// and for anyone level with it
    pub games_back: Option<f64>,
}

impl RankedTeam {
    fn new(team: TeamRecord, odds: &LotteryOddsRow, games_back: Option<f64>) -> Self {
        RankedTeam {
            team,
            lottery_rank: odds.rank,
            pick_odds: odds.pick_odds,
            top4_odds: odds.top4_odds,
            num1_odds: odds.num1_odds,
            games_back,
        }
    }

    /// Games back as shown in a standings table: "-" or one decimal place.
    pub fn games_back_display(&self) -> String {
        match self.games_back {
            Some(gb) => format!("{:.1}", gb),
            None => "-".to_string(),
        }
    }
}

/// Games-back figure of `team` measured from the worst team (`anchor`).
///
/// Positive values mean a better record than the anchor. Zero or below
/// reports `None`, the same as the anchor itself.
pub fn games_back(anchor: &TeamRecord, team: &TeamRecord) -> Option<f64> {
    let win_diff = team.wins as i64 - anchor.wins as i64;
    let loss_diff = anchor.losses as i64 - team.losses as i64;
    let diff = win_diff + loss_diff;

    if diff <= 0 {
        return None;
    }
    let gb = diff as f64 / 2.0;
    Some((gb * 10.0).round() / 10.0)
}

/// Rank the league's worst records for the draft lottery.
///
/// Records missing wins or losses (or with no games played) are skipped.
/// The rest are ordered by ascending win percentage, then ascending wins,
/// and the first [`LOTTERY_FIELD_SIZE`] receive ranks and odds rows.
/// Fewer eligible teams produce a shorter list.
pub fn rank_for_lottery(records: &[SeasonRecord]) -> Vec<RankedTeam> {
    let mut eligible: Vec<TeamRecord> = records
        .iter()
        .filter_map(SeasonRecord::to_team_record)
        .collect();

    let excluded = records.len() - eligible.len();
    if excluded > 0 {
        tracing::debug!("Excluded {} records without a usable win-loss record", excluded);
    }

    eligible.sort_by(|a, b| a.cmp_win_pct(b).then(a.wins.cmp(&b.wins)));
    eligible.truncate(LOTTERY_FIELD_SIZE);

    if eligible.len() < LOTTERY_FIELD_SIZE {
        tracing::warn!(
            "Only {} eligible teams for a {}-team lottery",
            eligible.len(),
            LOTTERY_FIELD_SIZE
        );
    }

    let Some(anchor) = eligible.first().cloned() else {
        return Vec::new();
    };

    // zip with the table keeps every rank within 1..=14
    eligible
        .into_iter()
        .zip(LOTTERY_ODDS.iter())
        .map(|(team, odds)| {
            let gb = games_back(&anchor, &team);
            RankedTeam::new(team, odds, gb)
        })
        .collect()
}
