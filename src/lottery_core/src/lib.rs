//! Lottery Core - NBA draft lottery standings and simulation.
//!
//! Ranks the league's worst records into the 14-team lottery field with the
//! published odds attached, and draws draft orders by weighted lottery.
//! Python bindings are available behind the `python` feature.

pub mod config;
pub mod constants;
pub mod error;
pub mod lottery;
pub mod odds;
pub mod standings;
pub mod team;

#[cfg(feature = "python")]
mod python;

#[cfg(test)]
mod fixtures;

pub use config::LotteryConfig;
pub use constants::{odds_for_rank, LotteryOddsRow, LOTTERY_DRAWS, LOTTERY_FIELD_SIZE, LOTTERY_ODDS};
pub use error::LotteryError;
pub use lottery::{draw_order, simulate, DraftResult, LotterySimulator};
pub use odds::{estimate_pick_odds, estimate_pick_odds_with, PickDistribution};
pub use standings::{games_back, rank_for_lottery, RankedTeam};
pub use team::{load_season_records, parse_season_records, SeasonRecord, TeamRecord};
