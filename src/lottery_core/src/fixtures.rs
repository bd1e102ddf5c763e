//! Shared test fixtures.

use crate::standings::{rank_for_lottery, RankedTeam};
use crate::team::SeasonRecord;

/// Ranked field of `n` teams where team `T{k}` holds lottery rank `k`.
pub(crate) fn lottery_field(n: usize) -> Vec<RankedTeam> {
    let records: Vec<SeasonRecord> = (0..n)
        .map(|i| {
            let wins = 10 + i as u32;
            let id = format!("T{}", i + 1);
            SeasonRecord::new(id, format!("Team {}", i + 1), Some(wins), Some(50 - wins))
        })
        .collect();
    rank_for_lottery(&records)
}
