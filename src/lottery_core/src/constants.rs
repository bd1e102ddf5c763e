use serde::Serialize;

/// Number of teams that take part in the lottery
pub const LOTTERY_FIELD_SIZE: usize = 14;

/// Number of picks decided by weighted draw
pub const LOTTERY_DRAWS: usize = 4;

/// Published lottery odds for one standings position.
///
/// All values are percentages. `pick_odds[i]` is the chance of landing
/// exactly pick `i + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LotteryOddsRow {
    /// 1-based position in the worst-to-best ordering
    pub rank: usize,

    pub pick_odds: [f64; LOTTERY_FIELD_SIZE],

    /// Chance of a top-four pick
    pub top4_odds: f64,

    /// Chance of the first pick, used as the draw weight
    pub num1_odds: f64,
}

impl LotteryOddsRow {
    /// Sum of every column in the row (100 within rounding).
    pub fn total(&self) -> f64 {
        self.pick_odds.iter().sum()
    }
}

/// Official odds table, one row per lottery rank.
pub const LOTTERY_ODDS: [LotteryOddsRow; LOTTERY_FIELD_SIZE] = [
    LotteryOddsRow {
        rank: 1,
        pick_odds: [14.0, 13.4, 12.7, 12.0, 47.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        top4_odds: 52.1,
        num1_odds: 14.0,
    },
    LotteryOddsRow {
        rank: 2,
        pick_odds: [14.0, 13.4, 12.7, 12.0, 27.8, 20.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        top4_odds: 52.1,
        num1_odds: 14.0,
    },
    LotteryOddsRow {
        rank: 3,
        pick_odds: [14.0, 13.4, 12.7, 12.0, 14.8, 26.0, 7.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        top4_odds: 52.1,
        num1_odds: 14.0,
    },
    LotteryOddsRow {
        rank: 4,
        pick_odds: [12.5, 12.2, 11.9, 11.5, 7.2, 25.7, 16.7, 2.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        top4_odds: 48.1,
        num1_odds: 12.5,
    },
    LotteryOddsRow {
        rank: 5,
        pick_odds: [10.5, 10.5, 10.6, 10.5, 2.2, 19.6, 26.7, 8.7, 0.6, 0.0, 0.0, 0.0, 0.0, 0.0],
        top4_odds: 42.1,
        num1_odds: 10.5,
    },
    LotteryOddsRow {
        rank: 6,
        pick_odds: [9.0, 9.2, 9.4, 9.6, 0.0, 8.6, 29.8, 20.5, 3.7, 0.1, 0.0, 0.0, 0.0, 0.0],
        top4_odds: 37.2,
        num1_odds: 9.0,
    },
    LotteryOddsRow {
        rank: 7,
        pick_odds: [7.5, 7.8, 8.1, 8.5, 0.0, 0.0, 19.7, 34.1, 12.9, 1.3, 0.0, 0.0, 0.0, 0.0],
        top4_odds: 31.9,
        num1_odds: 7.5,
    },
    LotteryOddsRow {
        rank: 8,
        pick_odds: [6.0, 6.3, 6.7, 7.2, 0.0, 0.0, 0.0, 34.5, 32.1, 6.7, 0.4, 0.0, 0.0, 0.0],
        top4_odds: 26.2,
        num1_odds: 6.0,
    },
    LotteryOddsRow {
        rank: 9,
        pick_odds: [4.5, 4.8, 5.2, 5.7, 0.0, 0.0, 0.0, 0.0, 50.7, 25.9, 3.0, 0.1, 0.0, 0.0],
        top4_odds: 20.2,
        num1_odds: 4.5,
    },
    LotteryOddsRow {
        rank: 10,
        pick_odds: [3.0, 3.3, 3.6, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 65.9, 19.0, 1.2, 0.0, 0.0],
        top4_odds: 13.9,
        num1_odds: 3.0,
    },
    LotteryOddsRow {
        rank: 11,
        pick_odds: [2.0, 2.2, 2.4, 2.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 77.6, 12.6, 0.4, 0.0],
        top4_odds: 9.4,
        num1_odds: 2.0,
    },
    LotteryOddsRow {
        rank: 12,
        pick_odds: [1.5, 1.7, 1.9, 2.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 86.1, 6.7, 0.1],
        top4_odds: 7.2,
        num1_odds: 1.5,
    },
    LotteryOddsRow {
        rank: 13,
        pick_odds: [1.0, 1.1, 1.2, 1.4, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 92.9, 2.3],
        top4_odds: 4.7,
        num1_odds: 1.0,
    },
    LotteryOddsRow {
        rank: 14,
        pick_odds: [0.5, 0.6, 0.6, 0.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 97.6],
        top4_odds: 2.4,
        num1_odds: 0.5,
    },
];

/// Look up the odds row for a 1-based lottery rank.
pub fn odds_for_rank(rank: usize) -> Option<&'static LotteryOddsRow> {
    LOTTERY_ODDS.iter().find(|row| row.rank == rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_ordered_by_rank() {
        for (i, row) in LOTTERY_ODDS.iter().enumerate() {
            assert_eq!(row.rank, i + 1);
        }
    }

    #[test]
    fn test_rows_total_100() {
        for row in &LOTTERY_ODDS {
            assert!(
                (row.total() - 100.0).abs() <= 0.2,
                "Rank {} totals {}",
                row.rank,
                row.total()
            );
        }
    }

    #[test]
    fn test_top4_and_num1_columns() {
        for row in &LOTTERY_ODDS {
            let top4: f64 = row.pick_odds[..LOTTERY_DRAWS].iter().sum();
            assert!((top4 - row.top4_odds).abs() < 0.05, "Rank {} top-4 mismatch", row.rank);
            assert_eq!(row.num1_odds, row.pick_odds[0]);
        }
    }

    #[test]
    fn test_num1_weights_sum_to_100() {
        // First-pick weights cover the whole field
        let total: f64 = LOTTERY_ODDS.iter().map(|row| row.num1_odds).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_odds_for_rank() {
        assert_eq!(odds_for_rank(1).map(|r| r.num1_odds), Some(14.0));
        assert_eq!(odds_for_rank(14).map(|r| r.top4_odds), Some(2.4));
        assert!(odds_for_rank(0).is_none());
        assert!(odds_for_rank(15).is_none());
    }
}
