use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::config::{LotteryConfig, DEFAULT_BATCH_SIZE};
use crate::error::Result;
use crate::lottery::draw_order;
use crate::standings::RankedTeam;

/// Empirical pick distribution for one team over many simulated lotteries.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickDistribution {
    pub team: RankedTeam,

    /// `pick_pct[i]` is the share of lotteries (percent) giving this team pick `i + 1`
    pub pick_pct: Vec<f64>,

    pub n_simulations: usize,
}

impl PickDistribution {
    /// Observed percentage for a 1-based pick, 0.0 if out of range.
    pub fn pick_probability(&self, pick: usize) -> f64 {
        pick.checked_sub(1)
            .and_then(|i| self.pick_pct.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// Observed chance of a top-four pick
    pub fn top4_probability(&self) -> f64 {
        (1..=4).map(|pick| self.pick_probability(pick)).sum()
    }

    /// Half-width, in percentage points, of the normal-approximation
    /// confidence interval around the observed share for `pick`.
    pub fn margin_of_error(&self, pick: usize, confidence: f64) -> f64 {
        if self.n_simulations == 0 {
            return f64::INFINITY;
        }
        let Ok(normal) = Normal::new(0.0, 1.0) else {
            return f64::NAN;
        };
        let z = normal.inverse_cdf(0.5 + confidence / 2.0);
        let p = self.pick_probability(pick) / 100.0;
        z * (p * (1.0 - p) / self.n_simulations as f64).sqrt() * 100.0
    }

    /// Largest gap, in percentage points, between observed shares and the
    /// published odds row.
    pub fn compare_to_table(&self) -> f64 {
        self.pick_pct
            .iter()
            .zip(self.team.pick_odds.iter())
            .map(|(observed, published)| (observed - published).abs())
            .fold(0.0, f64::max)
    }
}

/// Estimate every team's pick distribution by Monte Carlo.
pub fn estimate_pick_odds(
    ranked: &[RankedTeam],
    n_simulations: usize,
    seed: Option<u64>,
) -> Vec<PickDistribution> {
    run_batches(ranked, n_simulations, DEFAULT_BATCH_SIZE, seed)
}

/// [`estimate_pick_odds`] with sizing and seed taken from a config.
pub fn estimate_pick_odds_with(
    ranked: &[RankedTeam],
    config: &LotteryConfig,
) -> Result<Vec<PickDistribution>> {
    config.validate()?;
    Ok(run_batches(ranked, config.n_simulations, config.batch_size, config.seed))
}

fn run_batches(
    ranked: &[RankedTeam],
    n_simulations: usize,
    batch_size: usize,
    seed: Option<u64>,
) -> Vec<PickDistribution> {
    let n = ranked.len();
    let batch_size = batch_size.max(1);

    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    // Seeds are drawn up front so results do not depend on thread scheduling
    let batches: Vec<(u64, usize)> = (0..n_simulations)
        .step_by(batch_size)
        .map(|start| (rng.gen::<u64>(), batch_size.min(n_simulations - start)))
        .collect();

    tracing::debug!(
        "Running {} lotteries in {} batches for {} teams",
        n_simulations,
        batches.len(),
        n
    );

    let counts = batches
        .par_iter()
        .map(|&(batch_seed, size)| {
            let mut rng = ChaCha8Rng::seed_from_u64(batch_seed);
            let mut counts = vec![vec![0usize; n]; n];
            for _ in 0..size {
                // Rows are input positions, so duplicate ranks stay separate
                for (pick, team) in draw_order(ranked, &mut rng).into_iter().enumerate() {
                    counts[team][pick] += 1;
                }
            }
            counts
        })
        .reduce(
            || vec![vec![0usize; n]; n],
            |mut acc, batch| {
                for (row, batch_row) in acc.iter_mut().zip(batch) {
                    for (count, c) in row.iter_mut().zip(batch_row) {
                        *count += c;
                    }
                }
                acc
            },
        );

    ranked
        .iter()
        .zip(counts)
        .map(|(team, row)| PickDistribution {
            team: team.clone(),
            pick_pct: row
                .into_iter()
                .map(|c| {
                    if n_simulations == 0 {
                        0.0
                    } else {
                        c as f64 * 100.0 / n_simulations as f64
                    }
                })
                .collect(),
            n_simulations,
        })
        .collect()
}
