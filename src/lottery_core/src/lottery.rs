use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::constants::LOTTERY_DRAWS;
use crate::standings::RankedTeam;

/// A lottery team with the pick it ended up with.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResult {
    #[serde(flatten)]
    pub team: RankedTeam,

    pub draft_pick: usize,
}

impl DraftResult {
    /// Spots gained relative to lottery rank: positive jumped, negative fell.
    pub fn movement(&self) -> i64 {
        self.team.lottery_rank as i64 - self.draft_pick as i64
    }

    pub fn is_jumper(&self) -> bool {
        self.movement() > 0
    }

    pub fn is_faller(&self) -> bool {
        self.movement() < 0
    }
}

/// Pick one pool entry with probability proportional to its `num1_odds`.
///
/// Returns a position in `pool`, or `None` if the pool is empty.
fn weighted_draw<R: Rng + ?Sized>(
    teams: &[RankedTeam],
    pool: &[usize],
    rng: &mut R,
) -> Option<usize> {
    if pool.is_empty() {
        return None;
    }

    let total_weight: f64 = pool.iter().map(|&i| teams[i].num1_odds).sum();
    let mut value = rng.gen::<f64>() * total_weight;

    for (pos, &i) in pool.iter().enumerate() {
        value -= teams[i].num1_odds;
        if value <= 0.0 {
            return Some(pos);
        }
    }

    // Only reachable through rounding error
    tracing::warn!("Weighted draw fell through, awarding last team in pool");
    Some(pool.len() - 1)
}

/// Draft order as indices into `ranked`: element `p` holds the team
/// awarded pick `p + 1`.
///
/// The first [`LOTTERY_DRAWS`] picks are drawn without replacement,
/// weighted by each team's first-pick odds; everyone left follows in
/// input order.
pub fn draw_order<R: Rng + ?Sized>(ranked: &[RankedTeam], rng: &mut R) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..ranked.len()).collect();
    let mut order = Vec::with_capacity(ranked.len());

    let draws = LOTTERY_DRAWS.min(ranked.len());
    for pick in 1..=draws {
        let Some(pos) = weighted_draw(ranked, &pool, rng) else {
            break;
        };
        // Vec::remove keeps the remaining pool in standings order
        let winner = pool.remove(pos);
        tracing::debug!("Pick {} drawn by {}", pick, ranked[winner].team.display_name);
        order.push(winner);
    }

    order.extend(pool);
    order
}

/// Run one draft lottery.
///
/// `ranked` must be in worst-to-best order, as produced by
/// [`rank_for_lottery`](crate::standings::rank_for_lottery). Picks follow
/// [`draw_order`]; results are sorted by pick.
pub fn simulate<R: Rng + ?Sized>(ranked: &[RankedTeam], rng: &mut R) -> Vec<DraftResult> {
    draw_order(ranked, rng)
        .into_iter()
        .enumerate()
        .map(|(pos, i)| DraftResult {
            team: ranked[i].clone(),
            draft_pick: pos + 1,
        })
        .collect()
}

/// Lottery field plus seeding, for callers that do not manage an RNG.
#[derive(Clone, Debug)]
pub struct LotterySimulator {
    pub teams: Vec<RankedTeam>,
}

impl LotterySimulator {
    pub fn new(teams: Vec<RankedTeam>) -> Self {
        LotterySimulator { teams }
    }

    /// Simulate one lottery. The same seed always gives the same order.
    pub fn simulate(&self, seed: Option<u64>) -> Vec<DraftResult> {
        let mut rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        simulate(&self.teams, &mut rng)
    }

    /// Run several independent lotteries, each seeded from one master RNG.
    pub fn run_simulations(
        &self,
        n_simulations: usize,
        seed: Option<u64>,
    ) -> Vec<Vec<DraftResult>> {
        let mut rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };

        (0..n_simulations)
            .map(|_| {
                let sim_seed = rng.gen::<u64>();
                self.simulate(Some(sim_seed))
            })
            .collect()
    }
}
