use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lottery_core::lottery::{simulate, LotterySimulator};
use lottery_core::odds::estimate_pick_odds;
use lottery_core::standings::{rank_for_lottery, RankedTeam};
use lottery_core::team::SeasonRecord;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_30_team_league() -> Vec<SeasonRecord> {
    (0..30)
        .map(|i| {
            let wins = 10 + (i * 37) % 50;
            let id = format!("{}", 1610612737 + i);
            SeasonRecord::new(id, format!("Team{}", i), Some(wins), Some(82 - wins))
        })
        .collect()
}

fn create_lottery_field() -> Vec<RankedTeam> {
    rank_for_lottery(&create_30_team_league())
}

fn bench_rank_for_lottery(c: &mut Criterion) {
    let league = create_30_team_league();

    c.bench_function("rank_for_lottery_30_teams", |b| {
        b.iter(|| rank_for_lottery(black_box(&league)))
    });
}

fn bench_simulate(c: &mut Criterion) {
    let field = create_lottery_field();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("simulate_single_lottery", |b| {
        b.iter(|| simulate(black_box(&field), &mut rng))
    });

    let simulator = LotterySimulator::new(field.clone());
    c.bench_function("lottery_1000_sims_batch", |b| {
        b.iter(|| black_box(&simulator).run_simulations(1000, Some(42)))
    });
}

fn bench_estimate_pick_odds(c: &mut Criterion) {
    let field = create_lottery_field();

    c.bench_function("estimate_pick_odds_10000", |b| {
        b.iter(|| estimate_pick_odds(black_box(&field), 10_000, Some(42)))
    });
}

criterion_group!(
    benches,
    bench_rank_for_lottery,
    bench_simulate,
    bench_estimate_pick_odds,
);
criterion_main!(benches);
