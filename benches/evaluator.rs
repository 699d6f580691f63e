use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_equity::cards::{parse_cards, Card};
use holdem_equity::enumerate::CompletionPolicy;
use holdem_equity::equity::{compute_equity_with_rng, EquityConfig};
use holdem_equity::evaluator::{evaluate_five, evaluate_seven};
use holdem_equity::game::{BoardSlot, GameState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn five(tokens: &str) -> [Card; 5] {
    parse_cards(tokens).unwrap().try_into().unwrap()
}

fn bench_evaluate_five(c: &mut Criterion) {
    let hi = five("Ah Kd 7s 5c 2d");
    let royal = five("As Ks Qs Js Ts");

    let mut g = c.benchmark_group("evaluate_five");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| evaluate_five(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &royal, |b, input| {
        b.iter(|| evaluate_five(black_box(input)))
    });
    g.finish();
}

fn bench_evaluate_seven(c: &mut Criterion) {
    let seven: [Card; 7] =
        parse_cards("As Ah Ks Qs Js Ts 9s").unwrap().try_into().unwrap();
    c.bench_function("evaluate_seven", |b| b.iter(|| evaluate_seven(black_box(&seven))));
}

fn bench_equity(c: &mut Criterion) {
    // flop decided, turn and river open: C(45,2) = 990 exhaustive trials
    let mut state = GameState::new(2);
    state.set_hole_card(0, 0, "Ah".parse().unwrap()).unwrap();
    state.set_hole_card(0, 1, "Kh".parse().unwrap()).unwrap();
    state.set_hole_card(1, 0, "2c".parse().unwrap()).unwrap();
    state.set_hole_card(1, 1, "2d".parse().unwrap()).unwrap();
    for (slot, token) in
        [BoardSlot::Flop1, BoardSlot::Flop2, BoardSlot::Flop3].iter().zip(["Qh", "9s", "2h"])
    {
        state.set_board_card(*slot, token.parse().unwrap()).unwrap();
    }

    let exhaustive = EquityConfig::default();
    c.bench_function("equity_flop_exhaustive", |b| {
        b.iter(|| {
            compute_equity_with_rng(
                black_box(&state),
                &exhaustive,
                ChaCha8Rng::seed_from_u64(1),
            )
        })
    });

    let sampled = EquityConfig {
        completion: CompletionPolicy { exhaustive_threshold: 100, sample_count: 500 },
    };
    c.bench_function("equity_flop_sampled_500", |b| {
        b.iter(|| {
            compute_equity_with_rng(black_box(&state), &sampled, ChaCha8Rng::seed_from_u64(1))
        })
    });
}

criterion_group!(benches, bench_evaluate_five, bench_evaluate_seven, bench_equity);
criterion_main!(benches);
