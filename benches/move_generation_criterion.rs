use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_board::engines::difficulty::DifficultyTier;
use plum_board::engines::engine_tiered::TieredEngine;
use plum_board::engines::engine_trait::Engine;
use plum_board::game_state::board::Board;
use plum_board::game_state::chess_rules::NoMovePolicy;
use plum_board::game_state::chess_types::{Color, Move};
use plum_board::game_state::game_state::GameState;
use plum_board::move_generation::legal_move_generator::all_legal_moves;
use plum_board::utils::algebraic::parse_coordinate_move;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    moves: &'static [&'static str],
    side: Color,
    expected_moves: usize,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        moves: &[],
        side: Color::White,
        expected_moves: 20,
    },
    BenchCase {
        name: "open_center",
        moves: &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"],
        side: Color::White,
        expected_moves: 32,
    },
];

fn build_board(case: &BenchCase) -> Board {
    let mut state = GameState::new_game();
    for text in case.moves {
        let mv: Move = parse_coordinate_move(text).expect("benchmark move should parse");
        state
            .commit(mv, NoMovePolicy::default())
            .expect("benchmark board has kings")
            .expect("benchmark move should apply");
    }
    state.board
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board = build_board(case);

        // Correctness guard before benchmarking.
        let warmup = all_legal_moves(&board, case.side).expect("kings present");
        assert_eq!(warmup.len(), case.expected_moves, "move count for {}", case.name);

        group.throughput(Throughput::Elements(case.expected_moves as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| {
                let moves = all_legal_moves(black_box(board), black_box(case.side))
                    .expect("kings present");
                black_box(moves.len())
            });
        });
    }

    group.finish();
}

fn bench_tier_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiered_choose_move");
    group.sample_size(30);

    let board = build_board(&CASES[1]);
    for tier in DifficultyTier::ALL {
        let mut engine = TieredEngine::with_seed(tier, 7);
        group.bench_with_input(BenchmarkId::from_parameter(tier), &board, |b, board| {
            b.iter(|| {
                let out = engine
                    .choose_move(black_box(board), Color::White)
                    .expect("kings present");
                black_box(out.best_move)
            });
        });
    }

    group.finish();
}

criterion_group!(move_generation_benches, bench_legal_moves, bench_tier_selection);
criterion_main!(move_generation_benches);
