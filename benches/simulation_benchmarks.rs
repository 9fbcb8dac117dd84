use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mower_sim::app::simulate;
use mower_sim::parser::{Command, GridSize, MowerInstructions, Orientation, Position};
use mower_sim::simulation::{replay_with, trace, NoOpObserver};
use mower_sim::Program;
use std::hint::black_box;

/// A mower with `length` commands that hits the edge of the grid regularly
fn generate_mower(length: usize) -> MowerInstructions {
    let pattern = [
        Command::MoveForward,
        Command::MoveForward,
        Command::MoveForward,
        Command::TurnRight,
        Command::MoveForward,
        Command::TurnLeft,
        Command::MoveForward,
    ];

    MowerInstructions {
        start: Position::new(0, 0, Orientation::North),
        commands: pattern.iter().copied().cycle().take(length).collect(),
        line: 2,
    }
}

/// Benchmark a single replay as the command string grows
fn bench_replay_length(c: &mut Criterion) {
    let grid = GridSize::new(50, 50);
    let mut group = c.benchmark_group("replay_length");

    for length in [10, 1_000, 100_000] {
        let mower = generate_mower(length);

        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::new("no_op", length), &mower, |b, mower| {
            b.iter(|| black_box(replay_with(black_box(mower), grid, &mut NoOpObserver)))
        });
        group.bench_with_input(BenchmarkId::new("trace", length), &mower, |b, mower| {
            b.iter(|| black_box(trace(black_box(mower), grid)))
        });
    }

    group.finish();
}

/// Benchmark simulating whole programs with many mowers
fn bench_simulate_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_program");

    for mowers in [10, 1_000] {
        let program = Program {
            grid: GridSize::new(20, 20),
            mowers: (0..mowers).map(|i| generate_mower(10 + i % 90)).collect(),
        };

        group.throughput(Throughput::Elements(mowers as u64));
        group.bench_with_input(
            BenchmarkId::new("mowers", mowers),
            &program,
            |b, program| b.iter(|| black_box(simulate(black_box(program)))),
        );
    }

    group.finish();
}

criterion_group!(
    simulation_benches,
    bench_replay_length,
    bench_simulate_program
);

criterion_main!(simulation_benches);
