use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mower_sim::parser::{parse_commands, parse_grid_size, parse_position, GridSize};
use mower_sim::{parse_str, Program};
use std::fs;
use std::hint::black_box;

/// Generate a mower file with `mowers` pairs of different shapes
fn generate_mower_file(mowers: usize, pattern: &str) -> String {
    let grid = GridSize::new(100, 100);
    let mut content = format!("{} {}\n", grid.x, grid.y);
    let directions = ["N", "E", "S", "W"];

    for i in 0..mowers {
        let x = (i * 7) as u32 % (grid.x + 1);
        let y = (i * 13) as u32 % (grid.y + 1);
        content.push_str(&format!("{} {} {}\n", x, y, directions[i % 4]));

        let commands = match pattern {
            "short" => "LFRF".to_string(),
            "long" => "FFRFFLFFFRRFL".repeat(20),
            _ => "F".repeat(i % 50),
        };
        content.push_str(&commands);
        content.push('\n');
    }

    content
}

/// Benchmark parsing single lines of each kind
fn bench_single_line_parsing(c: &mut Criterion) {
    let grid = GridSize::new(5, 5);
    let mut group = c.benchmark_group("single_line_parsing");

    group.bench_function("grid_size", |b| {
        b.iter(|| black_box(parse_grid_size(black_box("5 5"))))
    });
    group.bench_function("position", |b| {
        b.iter(|| black_box(parse_position(black_box("  1 2 N "), 2, grid)))
    });
    group.bench_function("commands", |b| {
        b.iter(|| black_box(parse_commands(black_box("LFLFLFLFFRRFFLF"), 3)))
    });

    group.finish();
}

/// Benchmark parsing files of different sizes
fn bench_file_parsing(c: &mut Criterion) {
    let mower_counts = [10, 1_000, 10_000];
    let patterns = ["short", "long", "mixed"];

    let mut group = c.benchmark_group("file_parsing");

    for &count in &mower_counts {
        for pattern in &patterns {
            let content = generate_mower_file(count, pattern);

            group.throughput(Throughput::Bytes(content.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{}_{}", pattern, count), count),
                &content,
                |b, content| {
                    b.iter(|| {
                        let program: Program = parse_str(black_box(content)).expect("valid input");
                        black_box(program)
                    })
                },
            );
        }
    }

    group.finish();
}

/// Benchmark parsing the fixture files
fn bench_real_files(c: &mut Criterion) {
    let fixture_files = ["tests/fixtures/two_mowers.txt", "tests/fixtures/east_wall.txt"];

    let mut group = c.benchmark_group("real_files");

    for file_path in fixture_files {
        if let Ok(content) = fs::read_to_string(file_path) {
            let file_name = file_path.rsplit('/').next().unwrap_or("unknown");

            group.throughput(Throughput::Bytes(content.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("real_file", file_name),
                &content,
                |b, content| b.iter(|| black_box(parse_str(black_box(content)))),
            );
        }
    }

    group.finish();
}

criterion_group!(
    parsing_benches,
    bench_single_line_parsing,
    bench_file_parsing,
    bench_real_files
);

criterion_main!(parsing_benches);
