use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use polyclip::*;
use std::hint::black_box;

/// Star polygon with `count` points, heavily self intersecting when `skip > 1`.
fn star(count: usize, radius: f64, skip: usize) -> Path64 {
    (0..count)
        .map(|i| {
            let angle = std::f64::consts::TAU * ((i * skip) % count) as f64 / count as f64;
            Point64::new(
                (radius * angle.cos()).round() as i64,
                (radius * angle.sin()).round() as i64,
            )
        })
        .collect()
}

/// Grid of `n * n` overlapping squares.
fn square_grid(n: i64) -> Paths64 {
    let mut result = Vec::new();
    for i in 0..n {
        for j in 0..n {
            let (x, y) = (i * 70, j * 70);
            result.push(path64![(x, y), (x + 100, y), (x + 100, y + 100), (x, y + 100)]);
        }
    }
    result
}

fn boolean_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("boolean");
    for &n in &[4, 16, 32] {
        let grid = square_grid(n);
        group.bench_with_input(BenchmarkId::new("union_grid", n * n), &grid, |b, grid| {
            b.iter(|| union_64(black_box(grid), &[], FillRule::NonZero))
        });
    }

    for &count in &[101, 997] {
        let subject = star(count, 10000.0, 7);
        let clip = star(count, 8000.0, 3);
        group.bench_with_input(
            BenchmarkId::new("intersect_stars", count),
            &(subject, clip),
            |b, (subject, clip)| {
                b.iter(|| {
                    intersect_64(
                        black_box(std::slice::from_ref(subject)),
                        std::slice::from_ref(clip),
                        FillRule::EvenOdd,
                    )
                })
            },
        );
    }

    group.finish();
}

fn offset_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("offset");
    for join_type in [JoinType::Miter, JoinType::Round] {
        let grid = union_64(&square_grid(8), &[], FillRule::NonZero).unwrap_or_default();
        group.bench_with_input(
            BenchmarkId::new("inflate_grid", format!("{join_type:?}")),
            &grid,
            |b, grid| {
                b.iter(|| {
                    inflate_paths_64(black_box(grid), 15.0, join_type, EndType::Polygon, 2.0, 0.0)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, boolean_group, offset_group);
criterion_main!(benches);
