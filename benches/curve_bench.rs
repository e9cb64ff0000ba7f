use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fraktal_viewer::core::{curve, shape, FractalKind};
use glam::DVec2;
use std::hint::black_box;

fn bench_curve_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_expand");

    let a = DVec2::new(0.0, 0.0);
    let b = DVec2::new(900.0, 0.0);

    for &depth in &[2u32, 4, 6] {
        for kind in FractalKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.label(), depth), &depth, |bencher, &depth| {
                bencher.iter(|| {
                    let mut out = Vec::with_capacity(curve::segment_count(kind, depth));
                    curve::expand(kind, black_box(depth), black_box(a), black_box(b), &mut out);
                    black_box(out.len())
                })
            });
        }
    }

    group.finish();
}

fn bench_outline(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline");

    let center = DVec2::new(750.0, 350.0);
    let depth = 4u32;

    for kind in FractalKind::ALL {
        let anchor = shape::anchor_for(kind, center, 320.0);
        group.bench_function(BenchmarkId::new(kind.label(), depth), |bencher| {
            bencher.iter(|| {
                let mut out = Vec::with_capacity(shape::outline_segment_count(kind, depth));
                shape::outline(
                    kind,
                    black_box(center),
                    black_box(anchor),
                    black_box(depth),
                    &mut out,
                );
                black_box(out.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_curve_expand, bench_outline);
criterion_main!(benches);
