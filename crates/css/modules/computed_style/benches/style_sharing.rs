//! Criterion benchmarks for style sharing.
//!
//! Measures cloning a style, full and fast-path inheritance over a chain of
//! children, and the equality predicates on shared and unshared styles.

use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use css_computed_style::{ComputedStyle, InitialStyle};
use css_values::{Color, Display, Size, Visibility};

fn styled_parent(initial: &InitialStyle) -> ComputedStyle {
    let mut parent = initial.create_style();
    parent.set_display(Display::Block);
    parent.set_width(Size::Fixed(640.0));
    parent.set_color(Color::rgb(20, 20, 20));
    parent.set_custom_property_value("--gap", "12px", true);
    parent
}

fn bench_clone(criterion: &mut Criterion) {
    let initial = InitialStyle::new();
    let parent = styled_parent(&initial);
    criterion.bench_function("clone_style", |bencher| {
        bencher.iter(|| black_box(parent.clone()));
    });
}

fn bench_inherit(criterion: &mut Criterion) {
    let initial = InitialStyle::new();
    let mut group = criterion.benchmark_group("inherit_chain");
    for &depth in &[16_usize, 256_usize] {
        let mut root = styled_parent(&initial);
        root.set_visibility(Visibility::Hidden);

        group.bench_with_input(BenchmarkId::new("full", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut parent = root.clone();
                for _ in 0..depth {
                    let mut child = initial.create_style();
                    child.inherit_from(&parent);
                    parent = child;
                }
                black_box(parent)
            });
        });

        group.bench_with_input(BenchmarkId::new("fast_path", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut parent = root.clone();
                for _ in 0..depth {
                    let mut child = initial.create_style();
                    child.fast_path_inherit_from(&parent);
                    parent = child;
                }
                black_box(parent)
            });
        });
    }
    group.finish();
}

fn bench_equality(criterion: &mut Criterion) {
    let initial = InitialStyle::new();
    let parent = styled_parent(&initial);
    let shared = parent.clone();
    let unshared = styled_parent(&initial);

    let mut group = criterion.benchmark_group("equality");
    group.bench_function("shared", |bencher| {
        bencher.iter(|| black_box(parent == shared));
    });
    group.bench_function("unshared", |bencher| {
        bencher.iter(|| black_box(parent == unshared));
    });
    group.bench_function("inherited_equal_unshared", |bencher| {
        bencher.iter(|| black_box(parent.inherited_equal(&unshared)));
    });
    group.finish();
}

criterion_group!(benches, bench_clone, bench_inherit, bench_equality);
criterion_main!(benches);
