use criterion::{BatchSize, Criterion, criterion_group};
use rand::Rng;
use uncross::{Detector, Polygon, Untangler};

type Sample = [[f64; 2]; 100];

fn random_polygon() -> Polygon<f64> {
    let mut rng = rand::rng();

    Polygon::from(rng.random::<Sample>().to_vec())
}

pub fn random_polygons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("random polygons");

    group.bench_function("detect", |b| {
        b.iter_batched(
            random_polygon,
            |polygon| {
                std::hint::black_box(Detector::new().find_intersections(&polygon).len());
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("fix one", |b| {
        b.iter_batched(
            random_polygon,
            |polygon| {
                let untangler = Untangler::new().with_fix_only_one(true);
                std::hint::black_box(untangler.execute(polygon)).ok();
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("fix all", |b| {
        b.iter_batched(
            random_polygon,
            |polygon| {
                std::hint::black_box(Untangler::new().execute(polygon)).ok();
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, random_polygons);
