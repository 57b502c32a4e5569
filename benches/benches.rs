use bicliques::bicliques::MaximalBicliques;
use bicliques::degeneracy::degeneracy_orientation;
use bicliques::implementation::petgraph_impl;
use bicliques::predefined_graphs::{create_grid_graph, create_random_graph};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_maximal_bicliques_grid_10(criterion: &mut Criterion) {
    let mut graph = petgraph_impl::new::<(), ()>();
    create_grid_graph(&mut graph, 10, 10);

    criterion.bench_function("maximal_bicliques_grid_10", |b| {
        b.iter(|| {
            for biclique in MaximalBicliques::compute(&graph).unwrap() {
                black_box(biclique);
            }
        })
    });
}

fn bench_maximal_bicliques_grid_30(criterion: &mut Criterion) {
    let mut graph = petgraph_impl::new::<(), ()>();
    create_grid_graph(&mut graph, 30, 30);

    criterion.bench_function("maximal_bicliques_grid_30", |b| {
        b.iter(|| {
            for biclique in MaximalBicliques::compute(&graph).unwrap() {
                black_box(biclique);
            }
        })
    });
}

fn bench_maximal_bicliques_random_100(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = petgraph_impl::new::<(), ()>();
    create_random_graph(&mut graph, 100, 300, &mut random);

    criterion.bench_function("maximal_bicliques_random_100", |b| {
        b.iter(|| {
            for biclique in MaximalBicliques::compute(&graph).unwrap() {
                black_box(biclique);
            }
        })
    });
}

fn bench_maximal_bicliques_random_200(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = petgraph_impl::new::<(), ()>();
    create_random_graph(&mut graph, 200, 800, &mut random);

    criterion.bench_function("maximal_bicliques_random_200", |b| {
        b.iter(|| {
            for biclique in MaximalBicliques::compute(&graph).unwrap() {
                black_box(biclique);
            }
        })
    });
}

fn bench_degeneracy_orientation_random_200(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = petgraph_impl::new::<(), ()>();
    create_random_graph(&mut graph, 200, 800, &mut random);

    criterion.bench_function("degeneracy_orientation_random_200", |b| {
        b.iter(|| {
            black_box(degeneracy_orientation(&graph).unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_maximal_bicliques_grid_10,
    bench_maximal_bicliques_grid_30,
    bench_maximal_bicliques_random_100,
    bench_maximal_bicliques_random_200,
    bench_degeneracy_orientation_random_200,
);
criterion_main!(benches);
