use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use social_graph::SocialNetwork;

const INTERESTS: [&str; 12] = [
    "photography", "hiking", "cooking", "technology", "gaming", "music",
    "travel", "yoga", "chess", "climbing", "film", "running",
];

/// Random social network with `users` users, ~`degree` friends and 3 interests each
fn build_network(users: usize, degree: usize) -> SocialNetwork {
    let mut rng = StdRng::seed_from_u64(42);
    let network = SocialNetwork::new();

    for i in 0..users {
        network
            .create_user(&format!("user{}", i), &format!("User {}", i), 20 + (i % 50) as u32, "Boston")
            .unwrap();
    }
    for i in 0..users {
        for _ in 0..degree / 2 {
            let j = rng.gen_range(0..users);
            if i != j {
                network
                    .add_friendship(&format!("user{}", i), &format!("user{}", j), None)
                    .unwrap();
            }
        }
        for _ in 0..3 {
            let interest = INTERESTS[rng.gen_range(0..INTERESTS.len())];
            network.add_interest(&format!("user{}", i), interest).unwrap();
        }
    }
    network
}

/// Benchmark user and friendship insertion throughput
fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| criterion::black_box(build_network(size, 10)));
        });
    }
    group.finish();
}

/// Benchmark second-degree expansion and ranking
fn bench_friends_of_friends(c: &mut Criterion) {
    let mut group = c.benchmark_group("friends_of_friends");

    for size in [1000, 10_000].iter() {
        let network = build_network(*size, 20);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(network.find_friends_of_friends("user0")));
        });
    }
    group.finish();
}

/// Benchmark BFS shortest path between distant users
fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for size in [1000, 10_000].iter() {
        let network = build_network(*size, 6);
        let target = format!("user{}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(network.find_shortest_connection_path("user0", &target)));
        });
    }
    group.finish();
}

/// Benchmark interest recommendations and community grouping
fn bench_interests(c: &mut Criterion) {
    let mut group = c.benchmark_group("interests");
    let network = build_network(5000, 10);

    group.bench_function("recommend", |b| {
        b.iter(|| criterion::black_box(network.recommend_friends_by_interests("user0")));
    });

    group.bench_function("communities", |b| {
        b.iter(|| criterion::black_box(network.find_communities(3)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_friends_of_friends,
    bench_shortest_path,
    bench_interests,
);
criterion_main!(benches);
