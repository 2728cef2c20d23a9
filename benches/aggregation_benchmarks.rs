// Performance benchmarks for playerstats
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use playerstats::aggregation::structs::aggregation_engine::AggregationEngine;
use playerstats::aggregation::structs::scan_context::ScanContext;
use playerstats::common::structs::clock::Clock;
use playerstats::config::structs::share_config::ShareConfig;
use playerstats::output::structs::rendered_result::RenderedResult;
use playerstats::player::structs::memory_directory::MemoryDirectory;
use playerstats::player::structs::player_record::PlayerRecord;
use playerstats::share::structs::share_cache::ShareCache;
use playerstats::statistic::enums::statistic_kind::StatisticKind;
use playerstats::statistic::structs::statistic_descriptor::StatisticDescriptor;

fn create_engine(players: usize) -> AggregationEngine {
    let directory = MemoryDirectory::new();
    for index in 0..players {
        let value = ((index * 7919) % 10_000) as i32;
        directory.insert_player(PlayerRecord::new(&format!("Player{index}")).with_stat("jump", None, value));
    }
    AggregationEngine::new(Arc::new(directory))
}

fn jump() -> StatisticDescriptor {
    StatisticDescriptor { name: String::from("jump"), kind: StatisticKind::Untyped }
}

fn bench_server_total(c: &mut Criterion) {
    let engine = create_engine(20_000);
    let descriptor = jump();
    let context = ScanContext::unbounded();

    c.bench_function("server_total_20k", |b| {
        b.iter(|| black_box(engine.server_total(&descriptor, None, &context)));
    });
}

fn bench_top_n(c: &mut Criterion) {
    let engine = create_engine(20_000);
    let descriptor = jump();
    let context = ScanContext::unbounded();
    let mut group = c.benchmark_group("top_n_20k");

    for limit in [1usize, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(limit), limit, |b, &limit| {
            b.iter(|| black_box(engine.top_n(&descriptor, None, limit, 100, &context)));
        });
    }
    group.finish();
}

fn bench_top_n_with_deadline(c: &mut Criterion) {
    let engine = create_engine(20_000);
    let descriptor = jump();
    let context = ScanContext::new(Default::default(), Some(Duration::from_secs(60)));

    c.bench_function("top_n_20k_deadline", |b| {
        b.iter(|| black_box(engine.top_n(&descriptor, None, 10, 10, &context)));
    });
}

fn bench_share_redeem(c: &mut Criterion) {
    let settings = ShareConfig { cooldown: 0, max_entries: 1_000, ..ShareConfig::default() };
    let cache = ShareCache::new(settings, Arc::new(Clock::default()), Arc::new(|_: &str, _: &str| true));
    let payload = RenderedResult::new("Top 10 Jump\n 1. Grace 25");
    let code = cache.share("Ada", payload.clone()).unwrap();

    c.bench_function("redeem", |b| {
        b.iter(|| black_box(cache.redeem(&code, "Grace")));
    });
    c.bench_function("share", |b| {
        b.iter(|| black_box(cache.share("Ada", payload.clone())));
    });
}

criterion_group!(
    benches,
    bench_server_total,
    bench_top_n,
    bench_top_n_with_deadline,
    bench_share_redeem
);
criterion_main!(benches);
