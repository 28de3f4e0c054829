//! Ranking throughput benchmarks
//!
//! Run with: cargo bench --bench ranking_benchmarks

use chrono::{Duration, Utc};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use glocal::models::{
    ContentType, Engagement, Location, SearchQuery, SearchResult, SortBy, TrendingContent,
    TrendingPeriod,
};
use glocal::search::SearchAlgorithms;
use glocal::trending::TrendingAlgorithms;

const TITLES: &[&str] = &[
    "Jazz Night at the Blue Room",
    "Saturday Farmers Market",
    "Open Mic Comedy",
    "Pottery Workshop",
    "Community Garden Meetup",
];

const CATEGORIES: &[&str] = &["music", "food", "art", "community", "sports", "knitting"];

/// Create synthetic search rows spread around a city center
fn create_bench_results(count: usize) -> Vec<SearchResult> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let mut result = SearchResult::new(
                format!("r{}", i),
                ContentType::Event,
                TITLES[i % TITLES.len()],
            );
            result.description = Some("Live music, food and friends every week".to_string());
            result.tags = vec!["music".to_string(), "weekly".to_string()];
            result.engagement = Some(Engagement {
                likes: (i % 300) as u64,
                comments: (i % 40) as u64,
                shares: (i % 10) as u64,
                views: (i % 3000) as u64,
            });
            result.location = Some(Location {
                city: Some("Austin".to_string()),
                latitude: Some(30.2672 + (i % 100) as f64 * 0.001),
                longitude: Some(-97.7431 - (i % 100) as f64 * 0.001),
                ..Default::default()
            });
            result.created_at = now - Duration::hours((i % 2000) as i64);
            result
        })
        .collect()
}

fn create_bench_content(count: usize) -> Vec<TrendingContent> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let mut content = TrendingContent::new(
                format!("c{}", i),
                CATEGORIES[i % CATEGORIES.len()],
                TITLES[i % TITLES.len()],
            );
            content.engagement.likes = (i % 500) as u64;
            content.engagement.views = (i % 5000) as u64 + 1;
            content.engagement.velocity = (i % 30) as f64;
            content.created_at = now - Duration::minutes((i % 10_000) as i64);
            content
        })
        .collect()
}

fn bench_search_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_ranking");
    let search = SearchAlgorithms::default();

    for size in [1_000usize, 10_000] {
        let results = create_bench_results(size);

        group.bench_with_input(BenchmarkId::new("relevance", size), &results, |b, results| {
            let query = SearchQuery::new("jazz").near(30.27, -97.74, 25.0);
            b.iter(|| search.rank_search_results(black_box(results.clone()), &query))
        });

        group.bench_with_input(BenchmarkId::new("distance", size), &results, |b, results| {
            let query = SearchQuery::new("jazz").sort_by(SortBy::Distance);
            b.iter(|| search.rank_search_results(black_box(results.clone()), &query))
        });

        group.bench_with_input(BenchmarkId::new("pipeline", size), &results, |b, results| {
            let query = SearchQuery::new("market")
                .near(30.27, -97.74, 5.0)
                .page(2, 20);
            b.iter(|| search.search(black_box(results.clone()), &query))
        });
    }

    group.finish();
}

fn bench_trending_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("trending_ranking");
    let trending = TrendingAlgorithms::default();

    for size in [1_000usize, 10_000] {
        let content = create_bench_content(size);

        for period in [TrendingPeriod::Hour, TrendingPeriod::Month] {
            group.bench_with_input(
                BenchmarkId::new(period.to_string(), size),
                &content,
                |b, content| b.iter(|| trending.rank_trending_content(black_box(content.clone()), period)),
            );
        }
    }

    group.bench_function("single_score", |b| {
        let content = create_bench_content(1).remove(0);
        b.iter(|| trending.calculate_trending_score(black_box(&content), TrendingPeriod::Day))
    });

    group.finish();
}

criterion_group!(benches, bench_search_ranking, bench_trending_ranking);
criterion_main!(benches);
