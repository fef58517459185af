use std::collections::BTreeMap;

use super::{
    COVERAGE_WEIGHT, JUDGE_WEIGHT, RICHNESS_WEIGHT, best_platform, case_rate_series, case_rates,
    eval_rankings, filter_queries, match_rate_from_counts, query_stats,
};
use crate::dataset::cases::case_by_id;
use crate::dataset::evaluation::evaluations;
use crate::model::evaluation::EvalPlatform;
use crate::model::keys::Platform;
use crate::model::query::{PlatformRun, QueryRecord};

fn run(judge: f64, num_persons: u32) -> PlatformRun {
    PlatformRun { judge_score: judge, num_persons, dimensions: BTreeMap::new(), richness: 0.0 }
}

fn record(
    id: &str,
    query_type: &str,
    prompt: &str,
    runs: &[(EvalPlatform, f64, u32)],
) -> QueryRecord {
    QueryRecord {
        query_id: id.to_string(),
        prompt: prompt.to_string(),
        query_type: query_type.to_string(),
        language: "en".to_string(),
        platforms: runs.iter().map(|&(p, judge, n)| (p, run(judge, n))).collect(),
    }
}

#[test]
fn test_match_rate_rounds_and_survives_zero_ground_truth() {
    assert_eq!(match_rate_from_counts(0, 0), 0);
    assert_eq!(match_rate_from_counts(5, 10), 50);
    assert_eq!(match_rate_from_counts(7, 10), 70);
    assert_eq!(match_rate_from_counts(22, 30), 73);
    assert_eq!(match_rate_from_counts(27, 30), 90);
}

#[test]
fn test_case_rates_keep_stored_platform_order() {
    let case = case_by_id("inf-001").unwrap();
    let rates = case_rates(case);
    let platforms: Vec<Platform> = rates.iter().map(|r| r.platform).collect();
    assert_eq!(platforms, Platform::all().to_vec());
    let values: Vec<u32> = rates.iter().map(|r| r.rate).collect();
    assert_eq!(values, vec![90, 73, 60, 67, 53, 47]);
    assert_eq!(rates[0].matched_count, 27);
    assert_eq!(rates[0].total_returned, 48);
}

#[test]
fn test_case_rate_series_is_best_first() {
    let case = case_by_id("inf-001").unwrap();
    let series = case_rate_series(case);
    assert_eq!(series[0].platform, Platform::Lessie);
    assert_eq!(series[0].rate, 90);
    assert!(series.windows(2).all(|w| w[0].rate >= w[1].rate));
}

#[test]
fn test_query_stats_count_queries_persons_and_types() {
    let records = [
        record("rec-001", "recruiting", "Find senior ML engineers in Berlin", &[
            (EvalPlatform::Lessie, 0.8, 12),
            (EvalPlatform::Exa, 0.7, 8),
        ]),
        record("b2b-001", "b2b_prospecting", "Find CTOs at fintech startups", &[
            (EvalPlatform::Lessie, 0.9, 10),
        ]),
    ];
    let stats = query_stats(&records);
    assert_eq!(stats.total_queries, 2);
    assert_eq!(stats.total_persons, 30);
    let types: Vec<(&str, usize)> = stats
        .type_counts
        .iter()
        .map(|t| (t.query_type.as_str(), t.count))
        .collect();
    assert_eq!(types, vec![("b2b_prospecting", 1), ("recruiting", 1)]);
}

#[test]
fn test_filter_queries_by_type_and_search() {
    let records = [
        record("rec-001", "recruiting", "Find senior ML engineers in Berlin", &[]),
        record("det-001", "deterministic", "Find employees at Mistral AI", &[]),
    ];

    let by_type = filter_queries(&records, Some("recruiting"), None);
    assert_eq!(by_type.len(), 1);
    assert_eq!(by_type[0].query_id, "rec-001");

    // prompts match case-insensitively
    let by_prompt = filter_queries(&records, None, Some("BERLIN"));
    assert_eq!(by_prompt.len(), 1);
    assert_eq!(by_prompt[0].query_id, "rec-001");

    // ids match as a literal fragment
    let by_id = filter_queries(&records, None, Some("det-"));
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].query_id, "det-001");
    assert!(filter_queries(&records, None, Some("DET-")).is_empty());
}

#[test]
fn test_best_platform_skips_empty_runs_and_keeps_earlier_key_on_ties() {
    let contested = record("q-1", "recruiting", "prompt", &[
        (EvalPlatform::Lessie, 0.9, 0),
        (EvalPlatform::Exa, 0.8, 10),
        (EvalPlatform::Juicebox, 0.8, 5),
    ]);
    assert_eq!(best_platform(&contested), Some((EvalPlatform::Exa, 0.8)));

    let empty = record("q-2", "recruiting", "prompt", &[(EvalPlatform::Lessie, 0.9, 0)]);
    assert_eq!(best_platform(&empty), None);
}

#[test]
fn test_composite_weights_total_one() {
    assert_eq!(JUDGE_WEIGHT + RICHNESS_WEIGHT + COVERAGE_WEIGHT, 1.0);
}

#[test]
fn test_eval_rankings_over_published_summaries() {
    let rankings = eval_rankings(&evaluations());
    let order: Vec<EvalPlatform> = rankings.iter().map(|r| r.platform).collect();
    assert_eq!(order, vec![EvalPlatform::Lessie, EvalPlatform::Juicebox, EvalPlatform::Exa]);
    assert_eq!(rankings[0].judge_score, 84.45);
    assert!(rankings[0].composite > rankings[1].composite);
    assert!(rankings[1].composite > rankings[2].composite);
}
