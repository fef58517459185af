use std::collections::BTreeMap;

use super::{
    render_case_detail, render_cases, render_chart, render_coverage, render_leaderboard,
    render_queries, render_query, render_radar, render_results, render_standings,
};
use crate::aggregate::averages::average_scores;
use crate::aggregate::pivot::{
    eval_dimension_rows, eval_kind_rows, pivot_for_chart, pivot_for_radar,
};
use crate::aggregate::ranking::{SortDirection, SortField, overall_standings, rank_and_sort};
use crate::aggregate::rates::{
    best_platform, case_rate_series, case_rates, eval_rankings, query_stats,
};
use crate::dataset::benchmarks::benchmark_rows;
use crate::dataset::cases::case_by_id;
use crate::dataset::consensus::consensus_for_case;
use crate::dataset::coverage::coverage_rows;
use crate::dataset::evaluation::{eval_case_studies, evaluations};
use crate::model::evaluation::EvalPlatform;
use crate::model::keys::{Dimension, Platform, Scenario};
use crate::model::query::{
    PersonDimension, PersonRecord, PlatformRun, QueryDetail, QueryRecord, QueryView,
};
use crate::report::{
    BestRun, CaseDetailView, CaseRates, CasesView, ChartView, CoverageView, LeaderboardView,
    QueriesView, QueryListing, RadarView, ResultsView, SingleQueryView, StandingsView,
};

fn run(judge: f64, num_persons: u32) -> PlatformRun {
    PlatformRun { judge_score: judge, num_persons, dimensions: BTreeMap::new(), richness: 72.5 }
}

fn sample_records() -> Vec<QueryRecord> {
    vec![
        QueryRecord {
            query_id: "rec-001".to_string(),
            prompt: "Find senior machine learning engineers in Berlin with startup experience"
                .to_string(),
            query_type: "recruiting".to_string(),
            language: "en".to_string(),
            platforms: [(EvalPlatform::Lessie, run(84.45, 12))].into_iter().collect(),
        },
        QueryRecord {
            query_id: "det-001".to_string(),
            prompt: "Find employees at Mistral AI".to_string(),
            query_type: "deterministic".to_string(),
            language: "en".to_string(),
            platforms: BTreeMap::new(),
        },
    ]
}

fn listings(records: &[QueryRecord]) -> Vec<QueryListing> {
    records
        .iter()
        .map(|r| QueryListing {
            query_id: r.query_id.clone(),
            query_type: r.query_type.clone(),
            prompt: r.prompt.clone(),
            platform_count: r.platforms.len(),
            best: best_platform(r).map(|(platform, judge_score)| BestRun { platform, judge_score }),
        })
        .collect()
}

#[test]
fn test_leaderboard_lists_ranked_platforms() {
    let rows = rank_and_sort(
        &average_scores(benchmark_rows(), None),
        SortField::Overall,
        SortDirection::Desc,
    );
    let view = LeaderboardView { scenario: None, sort: "overall", direction: "desc", rows };
    let text = render_leaderboard(&view);
    assert!(text.contains("Platform Leaderboard"));
    assert!(text.contains("Sort: overall (desc)"));
    assert!(text.contains("Contact Rate"));
    assert!(text.find("Lessie").unwrap() < text.find("EXA").unwrap());
}

#[test]
fn test_standings_table_is_rank_ordered() {
    let view = StandingsView { rows: overall_standings(benchmark_rows()) };
    let text = render_standings(&view);
    let first_row = text.lines().nth(4).unwrap();
    assert!(first_row.starts_with("   1  Lessie"));
    assert!(first_row.ends_with("89"));
}

#[test]
fn test_chart_header_follows_requested_dimensions() {
    let dims = [Dimension::Recall, Dimension::Precision];
    let view = ChartView {
        scenario: Some(Scenario::Influencer),
        rows: pivot_for_chart(benchmark_rows(), Some(Scenario::Influencer), &dims),
    };
    let text = render_chart(&view);
    assert!(text.contains("Dimension Chart"));
    assert!(text.contains("Scenario: Influencer Discovery"));
    assert!(text.contains("Recall  Precision"));
    assert!(!text.contains("Contact Rate"));
}

#[test]
fn test_radar_keeps_response_time_out() {
    let platforms = [Platform::Exa, Platform::Lessie];
    let view = RadarView { scenario: None, rows: pivot_for_radar(benchmark_rows(), None, &platforms) };
    let text = render_radar(&view);
    assert!(text.contains("Dimension Radar"));
    assert!(text.contains("Scenario: all scenarios"));
    assert!(text.contains("EXA"));
    assert!(text.contains("Contact Rate"));
    assert!(!text.contains("Response Time"));
}

#[test]
fn test_cases_show_match_counts() {
    let case = case_by_id("inf-001").unwrap();
    let view = CasesView {
        scenario: Some(Scenario::Influencer),
        cases: vec![CaseRates { case: *case, rates: case_rates(case) }],
    };
    let text = render_cases(&view);
    assert!(text.contains("Case Studies"));
    assert!(text.contains("inf-001  [Influencer Discovery]"));
    assert!(text.contains("ground truth: 30 profiles"));
    assert!(text.contains(" 27/30  matched"));
    assert!(text.contains("90%"));
}

#[test]
fn test_case_detail_shows_samples_series_and_consensus() {
    let case = case_by_id("inf-001").unwrap();
    let view = CaseDetailView {
        case: *case,
        series: case_rate_series(case),
        consensus: consensus_for_case("inf-001"),
    };
    let text = render_case_detail(&view);
    assert!(text.contains("Case inf-001"));
    assert!(text.contains("Lessie: 27/30 matched (90%), 48 returned"));
    assert!(text.contains("Mikayla Nogueira"));
    assert!(text.contains("matched yes"));
    assert!(text.contains("Match-rate series (best first)"));
    assert!(text.contains("Judge consensus (gpt / claude / gemini -> final)"));
    assert!(text.contains("  ->  "));
}

#[test]
fn test_coverage_table_reports_percentages() {
    let view = CoverageView { rows: coverage_rows().to_vec() };
    let text = render_coverage(&view);
    assert!(text.contains("Source Coverage"));
    assert!(text.contains("LinkedIn"));
    assert!(text.contains("95"));
}

#[test]
fn test_results_report_composite_sections() {
    let evals = evaluations();
    let view = ResultsView {
        query_type: None,
        rankings: eval_rankings(&evals),
        dimensions: eval_dimension_rows(&evals),
        query_types: eval_kind_rows(&evals),
        cases: eval_case_studies(),
        evaluations: evals,
    };
    let text = render_results(&view);
    assert!(text.contains("People-Search Evaluation"));
    assert!(text.contains("Judge model: google/gemini-3-flash-preview"));
    assert!(text.contains("Composite = 60% judge + 15% richness + 25% coverage"));
    assert!(text.contains("Rankings"));
    assert!(text.contains("Run Volume"));
    assert!(text.contains("Dimension Averages"));
    assert!(text.contains("Composite by Query Type"));
    assert!(text.contains("Case Studies"));
    assert!(text.contains("83.21"));
    assert!(text.contains("10.6h"));
    assert!(text.find("Lessie").unwrap() < text.find("Juicebox").unwrap());
}

#[test]
fn test_queries_listing_formats_rows() {
    let records = sample_records();
    let stats = query_stats(&records);
    let queries = listings(&records);
    let view = QueriesView {
        source: "./fixtures".to_string(),
        stats,
        query_type: None,
        search: Some("Berlin".to_string()),
        queries,
    };
    let text = render_queries(&view);
    assert!(text.contains("Query Corpus"));
    assert!(text.contains("Source: ./fixtures"));
    assert!(text.contains("Queries: 2  Person evaluations: 12"));
    assert!(text.contains("Recruiting"));
    assert!(text.contains("Deterministic"));
    assert!(text.contains("search=\"Berlin\""));
    assert!(text.contains("Lessie 84.45"));
    assert!(text.contains("..."));
    assert!(text.contains("2 queries shown"));
}

#[test]
fn test_query_without_detail_says_so() {
    let record = QueryRecord {
        query_id: "det-001".to_string(),
        prompt: "Find employees at Mistral AI".to_string(),
        query_type: "deterministic".to_string(),
        language: "en".to_string(),
        platforms: [(EvalPlatform::Lessie, run(90.0, 0))].into_iter().collect(),
    };
    let query = QueryView::assemble(record, None).unwrap();
    let view = SingleQueryView { source: "./fixtures".to_string(), query, best: None };
    let text = render_query(&view);
    assert!(text.contains("Query det-001"));
    assert!(text.contains("no results returned"));
    assert!(text.contains("No person-level detail for this query."));
}

#[test]
fn test_query_with_detail_lists_persons() {
    let records = sample_records();
    let record = records[0].clone();
    let person = PersonRecord {
        idx: 1,
        name: "Mikayla Nogueira".to_string(),
        score: 84.45,
        linkedin: "https://linkedin.com/in/mikayla".to_string(),
        verification: "Verified via TikTok profile".to_string(),
        dimensions: [(
            "relevance".to_string(),
            PersonDimension { score: 75.0, reasoning: "strong fit".to_string() },
        )]
        .into_iter()
        .collect(),
    };
    let detail = QueryDetail {
        query_id: "rec-001".to_string(),
        by_platform: [(EvalPlatform::Lessie, vec![person])].into_iter().collect(),
    };
    let query = QueryView::assemble(record, Some(detail)).unwrap();
    let view = SingleQueryView {
        source: "./fixtures".to_string(),
        query,
        best: Some(BestRun { platform: EvalPlatform::Lessie, judge_score: 84.45 }),
    };
    let text = render_query(&view);
    assert!(text.contains("Best run: Lessie 84.45"));
    assert!(text.contains("Platform Runs"));
    assert!(text.contains("Persons: Lessie (1 scored)"));
    assert!(text.contains("   1. Mikayla Nogueira  84.45"));
    assert!(text.contains("relevance 75.0"));
}
