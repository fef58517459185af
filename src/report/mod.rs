pub mod json;
pub mod text;

use serde::Serialize;

use crate::aggregate::pivot::{ChartRow, EvalDimensionRow, EvalKindRow, RadarRow};
use crate::aggregate::rates::{CaseRate, EvalRanking, QueryStats};
use crate::dataset::consensus::JudgeConsensus;
use crate::dataset::coverage::SourceCoverage;
use crate::model::cases::CaseStudy;
use crate::model::evaluation::{EvalCaseStudy, EvalPlatform, PlatformEvaluation, QueryKind};
use crate::model::keys::Scenario;
use crate::model::query::QueryView;
use crate::model::scores::AveragedScores;

/// Ranked per-platform averages under one scenario filter.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardView {
    pub scenario: Option<Scenario>,
    pub sort: &'static str,
    pub direction: &'static str,
    pub rows: Vec<AveragedScores>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub scenario: Option<Scenario>,
    pub rows: Vec<ChartRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarView {
    pub scenario: Option<Scenario>,
    pub rows: Vec<RadarRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StandingsView {
    pub rows: Vec<AveragedScores>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseRates {
    pub case: CaseStudy,
    pub rates: Vec<CaseRate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CasesView {
    pub scenario: Option<Scenario>,
    pub cases: Vec<CaseRates>,
}

/// One case study in full: sample persons, the best-first rate series, and
/// the judge-consensus cells when the case ships with them.
#[derive(Debug, Clone, Serialize)]
pub struct CaseDetailView {
    pub case: CaseStudy,
    pub series: Vec<CaseRate>,
    pub consensus: Vec<JudgeConsensus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageView {
    pub rows: Vec<SourceCoverage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub query_type: Option<QueryKind>,
    pub rankings: Vec<EvalRanking>,
    pub evaluations: Vec<PlatformEvaluation>,
    pub dimensions: Vec<EvalDimensionRow>,
    pub query_types: Vec<EvalKindRow>,
    pub cases: Vec<EvalCaseStudy>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BestRun {
    pub platform: EvalPlatform,
    pub judge_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryListing {
    pub query_id: String,
    pub query_type: String,
    pub prompt: String,
    pub platform_count: usize,
    pub best: Option<BestRun>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueriesView {
    pub source: String,
    pub stats: QueryStats,
    pub query_type: Option<String>,
    pub search: Option<String>,
    pub queries: Vec<QueryListing>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SingleQueryView {
    pub source: String,
    pub query: QueryView,
    pub best: Option<BestRun>,
}

pub fn points0(v: f64) -> String {
    format!("{v:.0}")
}

pub fn points1(v: f64) -> String {
    format!("{v:.1}")
}

pub fn points2(v: f64) -> String {
    format!("{v:.2}")
}

pub fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

/// Cuts long prompts down for one-line listings.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}
