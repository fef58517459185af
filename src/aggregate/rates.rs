use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::cases::CaseStudy;
use crate::model::evaluation::{EvalPlatform, PlatformEvaluation, QueryKind};
use crate::model::keys::Platform;
use crate::model::query::QueryRecord;

/// Ground-truth match rate in whole percent. A case with no ground truth
/// rates as 0, never a division error.
pub fn match_rate_from_counts(matched: u32, ground_truth: u32) -> u32 {
    if ground_truth == 0 {
        return 0;
    }
    (matched as f64 / ground_truth as f64 * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseRate {
    pub platform: Platform,
    pub matched_count: u32,
    pub total_returned: u32,
    pub rate: u32,
}

/// Match rates for one case study, in the order the case stores its platform
/// results (platform enumeration order).
pub fn case_rates(case: &CaseStudy) -> Vec<CaseRate> {
    case.platform_results
        .iter()
        .map(|r| CaseRate {
            platform: r.platform,
            matched_count: r.matched_count,
            total_returned: r.total_returned,
            rate: match_rate_from_counts(r.matched_count, case.ground_truth_count),
        })
        .collect()
}

/// Bar series for one case: rates best-first, ties keeping platform order.
pub fn case_rate_series(case: &CaseStudy) -> Vec<CaseRate> {
    let mut series = case_rates(case);
    series.sort_by(|a, b| b.rate.cmp(&a.rate));
    series
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub query_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryStats {
    pub total_queries: usize,
    pub total_persons: u64,
    pub type_counts: Vec<TypeCount>,
}

/// Corpus-level stats for a loaded query index. The person total counts
/// every platform run of every query; the type list is derived from the
/// data itself, sorted by name.
pub fn query_stats(records: &[QueryRecord]) -> QueryStats {
    let total_persons = records
        .iter()
        .flat_map(|r| r.platforms.values())
        .map(|run| u64::from(run.num_persons))
        .sum();
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.query_type.as_str()).or_insert(0) += 1;
    }
    QueryStats {
        total_queries: records.len(),
        total_persons,
        type_counts: counts
            .into_iter()
            .map(|(query_type, count)| TypeCount { query_type: query_type.to_string(), count })
            .collect(),
    }
}

/// Filters a query index by exact type and/or free-text search. Search
/// matches the prompt case-insensitively or the query id case-sensitively.
pub fn filter_queries<'a>(
    records: &'a [QueryRecord],
    query_type: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a QueryRecord> {
    let needle = search.map(str::to_lowercase);
    records
        .iter()
        .filter(|r| query_type.is_none_or(|t| r.query_type == t))
        .filter(|r| match (search, &needle) {
            (Some(raw), Some(lower)) => {
                r.prompt.to_lowercase().contains(lower.as_str()) || r.query_id.contains(raw)
            }
            _ => true,
        })
        .collect()
}

/// The winning run for one query: highest judge score among platforms that
/// actually returned persons. Ties keep the earlier platform key.
pub fn best_platform(record: &QueryRecord) -> Option<(EvalPlatform, f64)> {
    let mut best: Option<(EvalPlatform, f64)> = None;
    for (&platform, run) in &record.platforms {
        if run.num_persons == 0 {
            continue;
        }
        match best {
            Some((_, score)) if run.judge_score <= score => {}
            _ => best = Some((platform, run.judge_score)),
        }
    }
    best
}

pub const JUDGE_WEIGHT: f64 = 0.60;
pub const RICHNESS_WEIGHT: f64 = 0.15;
pub const COVERAGE_WEIGHT: f64 = 0.25;

/// Blended ranking score for an evaluation platform. Coverage is the
/// normalized result-depth dimension.
pub fn composite_score(judge: f64, richness: f64, coverage: f64) -> f64 {
    JUDGE_WEIGHT * judge + RICHNESS_WEIGHT * richness + COVERAGE_WEIGHT * coverage
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvalRanking {
    pub platform: EvalPlatform,
    pub composite: f64,
    pub judge_score: f64,
    pub richness: f64,
    pub coverage: f64,
}

/// Ranks the evaluation platforms by composite, best first; ties keep the
/// incoming order.
pub fn eval_rankings(evals: &[PlatformEvaluation]) -> Vec<EvalRanking> {
    let mut out: Vec<EvalRanking> = evals
        .iter()
        .map(|e| {
            let coverage = e.by_dimension.result_depth;
            EvalRanking {
                platform: e.platform,
                composite: composite_score(e.judge_score, e.richness, coverage),
                judge_score: e.judge_score,
                richness: e.richness,
                coverage,
            }
        })
        .collect();
    out.sort_by(|a, b| b.composite.partial_cmp(&a.composite).unwrap_or(Ordering::Equal));
    out
}

/// Composite restricted to one query type: the type's average judge score
/// and result depth blended with the platform-wide richness.
pub fn query_type_composite(eval: &PlatformEvaluation, kind: QueryKind) -> f64 {
    let stats = eval.query_type(kind);
    composite_score(stats.avg_score, eval.richness, stats.dimensions.result_depth)
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/rates.rs"]
mod tests;
