use serde::Serialize;

use crate::aggregate::averages::average_scores;
use crate::aggregate::rates::query_type_composite;
use crate::catalog;
use crate::model::evaluation::{EvalDimension, EvalPlatform, PlatformEvaluation, QueryKind};
use crate::model::keys::{Dimension, Platform, Scenario};
use crate::model::scores::PlatformScenarioResult;

/// One decimal place, for chart-facing values.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartValue {
    pub dimension: Dimension,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub platform: Platform,
    pub label: &'static str,
    pub values: Vec<ChartValue>,
}

/// Bar-chart pivot: one row per platform, one value per requested dimension.
/// Values come from the same `average_scores` pass the tables use, so chart
/// and table agree bit for bit.
pub fn pivot_for_chart(
    rows: &[PlatformScenarioResult],
    scenario: Option<Scenario>,
    dimensions: &[Dimension],
) -> Vec<ChartRow> {
    average_scores(rows, scenario)
        .iter()
        .map(|avg| ChartRow {
            platform: avg.platform,
            label: catalog::platform(avg.platform).label,
            values: dimensions
                .iter()
                .map(|&dimension| ChartValue { dimension, value: avg.scores.get(dimension) })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarValue {
    pub platform: Platform,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarRow {
    pub dimension: Dimension,
    pub label: &'static str,
    pub values: Vec<RadarValue>,
}

/// Radar pivot, transposed: one row per display dimension, one value per
/// selected platform.
pub fn pivot_for_radar(
    rows: &[PlatformScenarioResult],
    scenario: Option<Scenario>,
    platforms: &[Platform],
) -> Vec<RadarRow> {
    let averaged = average_scores(rows, scenario);
    Dimension::display()
        .iter()
        .map(|&dimension| RadarRow {
            dimension,
            label: catalog::dimension(dimension).label,
            values: platforms
                .iter()
                .map(|&platform| RadarValue {
                    platform,
                    value: averaged
                        .iter()
                        .find(|a| a.platform == platform)
                        .map(|a| a.scores.get(dimension))
                        .unwrap_or(0.0),
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvalCell {
    pub platform: EvalPlatform,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalDimensionRow {
    pub dimension: EvalDimension,
    pub label: &'static str,
    pub cells: Vec<EvalCell>,
}

/// Evaluation radar: one row per evaluation dimension, one one-decimal value
/// per summary platform.
pub fn eval_dimension_rows(evals: &[PlatformEvaluation]) -> Vec<EvalDimensionRow> {
    EvalDimension::all()
        .iter()
        .map(|&dimension| EvalDimensionRow {
            dimension,
            label: catalog::eval_dimension(dimension).label,
            cells: evals
                .iter()
                .map(|e| EvalCell {
                    platform: e.platform,
                    value: round1(e.by_dimension.get(dimension)),
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalKindRow {
    pub kind: QueryKind,
    pub label: &'static str,
    pub cells: Vec<EvalCell>,
}

/// Per-query-type composites, one row per kind.
pub fn eval_kind_rows(evals: &[PlatformEvaluation]) -> Vec<EvalKindRow> {
    QueryKind::all()
        .iter()
        .map(|&kind| EvalKindRow {
            kind,
            label: catalog::query_kind(kind).label,
            cells: evals
                .iter()
                .map(|e| EvalCell {
                    platform: e.platform,
                    value: round1(query_type_composite(e, kind)),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/pivot.rs"]
mod tests;
