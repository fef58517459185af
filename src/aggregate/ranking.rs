use std::cmp::Ordering;

use crate::aggregate::averages::average_scores;
use crate::model::keys::Dimension;
use crate::model::scores::{AveragedScores, PlatformScenarioResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Overall,
    Dimension(Dimension),
}

impl SortField {
    pub fn parse(s: &str) -> Option<SortField> {
        if s == "overall" {
            return Some(SortField::Overall);
        }
        Dimension::parse(s).map(SortField::Dimension)
    }

    pub fn name(self) -> &'static str {
        match self {
            SortField::Overall => "overall",
            SortField::Dimension(dim) => dim.name(),
        }
    }

    pub fn value(self, row: &AveragedScores) -> f64 {
        match self {
            SortField::Overall => row.overall,
            SortField::Dimension(dim) => row.scores.get(dim),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Reorders averaged records by the selected field. The sort is stable, so
/// exact ties keep the incoming platform order in either direction. Rank is
/// positional in the result, not stored on the record.
pub fn rank_and_sort(
    averaged: &[AveragedScores],
    field: SortField,
    direction: SortDirection,
) -> Vec<AveragedScores> {
    let mut out = averaged.to_vec();
    out.sort_by(|a, b| {
        let ord = field
            .value(a)
            .partial_cmp(&field.value(b))
            .unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    out
}

/// Home-view standings: mean overall per platform across every scenario,
/// best first.
pub fn overall_standings(rows: &[PlatformScenarioResult]) -> Vec<AveragedScores> {
    rank_and_sort(
        &average_scores(rows, None),
        SortField::Overall,
        SortDirection::Desc,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/ranking.rs"]
mod tests;
