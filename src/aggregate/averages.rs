use crate::model::keys::{Dimension, Platform, Scenario};
use crate::model::scores::{AveragedScores, DimensionScores, PlatformScenarioResult};

/// Arithmetic mean of every dimension and the overall score, one output
/// record per known platform in enumeration order. `scenario` of `None`
/// averages across all scenarios. A platform with no matching rows yields an
/// all-zero record rather than being dropped. Means round to the nearest
/// integer, halves away from zero.
pub fn average_scores(
    rows: &[PlatformScenarioResult],
    scenario: Option<Scenario>,
) -> Vec<AveragedScores> {
    Platform::all()
        .iter()
        .map(|&platform| {
            let selected: Vec<&PlatformScenarioResult> = rows
                .iter()
                .filter(|r| r.platform == platform && scenario.is_none_or(|s| r.scenario == s))
                .collect();
            if selected.is_empty() {
                return AveragedScores { platform, overall: 0.0, scores: DimensionScores::ZERO };
            }
            let n = selected.len() as f64;
            let mut scores = DimensionScores::ZERO;
            for &dim in Dimension::all() {
                let sum: f64 = selected.iter().map(|r| r.scores.get(dim)).sum();
                scores.set(dim, (sum / n).round());
            }
            let overall = selected.iter().map(|r| r.overall).sum::<f64>() / n;
            AveragedScores { platform, overall: overall.round(), scores }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/averages.rs"]
mod tests;
