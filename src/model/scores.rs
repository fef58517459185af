use serde::Serialize;

use crate::model::keys::{Dimension, Platform, Scenario};

/// Scores are 0-100 points on every axis. Source data stays in range, but
/// nothing here rejects out-of-range values; aggregation must stay total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScores {
    pub recall: f64,
    pub precision: f64,
    pub data_coverage: f64,
    pub contact_rate: f64,
    pub richness: f64,
    pub response_time: f64,
}

impl DimensionScores {
    pub const ZERO: DimensionScores = DimensionScores {
        recall: 0.0,
        precision: 0.0,
        data_coverage: 0.0,
        contact_rate: 0.0,
        richness: 0.0,
        response_time: 0.0,
    };

    pub fn get(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Recall => self.recall,
            Dimension::Precision => self.precision,
            Dimension::DataCoverage => self.data_coverage,
            Dimension::ContactRate => self.contact_rate,
            Dimension::Richness => self.richness,
            Dimension::ResponseTime => self.response_time,
        }
    }

    pub fn set(&mut self, dim: Dimension, value: f64) {
        match dim {
            Dimension::Recall => self.recall = value,
            Dimension::Precision => self.precision = value,
            Dimension::DataCoverage => self.data_coverage = value,
            Dimension::ContactRate => self.contact_rate = value,
            Dimension::Richness => self.richness = value,
            Dimension::ResponseTime => self.response_time = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformScenarioResult {
    pub platform: Platform,
    pub scenario: Scenario,
    pub scores: DimensionScores,
    pub overall: f64,
    pub rank: u32,
    pub result_count: u32,
    pub avg_response_time_ms: u32,
}

/// One leaderboard row: the per-dimension and overall means for a platform
/// under the active scenario filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AveragedScores {
    pub platform: Platform,
    pub overall: f64,
    pub scores: DimensionScores,
}
