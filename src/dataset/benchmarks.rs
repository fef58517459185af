use crate::model::keys::{Platform, Scenario};
use crate::model::scores::{DimensionScores, PlatformScenarioResult};

const fn row(
    platform: Platform,
    scenario: Scenario,
    scores: [f64; 6],
    overall: f64,
    rank: u32,
    result_count: u32,
    avg_response_time_ms: u32,
) -> PlatformScenarioResult {
    PlatformScenarioResult {
        platform,
        scenario,
        scores: DimensionScores {
            recall: scores[0],
            precision: scores[1],
            data_coverage: scores[2],
            contact_rate: scores[3],
            richness: scores[4],
            response_time: scores[5],
        },
        overall,
        rank,
        result_count,
        avg_response_time_ms,
    }
}

// Score columns: recall, precision, data_coverage, contact_rate, richness,
// response_time. Overall is the published blended score for the row.
const BENCHMARK_ROWS: &[PlatformScenarioResult] = &[
    // Influencer discovery
    row(Platform::Lessie, Scenario::Influencer, [90.0, 88.0, 92.0, 85.0, 89.0, 78.0], 88.0, 1, 48, 3200),
    row(Platform::Exa, Scenario::Influencer, [78.0, 80.0, 75.0, 68.0, 74.0, 82.0], 77.0, 2, 35, 2800),
    row(Platform::Dinq, Scenario::Influencer, [72.0, 74.0, 70.0, 65.0, 71.0, 75.0], 72.0, 4, 30, 4100),
    row(Platform::Manus, Scenario::Influencer, [75.0, 76.0, 68.0, 62.0, 73.0, 70.0], 73.0, 3, 32, 5500),
    row(Platform::Gpt, Scenario::Influencer, [70.0, 72.0, 60.0, 55.0, 68.0, 92.0], 69.0, 5, 25, 1200),
    row(Platform::Gemini, Scenario::Influencer, [66.0, 68.0, 58.0, 52.0, 65.0, 88.0], 66.0, 6, 22, 1800),
    // Recruitment
    row(Platform::Lessie, Scenario::Recruitment, [92.0, 86.0, 90.0, 88.0, 91.0, 75.0], 89.0, 1, 52, 3500),
    row(Platform::Exa, Scenario::Recruitment, [80.0, 82.0, 78.0, 72.0, 76.0, 80.0], 79.0, 2, 40, 2600),
    row(Platform::Dinq, Scenario::Recruitment, [76.0, 78.0, 73.0, 70.0, 72.0, 72.0], 74.0, 3, 36, 4300),
    row(Platform::Manus, Scenario::Recruitment, [74.0, 75.0, 65.0, 60.0, 70.0, 68.0], 70.0, 5, 28, 5800),
    row(Platform::Gpt, Scenario::Recruitment, [72.0, 74.0, 62.0, 58.0, 66.0, 94.0], 72.0, 4, 26, 1100),
    row(Platform::Gemini, Scenario::Recruitment, [68.0, 70.0, 60.0, 54.0, 64.0, 90.0], 68.0, 6, 24, 1600),
    // Lead generation
    row(Platform::Lessie, Scenario::LeadGen, [88.0, 90.0, 94.0, 92.0, 87.0, 80.0], 90.0, 1, 55, 3000),
    row(Platform::Exa, Scenario::LeadGen, [82.0, 84.0, 80.0, 74.0, 78.0, 84.0], 81.0, 2, 42, 2400),
    row(Platform::Dinq, Scenario::LeadGen, [78.0, 76.0, 74.0, 72.0, 75.0, 74.0], 76.0, 3, 38, 3900),
    row(Platform::Manus, Scenario::LeadGen, [76.0, 78.0, 70.0, 66.0, 74.0, 72.0], 74.0, 4, 34, 5200),
    row(Platform::Gpt, Scenario::LeadGen, [70.0, 73.0, 64.0, 60.0, 68.0, 95.0], 72.0, 5, 28, 1000),
    row(Platform::Gemini, Scenario::LeadGen, [65.0, 70.0, 60.0, 56.0, 64.0, 90.0], 68.0, 6, 25, 1500),
];

pub fn benchmark_rows() -> &'static [PlatformScenarioResult] {
    BENCHMARK_ROWS
}

pub fn row_for(platform: Platform, scenario: Scenario) -> Option<&'static PlatformScenarioResult> {
    BENCHMARK_ROWS
        .iter()
        .find(|r| r.platform == platform && r.scenario == scenario)
}
