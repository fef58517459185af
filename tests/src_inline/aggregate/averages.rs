use super::average_scores;
use crate::model::keys::{Dimension, Platform, Scenario};
use crate::model::scores::{DimensionScores, PlatformScenarioResult};

fn row(platform: Platform, scenario: Scenario, value: f64) -> PlatformScenarioResult {
    PlatformScenarioResult {
        platform,
        scenario,
        scores: DimensionScores {
            recall: value,
            precision: value,
            data_coverage: value,
            contact_rate: value,
            richness: value,
            response_time: value,
        },
        overall: value,
        rank: 1,
        result_count: 40,
        avg_response_time_ms: 1200,
    }
}

#[test]
fn test_every_platform_gets_a_row_even_without_data() {
    let out = average_scores(&[], None);
    assert_eq!(out.len(), Platform::all().len());
    for (avg, &platform) in out.iter().zip(Platform::all()) {
        assert_eq!(avg.platform, platform);
        assert_eq!(avg.overall, 0.0);
        assert_eq!(avg.scores.get(Dimension::Recall), 0.0);
        assert_eq!(avg.scores.get(Dimension::ResponseTime), 0.0);
    }
}

#[test]
fn test_scenario_filter_selects_matching_rows() {
    let rows = [
        row(Platform::Lessie, Scenario::Influencer, 88.0),
        row(Platform::Lessie, Scenario::Recruitment, 90.0),
    ];

    let all = average_scores(&rows, None);
    assert_eq!(all[0].overall, 89.0);

    let influencer = average_scores(&rows, Some(Scenario::Influencer));
    assert_eq!(influencer[0].overall, 88.0);
    assert_eq!(influencer[0].scores.recall, 88.0);

    let recruitment = average_scores(&rows, Some(Scenario::Recruitment));
    assert_eq!(recruitment[0].overall, 90.0);
}

#[test]
fn test_platforms_average_independently() {
    let rows = [
        row(Platform::Lessie, Scenario::Influencer, 88.0),
        row(Platform::Exa, Scenario::Influencer, 77.0),
        row(Platform::Lessie, Scenario::Recruitment, 90.0),
    ];
    let out = average_scores(&rows, None);
    assert_eq!(out[0].platform, Platform::Lessie);
    assert_eq!(out[0].overall, 89.0);
    assert_eq!(out[1].platform, Platform::Exa);
    assert_eq!(out[1].overall, 77.0);
    assert_eq!(out[2].overall, 0.0);
}

#[test]
fn test_mean_rounds_half_away_from_zero() {
    let rows = [
        row(Platform::Lessie, Scenario::Influencer, 88.0),
        row(Platform::Lessie, Scenario::Recruitment, 77.0),
    ];
    // mean is 82.5
    let out = average_scores(&rows, None);
    assert_eq!(out[0].overall, 83.0);
    assert_eq!(out[0].scores.get(Dimension::ContactRate), 83.0);
}
