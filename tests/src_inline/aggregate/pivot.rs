use super::{eval_dimension_rows, eval_kind_rows, pivot_for_chart, pivot_for_radar, round1};
use crate::aggregate::averages::average_scores;
use crate::dataset::benchmarks::benchmark_rows;
use crate::dataset::evaluation::evaluations;
use crate::model::evaluation::{EvalDimension, EvalPlatform, QueryKind};
use crate::model::keys::{Dimension, Platform, Scenario};

#[test]
fn test_round1_rounds_half_away_from_zero() {
    assert_eq!(round1(86.79), 86.8);
    assert_eq!(round1(2.25), 2.3);
    assert_eq!(round1(77.903), 77.9);
    assert_eq!(round1(0.0), 0.0);
}

#[test]
fn test_chart_values_match_leaderboard_averages() {
    let dims = Dimension::all();
    let chart = pivot_for_chart(benchmark_rows(), Some(Scenario::Influencer), dims);
    let averaged = average_scores(benchmark_rows(), Some(Scenario::Influencer));
    assert_eq!(chart.len(), averaged.len());
    for (row, avg) in chart.iter().zip(&averaged) {
        assert_eq!(row.platform, avg.platform);
        for (cell, &dim) in row.values.iter().zip(dims) {
            assert_eq!(cell.dimension, dim);
            assert_eq!(cell.value.to_bits(), avg.scores.get(dim).to_bits());
        }
    }
    assert_eq!(chart[0].label, "Lessie");
}

#[test]
fn test_radar_keeps_requested_platform_order() {
    let platforms = [Platform::Exa, Platform::Lessie];
    let radar = pivot_for_radar(benchmark_rows(), None, &platforms);
    let averaged = average_scores(benchmark_rows(), None);
    assert_eq!(radar.len(), Dimension::display().len());
    for (row, &dim) in radar.iter().zip(Dimension::display()) {
        assert_eq!(row.dimension, dim);
        assert_eq!(row.values[0].platform, Platform::Exa);
        assert_eq!(row.values[1].platform, Platform::Lessie);
        for cell in &row.values {
            let avg = averaged.iter().find(|a| a.platform == cell.platform).unwrap();
            assert_eq!(cell.value.to_bits(), avg.scores.get(dim).to_bits());
        }
    }
    assert_eq!(radar[0].label, "Recall");
}

#[test]
fn test_eval_dimension_rows_round_to_one_decimal() {
    let rows = eval_dimension_rows(&evaluations());
    assert_eq!(rows.len(), EvalDimension::all().len());
    assert_eq!(rows[0].dimension, EvalDimension::Relevance);
    let platforms: Vec<EvalPlatform> = rows[0].cells.iter().map(|c| c.platform).collect();
    assert_eq!(platforms, vec![EvalPlatform::Lessie, EvalPlatform::Exa, EvalPlatform::Juicebox]);
    let relevance: Vec<f64> = rows[0].cells.iter().map(|c| c.value).collect();
    assert_eq!(relevance, vec![86.8, 55.9, 51.5]);
    assert_eq!(rows[1].dimension, EvalDimension::Accuracy);
    let accuracy: Vec<f64> = rows[1].cells.iter().map(|c| c.value).collect();
    assert_eq!(accuracy, vec![94.3, 94.7, 97.2]);
}

#[test]
fn test_eval_kind_rows_follow_kind_order() {
    let rows = eval_kind_rows(&evaluations());
    let kinds: Vec<QueryKind> = rows.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, QueryKind::all().to_vec());
    let lessie: Vec<f64> = rows.iter().map(|r| r.cells[0].value).collect();
    assert_eq!(lessie, vec![82.3, 84.3, 89.1, 77.9]);
}
