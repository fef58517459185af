use super::{SortDirection, SortField, overall_standings, rank_and_sort};
use crate::dataset::benchmarks::benchmark_rows;
use crate::model::keys::{Dimension, Platform};
use crate::model::scores::{AveragedScores, DimensionScores};

fn avg(platform: Platform, overall: f64, recall: f64) -> AveragedScores {
    AveragedScores {
        platform,
        overall,
        scores: DimensionScores { recall, ..DimensionScores::ZERO },
    }
}

#[test]
fn test_sort_field_parses_overall_and_dimension_keys() {
    assert_eq!(SortField::parse("overall"), Some(SortField::Overall));
    assert_eq!(SortField::parse("recall"), Some(SortField::Dimension(Dimension::Recall)));
    assert_eq!(
        SortField::parse("contact_rate"),
        Some(SortField::Dimension(Dimension::ContactRate)),
    );
    assert_eq!(SortField::parse("bogus"), None);
    assert_eq!(SortField::parse("contact_rate").unwrap().name(), "contact_rate");
    assert_eq!(SortField::Overall.name(), "overall");
}

#[test]
fn test_desc_puts_best_first_and_asc_reverses() {
    let rows = [
        avg(Platform::Exa, 77.0, 80.0),
        avg(Platform::Lessie, 89.0, 90.0),
        avg(Platform::Gemini, 67.0, 66.0),
    ];
    let desc = rank_and_sort(&rows, SortField::Overall, SortDirection::Desc);
    let order: Vec<Platform> = desc.iter().map(|r| r.platform).collect();
    assert_eq!(order, vec![Platform::Lessie, Platform::Exa, Platform::Gemini]);

    let asc = rank_and_sort(&rows, SortField::Overall, SortDirection::Asc);
    let reversed: Vec<Platform> = asc.iter().rev().map(|r| r.platform).collect();
    assert_eq!(reversed, order);
}

#[test]
fn test_ties_keep_incoming_order_in_both_directions() {
    let rows = [
        avg(Platform::Manus, 70.0, 10.0),
        avg(Platform::Dinq, 70.0, 20.0),
        avg(Platform::Gpt, 70.0, 30.0),
    ];
    for direction in [SortDirection::Desc, SortDirection::Asc] {
        let sorted = rank_and_sort(&rows, SortField::Overall, direction);
        let order: Vec<Platform> = sorted.iter().map(|r| r.platform).collect();
        assert_eq!(order, vec![Platform::Manus, Platform::Dinq, Platform::Gpt]);
    }
}

#[test]
fn test_dimension_sort_ignores_overall() {
    let rows = [
        avg(Platform::Lessie, 89.0, 50.0),
        avg(Platform::Exa, 77.0, 95.0),
    ];
    let by_recall = rank_and_sort(&rows, SortField::Dimension(Dimension::Recall), SortDirection::Desc);
    assert_eq!(by_recall[0].platform, Platform::Exa);
    assert_eq!(by_recall[1].platform, Platform::Lessie);
}

#[test]
fn test_standings_over_published_corpus() {
    let standings = overall_standings(benchmark_rows());
    let order: Vec<(Platform, f64)> = standings.iter().map(|r| (r.platform, r.overall)).collect();
    assert_eq!(
        order,
        vec![
            (Platform::Lessie, 89.0),
            (Platform::Exa, 79.0),
            (Platform::Dinq, 74.0),
            (Platform::Manus, 72.0),
            (Platform::Gpt, 71.0),
            (Platform::Gemini, 67.0),
        ],
    );
}
