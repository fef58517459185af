use std::collections::BTreeMap;

use crate::aggregate::rates::{
    COVERAGE_WEIGHT, JUDGE_WEIGHT, RICHNESS_WEIGHT, match_rate_from_counts,
};
use crate::catalog;
use crate::catalog::defs::SourceNetwork;
use crate::model::keys::{Dimension, Platform, Scenario};
use crate::model::query::PersonDimension;
use crate::report::{
    CaseDetailView, CasesView, ChartView, CoverageView, LeaderboardView, QueriesView, RadarView,
    ResultsView, SingleQueryView, StandingsView, points0, points1, points2, truncate, yes_no,
};

pub fn render_leaderboard(view: &LeaderboardView) -> String {
    let mut out = String::new();
    push_heading(&mut out, "Platform Leaderboard");
    out.push_str(&scenario_line(view.scenario));
    out.push_str(&format!("Sort: {} ({})\n\n", view.sort, view.direction));
    out.push_str(&format!("{:>4}  {:<8}  {:>7}", "Rank", "Platform", "Overall"));
    for &dim in Dimension::all() {
        out.push_str(&format!("  {}", catalog::dimension(dim).label));
    }
    out.push('\n');
    for (i, row) in view.rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<8}  {:>7}",
            i + 1,
            catalog::platform(row.platform).label,
            points0(row.overall)
        ));
        for &dim in Dimension::all() {
            let width = catalog::dimension(dim).label.len();
            out.push_str(&format!("  {:>width$}", points0(row.scores.get(dim))));
        }
        out.push('\n');
    }
    out
}

pub fn render_chart(view: &ChartView) -> String {
    let mut out = String::new();
    push_heading(&mut out, "Dimension Chart");
    out.push_str(&scenario_line(view.scenario));
    out.push('\n');
    out.push_str(&format!("{:<8}", "Platform"));
    if let Some(first) = view.rows.first() {
        for value in &first.values {
            out.push_str(&format!("  {}", catalog::dimension(value.dimension).label));
        }
    }
    out.push('\n');
    for row in &view.rows {
        out.push_str(&format!("{:<8}", row.label));
        for value in &row.values {
            let width = catalog::dimension(value.dimension).label.len();
            out.push_str(&format!("  {:>width$}", points0(value.value)));
        }
        out.push('\n');
    }
    out
}

pub fn render_radar(view: &RadarView) -> String {
    let mut out = String::new();
    push_heading(&mut out, "Dimension Radar");
    out.push_str(&scenario_line(view.scenario));
    out.push('\n');
    out.push_str(&format!("{:<13}", "Dimension"));
    if let Some(first) = view.rows.first() {
        for value in &first.values {
            out.push_str(&format!("  {:>6}", catalog::platform(value.platform).label));
        }
    }
    out.push('\n');
    for row in &view.rows {
        out.push_str(&format!("{:<13}", row.label));
        for value in &row.values {
            out.push_str(&format!("  {:>6}", points0(value.value)));
        }
        out.push('\n');
    }
    out
}

pub fn render_standings(view: &StandingsView) -> String {
    let mut out = String::new();
    push_heading(&mut out, "Overall Standings");
    out.push_str(&format!("{:>4}  {:<8}  {:>7}\n", "Rank", "Platform", "Overall"));
    for (i, row) in view.rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<8}  {:>7}\n",
            i + 1,
            catalog::platform(row.platform).label,
            points0(row.overall)
        ));
    }
    out
}

pub fn render_cases(view: &CasesView) -> String {
    let mut out = String::new();
    push_heading(&mut out, "Case Studies");
    out.push_str(&scenario_line(view.scenario));
    for entry in &view.cases {
        let case = &entry.case;
        out.push('\n');
        out.push_str(&format!(
            "{}  [{}]\n",
            case.id,
            catalog::scenario(case.scenario).label
        ));
        out.push_str(&format!("  {}\n", case.query));
        out.push_str(&format!(
            "  ground truth: {} profiles\n",
            case.ground_truth_count
        ));
        for rate in &entry.rates {
            out.push_str(&format!(
                "    {:<8}  {:>3}/{:<3} matched  {:>3}%  {:>3} returned\n",
                catalog::platform(rate.platform).label,
                rate.matched_count,
                case.ground_truth_count,
                rate.rate,
                rate.total_returned
            ));
        }
    }
    out
}

pub fn render_case_detail(view: &CaseDetailView) -> String {
    let case = &view.case;
    let mut out = String::new();
    push_heading(&mut out, &format!("Case {}", case.id));
    out.push_str(&format!(
        "Scenario: {}\n",
        catalog::scenario(case.scenario).label
    ));
    out.push_str(&format!("Query: {}\n", case.query));
    out.push_str(&format!(
        "Ground truth: {} profiles\n",
        case.ground_truth_count
    ));
    for result in case.platform_results {
        let rate = match_rate_from_counts(result.matched_count, case.ground_truth_count);
        out.push_str(&format!(
            "\n{}: {}/{} matched ({}%), {} returned\n",
            catalog::platform(result.platform).label,
            result.matched_count,
            case.ground_truth_count,
            rate,
            result.total_returned
        ));
        for person in result.sample_results {
            out.push_str(&format!(
                "  - {}, {} [{}]\n",
                person.name, person.title, person.platform_source
            ));
            out.push_str(&format!(
                "    relevance {}  email {}  phone {}  matched {}  {}\n",
                person.relevance_score,
                yes_no(person.has_email),
                yes_no(person.has_phone),
                yes_no(person.matched_ground_truth),
                person.profile_url
            ));
        }
    }

    push_section(&mut out, "Match-rate series (best first)");
    for rate in &view.series {
        out.push_str(&format!(
            "  {:<8}  {:>3}%\n",
            catalog::platform(rate.platform).label,
            rate.rate
        ));
    }

    if !view.consensus.is_empty() {
        push_section(&mut out, "Judge consensus (gpt / claude / gemini -> final)");
        let mut last: Option<Platform> = None;
        for row in &view.consensus {
            if last != Some(row.platform) {
                out.push_str(&format!("  {}\n", catalog::platform(row.platform).label));
                last = Some(row.platform);
            }
            out.push_str(&format!(
                "    {:<13}  {:>3} / {:>3} / {:>3}  ->  {:>3}\n",
                catalog::dimension(row.dimension).label,
                points0(row.scores.gpt_score),
                points0(row.scores.claude_score),
                points0(row.scores.gemini_score),
                points0(row.scores.final_score)
            ));
        }
    }
    out
}

pub fn render_coverage(view: &CoverageView) -> String {
    let mut out = String::new();
    push_heading(&mut out, "Source Coverage");
    out.push_str("Share of returned profiles with a resolvable account per network, in percent.\n\n");
    out.push_str(&format!("{:<8}", "Platform"));
    for &network in SourceNetwork::all() {
        out.push_str(&format!("  {}", network.label()));
    }
    out.push('\n');
    for row in &view.rows {
        out.push_str(&format!("{:<8}", catalog::platform(row.platform).label));
        for &network in SourceNetwork::all() {
            let width = network.label().len();
            out.push_str(&format!("  {:>width$}", row.get(network)));
        }
        out.push('\n');
    }
    out
}

pub fn render_results(view: &ResultsView) -> String {
    let mut out = String::new();
    push_heading(&mut out, "People-Search Evaluation");
    if let Some(first) = view.evaluations.first() {
        out.push_str(&format!("Judge model: {}\n", first.judge_model));
    }
    out.push_str(&format!(
        "Composite = {:.0}% judge + {:.0}% richness + {:.0}% coverage\n",
        JUDGE_WEIGHT * 100.0,
        RICHNESS_WEIGHT * 100.0,
        COVERAGE_WEIGHT * 100.0
    ));
    if let Some(kind) = view.query_type {
        out.push_str(&format!(
            "Query type: {}\n",
            catalog::query_kind(kind).label
        ));
    }

    push_section(&mut out, "Rankings");
    out.push_str(&format!(
        "{:>4}  {:<12}  {:>9}  {:>6}  {:>8}  {:>8}\n",
        "Rank", "Platform", "Composite", "Judge", "Richness", "Coverage"
    ));
    for (i, r) in view.rankings.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<12}  {:>9}  {:>6}  {:>8}  {:>8}\n",
            i + 1,
            catalog::eval_platform(r.platform).label,
            points2(r.composite),
            points2(r.judge_score),
            points2(r.richness),
            points2(r.coverage)
        ));
    }

    push_section(&mut out, "Run Volume");
    out.push_str(&format!(
        "{:<12}  {:>8}  {:>7}  {:>6}  {:>10}  {:>8}\n",
        "Platform", "Queries", "Persons", "Top-K", "Total time", "s/person"
    ));
    for e in &view.evaluations {
        out.push_str(&format!(
            "{:<12}  {:>8}  {:>7}  {:>6}  {:>10}  {:>8}\n",
            catalog::eval_platform(e.platform).label,
            format!("{}/{}", e.total_queries, e.total_queries_original),
            e.total_persons,
            e.top_k_persons,
            e.timing.total_time,
            points2(e.timing.avg_seconds_per_person)
        ));
    }

    push_section(&mut out, "Dimension Averages");
    if let Some(first) = view.dimensions.first() {
        out.push_str(&format!("{:<13}", "Dimension"));
        for cell in &first.cells {
            out.push_str(&format!(
                "  {:>8}",
                catalog::eval_platform(cell.platform).label
            ));
        }
        out.push('\n');
        for row in &view.dimensions {
            out.push_str(&format!("{:<13}", row.label));
            for cell in &row.cells {
                out.push_str(&format!("  {:>8}", points1(cell.value)));
            }
            out.push('\n');
        }
    }

    push_section(&mut out, "Composite by Query Type");
    if let Some(first) = view.query_types.first() {
        out.push_str(&format!("{:<17}", "Query type"));
        for cell in &first.cells {
            out.push_str(&format!(
                "  {:>8}",
                catalog::eval_platform(cell.platform).label
            ));
        }
        out.push('\n');
        for row in &view.query_types {
            out.push_str(&format!("{:<17}", row.label));
            for cell in &row.cells {
                out.push_str(&format!("  {:>8}", points1(cell.value)));
            }
            out.push('\n');
        }
    }

    if !view.cases.is_empty() {
        push_section(&mut out, "Case Studies");
        for case in &view.cases {
            out.push('\n');
            out.push_str(&format!(
                "{}  [{}]\n",
                case.query_id,
                catalog::query_kind(case.kind).label
            ));
            out.push_str(&format!("  {}\n", case.prompt));
            for p in &case.platforms {
                let label = catalog::eval_platform(p.platform).label;
                if p.num_persons == 0 {
                    out.push_str(&format!("    {label:<12}  no results returned\n"));
                    continue;
                }
                out.push_str(&format!(
                    "    {:<12}  judge {}  persons {}  relevance {}  accuracy {}  uniqueness {}  richness {}\n",
                    label,
                    points2(p.judge_score),
                    p.num_persons,
                    points2(p.relevance),
                    points2(p.accuracy),
                    points2(p.uniqueness),
                    points2(p.richness)
                ));
                for ex in &p.good_examples {
                    out.push_str(&format!(
                        "      + {} ({}): {}\n",
                        ex.name,
                        points0(ex.score),
                        ex.verification
                    ));
                }
                for ex in &p.bad_examples {
                    out.push_str(&format!(
                        "      - {} ({}): {}\n",
                        ex.name,
                        points0(ex.score),
                        ex.verification
                    ));
                }
            }
        }
    }
    out
}

pub fn render_queries(view: &QueriesView) -> String {
    let mut out = String::new();
    push_heading(&mut out, "Query Corpus");
    out.push_str(&format!("Source: {}\n", view.source));
    out.push_str(&format!(
        "Queries: {}  Person evaluations: {}\n",
        view.stats.total_queries, view.stats.total_persons
    ));
    if !view.stats.type_counts.is_empty() {
        out.push('\n');
        for tc in &view.stats.type_counts {
            out.push_str(&format!(
                "  {:<18}  {:>4}\n",
                catalog::query_type_label(&tc.query_type),
                tc.count
            ));
        }
    }
    if view.query_type.is_some() || view.search.is_some() {
        out.push_str("\nFilters:");
        if let Some(t) = &view.query_type {
            out.push_str(&format!(" type={t}"));
        }
        if let Some(s) = &view.search {
            out.push_str(&format!(" search={s:?}"));
        }
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!(
        "{:<18}  {:<18}  {:>4}  {:<20}  Prompt\n",
        "ID", "Type", "Runs", "Best"
    ));
    for q in &view.queries {
        let best = match &q.best {
            Some(b) => format!(
                "{} {}",
                catalog::eval_platform(b.platform).label,
                points2(b.judge_score)
            ),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "{:<18}  {:<18}  {:>4}  {:<20}  {}\n",
            q.query_id,
            catalog::query_type_label(&q.query_type),
            q.platform_count,
            best,
            truncate(&q.prompt, 56)
        ));
    }
    out.push('\n');
    out.push_str(&format!("{} queries shown\n", view.queries.len()));
    out
}

pub fn render_query(view: &SingleQueryView) -> String {
    let record = &view.query.record;
    let mut out = String::new();
    push_heading(&mut out, &format!("Query {}", record.query_id));
    out.push_str(&format!("Source: {}\n", view.source));
    out.push_str(&format!(
        "Type: {}  Language: {}\n",
        catalog::query_type_label(&record.query_type),
        record.language
    ));
    out.push_str(&format!("Prompt: {}\n", record.prompt));
    if let Some(best) = &view.best {
        out.push_str(&format!(
            "Best run: {} {}\n",
            catalog::eval_platform(best.platform).label,
            points2(best.judge_score)
        ));
    }

    push_section(&mut out, "Platform Runs");
    for (&platform, run) in &record.platforms {
        let label = catalog::eval_platform(platform).label;
        if run.num_persons == 0 {
            out.push_str(&format!("{label:<12}  no results returned\n"));
            continue;
        }
        out.push_str(&format!(
            "{:<12}  judge {}  persons {}  richness {}\n",
            label,
            points2(run.judge_score),
            run.num_persons,
            points2(run.richness)
        ));
        if !run.dimensions.is_empty() {
            out.push_str(&format!("{:<12}  {}\n", "", dimension_list(&run.dimensions)));
        }
    }

    if view.query.detail.is_some() {
        for &platform in record.platforms.keys() {
            let persons = view.query.persons(platform);
            if persons.is_empty() {
                continue;
            }
            push_section(
                &mut out,
                &format!(
                    "Persons: {} ({} scored)",
                    catalog::eval_platform(platform).label,
                    persons.len()
                ),
            );
            for person in persons {
                out.push_str(&format!(
                    "{:>4}. {}  {}\n",
                    person.idx,
                    person.name,
                    points2(person.score)
                ));
                if !person.linkedin.is_empty() {
                    out.push_str(&format!("      {}\n", person.linkedin));
                }
                if !person.verification.is_empty() {
                    out.push_str(&format!("      {}\n", person.verification));
                }
                if !person.dimensions.is_empty() {
                    out.push_str(&format!(
                        "      {}\n",
                        person_dimension_list(&person.dimensions)
                    ));
                }
            }
        }
    } else {
        out.push_str("\nNo person-level detail for this query.\n");
    }
    out
}

fn push_heading(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push_str("\n\n");
}

fn push_section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}

fn scenario_line(scenario: Option<Scenario>) -> String {
    match scenario {
        Some(s) => format!("Scenario: {}\n", catalog::scenario(s).label),
        None => "Scenario: all scenarios\n".to_string(),
    }
}

fn dimension_list(dims: &BTreeMap<String, f64>) -> String {
    dims.iter()
        .map(|(k, v)| format!("{k} {}", points2(*v)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn person_dimension_list(dims: &BTreeMap<String, PersonDimension>) -> String {
    dims.iter()
        .map(|(k, d)| format!("{k} {}", points1(d.score)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
