mod aggregate;
mod catalog;
mod dataset;
mod input;
mod model;
mod report;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::aggregate::averages::average_scores;
use crate::aggregate::pivot::{
    eval_dimension_rows, eval_kind_rows, pivot_for_chart, pivot_for_radar,
};
use crate::aggregate::ranking::{SortDirection, SortField, overall_standings, rank_and_sort};
use crate::aggregate::rates::{
    best_platform, case_rate_series, case_rates, eval_rankings, filter_queries, query_stats,
};
use crate::dataset::benchmarks::benchmark_rows;
use crate::dataset::cases::{case_by_id, case_studies};
use crate::dataset::consensus::consensus_for_case;
use crate::dataset::coverage::coverage_rows;
use crate::dataset::evaluation::{eval_case_studies, evaluations};
use crate::input::{DataSource, DecodeMode, Fetcher};
use crate::model::evaluation::QueryKind;
use crate::model::keys::{Dimension, Platform, Scenario};
use crate::report::{
    BestRun, CaseDetailView, CaseRates, CasesView, ChartView, CoverageView, LeaderboardView,
    QueriesView, QueryListing, RadarView, ResultsView, SingleQueryView, StandingsView, text,
};

/// Aggregated people-search benchmark results from the command line.
///
/// Examples:
///   psbench leaderboard --scenario recruitment --sort recall
///   psbench chart --radar lessie,exa --format json
///   psbench queries --data ./testdata --query-type recruiting
///   psbench query recruiting_0006 --data https://bench.example.com/data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT", global = true)]
    format: Format,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE", global = true)]
    out: Option<PathBuf>,

    /// Reject fetched documents carrying unknown platform keys
    #[arg(long, global = true)]
    strict: bool,

    /// HTTP timeout for remote data sources, in seconds
    #[arg(long, default_value = "10", value_name = "SECS", global = true)]
    timeout_secs: u64,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "info", value_name = "FILTER", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ranked per-platform averages across all scoring dimensions
    Leaderboard {
        /// Restrict the averages to one scenario
        #[arg(long, default_value = "all", value_name = "SCENARIO")]
        scenario: ScenarioArg,

        /// Column to sort by: overall or a dimension key
        #[arg(long, default_value = "overall", value_name = "FIELD")]
        sort: String,

        /// Sort direction (asc, desc)
        #[arg(long, default_value = "desc", value_name = "DIR")]
        direction: DirectionArg,
    },
    /// Per-dimension chart data, or a radar pivot with --radar
    Chart {
        /// Restrict the averages to one scenario
        #[arg(long, default_value = "all", value_name = "SCENARIO")]
        scenario: ScenarioArg,

        /// Dimension keys to include (comma-separated)
        #[arg(long, value_name = "DIMS", value_delimiter = ',')]
        dimensions: Option<Vec<String>>,

        /// Compare up to three platforms on a radar pivot (comma-separated)
        #[arg(
            long,
            value_name = "PLATFORMS",
            value_delimiter = ',',
            conflicts_with = "dimensions"
        )]
        radar: Option<Vec<String>>,
    },
    /// Overall standings across every scenario
    Standings,
    /// Curated case studies with per-platform match rates
    Cases {
        /// Restrict the list to one scenario
        #[arg(long, default_value = "all", value_name = "SCENARIO")]
        scenario: ScenarioArg,
    },
    /// One case study in full: sample results, rate series, judge consensus
    Case {
        /// Case id, e.g. inf-001
        id: String,
    },
    /// Source coverage matrix across social networks
    Coverage,
    /// Evaluation-run results: composite rankings, dimensions, case studies
    Results {
        /// Restrict per-type tables and case studies to one query type
        #[arg(long, value_name = "TYPE")]
        query_type: Option<KindArg>,
    },
    /// List queries from a fetched evaluation corpus
    Queries {
        /// Data directory or http(s) base URL
        #[arg(long, value_name = "DIR|URL")]
        data: String,

        /// Keep only queries with this type string
        #[arg(long, value_name = "TYPE")]
        query_type: Option<String>,

        /// Keep only queries whose prompt or id contains this text
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
    },
    /// One query with per-platform runs and person-level detail
    Query {
        /// Query id, e.g. recruiting_0006
        id: String,

        /// Data directory or http(s) base URL
        #[arg(long, value_name = "DIR|URL")]
        data: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScenarioArg {
    All,
    Influencer,
    Recruitment,
    #[value(name = "lead_gen")]
    LeadGen,
}

impl ScenarioArg {
    fn to_filter(self) -> Option<Scenario> {
        match self {
            ScenarioArg::All => None,
            ScenarioArg::Influencer => Some(Scenario::Influencer),
            ScenarioArg::Recruitment => Some(Scenario::Recruitment),
            ScenarioArg::LeadGen => Some(Scenario::LeadGen),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    Asc,
    Desc,
}

impl DirectionArg {
    fn to_direction(self) -> SortDirection {
        match self {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }

    fn name(self) -> &'static str {
        match self {
            DirectionArg::Asc => "asc",
            DirectionArg::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    #[value(name = "b2b_prospecting")]
    B2bProspecting,
    Recruiting,
    #[value(name = "influencer_search")]
    InfluencerSearch,
    Deterministic,
}

impl KindArg {
    fn to_kind(self) -> QueryKind {
        match self {
            KindArg::B2bProspecting => QueryKind::B2bProspecting,
            KindArg::Recruiting => QueryKind::Recruiting,
            KindArg::InfluencerSearch => QueryKind::InfluencerSearch,
            KindArg::Deterministic => QueryKind::Deterministic,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    let output = build_report(&cli)?;
    emit(cli.out.as_deref(), output)
}

fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn build_report(cli: &Cli) -> Result<String, String> {
    match &cli.command {
        Command::Leaderboard {
            scenario,
            sort,
            direction,
        } => {
            let field = SortField::parse(sort).ok_or_else(|| {
                format!("unknown sort field {sort:?} (use overall or a dimension key)")
            })?;
            let scenario = scenario.to_filter();
            let rows = rank_and_sort(
                &average_scores(benchmark_rows(), scenario),
                field,
                direction.to_direction(),
            );
            let view = LeaderboardView {
                scenario,
                sort: field.name(),
                direction: direction.name(),
                rows,
            };
            render(cli.format, &view, text::render_leaderboard)
        }
        Command::Chart {
            scenario,
            dimensions,
            radar,
        } => {
            let scenario = scenario.to_filter();
            if let Some(radar) = radar {
                let platforms = parse_platforms(radar)?;
                let view = RadarView {
                    scenario,
                    rows: pivot_for_radar(benchmark_rows(), scenario, &platforms),
                };
                return render(cli.format, &view, text::render_radar);
            }
            let dims = match dimensions {
                Some(keys) => parse_dimensions(keys)?,
                None => Dimension::display().to_vec(),
            };
            let view = ChartView {
                scenario,
                rows: pivot_for_chart(benchmark_rows(), scenario, &dims),
            };
            render(cli.format, &view, text::render_chart)
        }
        Command::Standings => {
            let view = StandingsView {
                rows: overall_standings(benchmark_rows()),
            };
            render(cli.format, &view, text::render_standings)
        }
        Command::Cases { scenario } => {
            let scenario = scenario.to_filter();
            let cases = case_studies()
                .iter()
                .filter(|c| scenario.is_none_or(|s| c.scenario == s))
                .map(|c| CaseRates {
                    case: *c,
                    rates: case_rates(c),
                })
                .collect();
            let view = CasesView { scenario, cases };
            render(cli.format, &view, text::render_cases)
        }
        Command::Case { id } => {
            let case = case_by_id(id).ok_or_else(|| format!("no case study with id {id:?}"))?;
            let view = CaseDetailView {
                case: *case,
                series: case_rate_series(case),
                consensus: consensus_for_case(case.id),
            };
            render(cli.format, &view, text::render_case_detail)
        }
        Command::Coverage => {
            let view = CoverageView {
                rows: coverage_rows().to_vec(),
            };
            render(cli.format, &view, text::render_coverage)
        }
        Command::Results { query_type } => {
            let kind = query_type.map(KindArg::to_kind);
            let evals = evaluations();
            let mut query_types = eval_kind_rows(&evals);
            let mut cases = eval_case_studies();
            if let Some(kind) = kind {
                query_types.retain(|row| row.kind == kind);
                cases.retain(|case| case.kind == kind);
            }
            let view = ResultsView {
                query_type: kind,
                rankings: eval_rankings(&evals),
                dimensions: eval_dimension_rows(&evals),
                query_types,
                evaluations: evals,
                cases,
            };
            render(cli.format, &view, text::render_results)
        }
        Command::Queries {
            data,
            query_type,
            search,
        } => {
            let (fetcher, source) = fetcher_for(cli, data)?;
            let records = fetcher.load_index().map_err(|e| e.to_string())?;
            let stats = query_stats(&records);
            let queries = filter_queries(&records, query_type.as_deref(), search.as_deref())
                .into_iter()
                .map(|r| QueryListing {
                    query_id: r.query_id.clone(),
                    query_type: r.query_type.clone(),
                    prompt: r.prompt.clone(),
                    platform_count: r.platforms.len(),
                    best: best_platform(r).map(|(platform, judge_score)| BestRun {
                        platform,
                        judge_score,
                    }),
                })
                .collect();
            let view = QueriesView {
                source,
                stats,
                query_type: query_type.clone(),
                search: search.clone(),
                queries,
            };
            render(cli.format, &view, text::render_queries)
        }
        Command::Query { id, data } => {
            let (fetcher, source) = fetcher_for(cli, data)?;
            let query = fetcher.load_view(id).map_err(|e| e.to_string())?;
            let best = best_platform(&query.record).map(|(platform, judge_score)| BestRun {
                platform,
                judge_score,
            });
            let view = SingleQueryView {
                source,
                query,
                best,
            };
            render(cli.format, &view, text::render_query)
        }
    }
}

fn render<T: Serialize>(
    format: Format,
    view: &T,
    text_fn: impl Fn(&T) -> String,
) -> Result<String, String> {
    match format {
        Format::Text => Ok(text_fn(view)),
        Format::Json => report::json::render(view).map_err(|e| e.to_string()),
    }
}

fn parse_platforms(keys: &[String]) -> Result<Vec<Platform>, String> {
    if keys.is_empty() || keys.len() > 3 {
        return Err("radar compares between one and three platforms".to_string());
    }
    keys.iter()
        .map(|key| Platform::parse(key).ok_or_else(|| format!("unknown platform key {key:?}")))
        .collect()
}

fn parse_dimensions(keys: &[String]) -> Result<Vec<Dimension>, String> {
    keys.iter()
        .map(|key| Dimension::parse(key).ok_or_else(|| format!("unknown dimension key {key:?}")))
        .collect()
}

fn fetcher_for(cli: &Cli, data: &str) -> Result<(Fetcher, String), String> {
    let source = DataSource::parse(data);
    let label = source.describe();
    let mode = if cli.strict {
        DecodeMode::Strict
    } else {
        DecodeMode::Lenient
    };
    let fetcher = Fetcher::new(source, mode, Duration::from_secs(cli.timeout_secs))
        .map_err(|e| e.to_string())?;
    Ok((fetcher, label))
}

fn emit(out: Option<&std::path::Path>, mut output: String) -> Result<(), String> {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    match out {
        Some(path) => {
            fs::write(path, output).map_err(|e| format!("write {}: {e}", path.display()))?;
            info!("report written to {}", path.display());
            Ok(())
        }
        None => {
            print!("{output}");
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
