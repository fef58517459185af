use clap::Parser;

use super::{Cli, Command, Format, ScenarioArg, build_report};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_global_defaults() {
    let cli = parse(&["psbench", "standings"]);
    assert!(matches!(cli.command, Command::Standings));
    assert_eq!(cli.format, Format::Text);
    assert!(cli.out.is_none());
    assert!(!cli.strict);
    assert_eq!(cli.timeout_secs, 10);
    assert_eq!(cli.log_level, "info");
}

#[test]
fn test_global_flags_parse_after_the_subcommand() {
    let cli = parse(&["psbench", "standings", "--format", "json", "--strict"]);
    assert_eq!(cli.format, Format::Json);
    assert!(cli.strict);
}

#[test]
fn test_scenario_values_use_data_keys() {
    let cli = parse(&["psbench", "cases", "--scenario", "lead_gen"]);
    match cli.command {
        Command::Cases { scenario } => assert_eq!(scenario, ScenarioArg::LeadGen),
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(Cli::try_parse_from(["psbench", "cases", "--scenario", "bogus"]).is_err());
}

#[test]
fn test_leaderboard_rejects_unknown_sort_field() {
    let cli = parse(&["psbench", "leaderboard", "--sort", "bogus"]);
    let err = build_report(&cli).unwrap_err();
    assert!(err.contains("unknown sort field"));
}

#[test]
fn test_chart_rejects_unknown_dimension_key() {
    let cli = parse(&["psbench", "chart", "--dimensions", "bogus"]);
    let err = build_report(&cli).unwrap_err();
    assert!(err.contains("unknown dimension key"));
}

#[test]
fn test_radar_platform_count_is_bounded() {
    let cli = parse(&["psbench", "chart", "--radar", "lessie,exa,dinq,manus"]);
    let err = build_report(&cli).unwrap_err();
    assert!(err.contains("between one and three"));
}

#[test]
fn test_conflicting_chart_selectors_are_rejected() {
    let parsed =
        Cli::try_parse_from(["psbench", "chart", "--dimensions", "recall", "--radar", "lessie"]);
    assert!(parsed.is_err());
}

#[test]
fn test_json_format_serializes_the_view() {
    let cli = parse(&["psbench", "leaderboard", "--format", "json"]);
    let out = build_report(&cli).unwrap();
    assert!(out.starts_with('{'));
    assert!(out.contains("\"rows\""));
    assert!(out.contains("\"sort\": \"overall\""));
}
