use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::{DataSource, DecodeMode, Fetcher, InputError};
use crate::model::evaluation::EvalPlatform;

const INDEX_DOC: &str = r#"[
  {
    "query_id": "rec-001",
    "prompt": "Find senior ML engineers in Berlin",
    "query_type": "recruiting",
    "platforms": {
      "lessie": { "judge_score": 0.9, "num_persons": 1 }
    }
  },
  {
    "query_id": "det-001",
    "prompt": "Find employees at Mistral AI",
    "query_type": "deterministic"
  }
]"#;

const PERSONS_DOC: &str = r#"{
  "lessie": [
    { "idx": 1, "name": "Mikayla Nogueira", "score": 0.75 }
  ]
}"#;

fn corpus_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("psbench-fetcher-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("persons")).unwrap();
    fs::write(dir.join("query-index.json"), INDEX_DOC).unwrap();
    fs::write(dir.join("persons").join("rec-001.json"), PERSONS_DOC).unwrap();
    dir
}

fn dir_fetcher(dir: PathBuf) -> Fetcher {
    Fetcher::new(DataSource::Dir(dir), DecodeMode::Lenient, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_dir_source_loads_index() {
    let fetcher = dir_fetcher(corpus_dir("index"));
    let records = fetcher.load_index().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].query_id, "rec-001");
}

#[test]
fn test_view_pairs_index_entry_with_detail() {
    let fetcher = dir_fetcher(corpus_dir("view"));
    let view = fetcher.load_view("rec-001").unwrap();
    assert_eq!(view.record.query_type, "recruiting");
    assert!(view.detail.is_some());
    let persons = view.persons(EvalPlatform::Lessie);
    assert_eq!(persons.len(), 1);
    assert_eq!(persons[0].score, 75.0);
}

#[test]
fn test_missing_persons_document_is_not_an_error() {
    let fetcher = dir_fetcher(corpus_dir("nodetail"));
    let view = fetcher.load_view("det-001").unwrap();
    assert!(view.detail.is_none());
    assert!(view.persons(EvalPlatform::Lessie).is_empty());
}

#[test]
fn test_unknown_query_id_is_reported() {
    let fetcher = dir_fetcher(corpus_dir("unknown"));
    let err = fetcher.load_view("nope").unwrap_err();
    assert!(err.to_string().contains("no evaluation data for query id"));
}

#[test]
fn test_missing_index_is_reported() {
    let dir = std::env::temp_dir().join(format!("psbench-fetcher-empty-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let fetcher = dir_fetcher(dir);
    let err = fetcher.load_index().unwrap_err();
    match err {
        InputError::IndexMissing(location) => assert!(location.contains("query-index.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_source_parse_spots_url_bases() {
    let http = DataSource::parse("https://bench.lessie.ai/data/");
    assert_eq!(http, DataSource::Http("https://bench.lessie.ai/data".to_string()));
    assert_eq!(http.describe(), "https://bench.lessie.ai/data");

    let dir = DataSource::parse("./fixtures");
    assert_eq!(dir, DataSource::Dir(PathBuf::from("./fixtures")));
}
