use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::input::{DecodeMode, InputError, to_points};
use crate::model::evaluation::EvalPlatform;
use crate::model::query::{PlatformRun, QueryRecord};

#[derive(Debug, Deserialize)]
struct WireQuery {
    query_id: String,
    prompt: String,
    query_type: String,
    #[serde(default)]
    language: String,
    #[serde(default)]
    platforms: BTreeMap<String, WireRun>,
}

#[derive(Debug, Deserialize)]
struct WireRun {
    judge_score: f64,
    num_persons: u32,
    #[serde(default)]
    dimensions: BTreeMap<String, f64>,
    #[serde(default)]
    richness: f64,
}

/// Decodes the query index document. Unknown platform keys are skipped with
/// a warning in lenient mode and rejected in strict mode. All unit-interval
/// scores convert to points here.
pub fn decode_index(text: &str, mode: DecodeMode) -> Result<Vec<QueryRecord>, InputError> {
    let wire: Vec<WireQuery> = serde_json::from_str(text).map_err(|e| InputError::Json {
        context: "query-index.json".to_string(),
        source: e,
    })?;

    let mut out = Vec::with_capacity(wire.len());
    for q in wire {
        let mut platforms = BTreeMap::new();
        for (key, run) in q.platforms {
            let Some(platform) = EvalPlatform::parse(&key) else {
                match mode {
                    DecodeMode::Strict => {
                        return Err(InputError::UnknownKey {
                            key,
                            context: format!("query {}", q.query_id),
                        });
                    }
                    DecodeMode::Lenient => {
                        warn!("skipping unknown platform key {key:?} in query {}", q.query_id);
                        continue;
                    }
                }
            };
            platforms.insert(
                platform,
                PlatformRun {
                    judge_score: to_points(run.judge_score),
                    num_persons: run.num_persons,
                    dimensions: run
                        .dimensions
                        .into_iter()
                        .map(|(name, v)| (name, to_points(v)))
                        .collect(),
                    richness: to_points(run.richness),
                },
            );
        }
        out.push(QueryRecord {
            query_id: q.query_id,
            prompt: q.prompt,
            query_type: q.query_type,
            language: q.language,
            platforms,
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/index.rs"]
mod tests;
