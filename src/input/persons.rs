use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::input::{DecodeMode, InputError, to_points};
use crate::model::evaluation::EvalPlatform;
use crate::model::query::{PersonDimension, PersonRecord, QueryDetail};

#[derive(Debug, Deserialize)]
struct WirePerson {
    idx: u32,
    name: String,
    score: f64,
    #[serde(default)]
    linkedin: String,
    #[serde(default)]
    verification: String,
    #[serde(default)]
    dimensions: BTreeMap<String, WireDimension>,
}

#[derive(Debug, Deserialize)]
struct WireDimension {
    score: f64,
    #[serde(default)]
    reasoning: String,
}

/// Decodes one person-detail document. The result is tagged with the query
/// id it was fetched for; view assembly refuses to pair it with any other
/// query. Scores convert to points here.
pub fn decode_persons(
    text: &str,
    query_id: &str,
    mode: DecodeMode,
) -> Result<QueryDetail, InputError> {
    let wire: BTreeMap<String, Vec<WirePerson>> =
        serde_json::from_str(text).map_err(|e| InputError::Json {
            context: format!("persons/{query_id}.json"),
            source: e,
        })?;

    let mut by_platform = BTreeMap::new();
    for (key, persons) in wire {
        let Some(platform) = EvalPlatform::parse(&key) else {
            match mode {
                DecodeMode::Strict => {
                    return Err(InputError::UnknownKey {
                        key,
                        context: format!("persons/{query_id}.json"),
                    });
                }
                DecodeMode::Lenient => {
                    warn!("skipping unknown platform key {key:?} in persons/{query_id}.json");
                    continue;
                }
            }
        };
        let records = persons
            .into_iter()
            .map(|p| PersonRecord {
                idx: p.idx,
                name: p.name,
                score: to_points(p.score),
                linkedin: p.linkedin,
                verification: p.verification,
                dimensions: p
                    .dimensions
                    .into_iter()
                    .map(|(name, d)| {
                        (name, PersonDimension { score: to_points(d.score), reasoning: d.reasoning })
                    })
                    .collect(),
            })
            .collect();
        by_platform.insert(platform, records);
    }

    Ok(QueryDetail { query_id: query_id.to_string(), by_platform })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/persons.rs"]
mod tests;
