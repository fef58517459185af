use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::model::evaluation::EvalPlatform;

/// One platform's run summary for a query. Scores are points; the decode
/// boundary converts fetched unit-scale values before they land here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformRun {
    pub judge_score: f64,
    pub num_persons: u32,
    pub dimensions: BTreeMap<String, f64>,
    pub richness: f64,
}

/// Entry from the fetched query index. `query_type` stays an open string:
/// the filter list is derived from whatever the data carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRecord {
    pub query_id: String,
    pub prompt: String,
    pub query_type: String,
    pub language: String,
    pub platforms: BTreeMap<EvalPlatform, PlatformRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonDimension {
    pub score: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonRecord {
    pub idx: u32,
    pub name: String,
    pub score: f64,
    pub linkedin: String,
    pub verification: String,
    pub dimensions: BTreeMap<String, PersonDimension>,
}

/// Person-level payload, tagged with the query id it was fetched for so a
/// response cannot be attached to a different query's view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryDetail {
    pub query_id: String,
    pub by_platform: BTreeMap<EvalPlatform, Vec<PersonRecord>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("person detail fetched for query {fetched} cannot be shown for query {requested}")]
pub struct DetailMismatch {
    pub requested: String,
    pub fetched: String,
}

/// Everything the per-query view renders: the index entry plus optional
/// person-level detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryView {
    pub record: QueryRecord,
    pub detail: Option<QueryDetail>,
}

impl QueryView {
    /// Rejects detail payloads tagged with a different query id than the
    /// record being shown.
    pub fn assemble(
        record: QueryRecord,
        detail: Option<QueryDetail>,
    ) -> Result<QueryView, DetailMismatch> {
        if let Some(d) = &detail {
            if d.query_id != record.query_id {
                return Err(DetailMismatch {
                    requested: record.query_id.clone(),
                    fetched: d.query_id.clone(),
                });
            }
        }
        Ok(QueryView { record, detail })
    }

    /// Person records for one platform, empty when detail is absent.
    pub fn persons(&self, platform: EvalPlatform) -> &[PersonRecord] {
        match &self.detail {
            Some(d) => d.by_platform.get(&platform).map(Vec::as_slice).unwrap_or(&[]),
            None => &[],
        }
    }
}
