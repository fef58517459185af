use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

pub mod index;
pub mod persons;

use crate::model::query::{DetailMismatch, QueryDetail, QueryRecord, QueryView};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("evaluation data unavailable: request to {0} timed out")]
    Timeout(String),
    #[error("failed to build http client: {0}")]
    Client(reqwest::Error),
    #[error("query index not found at {0}")]
    IndexMissing(String),
    #[error("no evaluation data for query id {0}")]
    QueryNotFound(String),
    #[error("parse {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown platform key {key:?} in {context}")]
    UnknownKey { key: String, context: String },
    #[error(transparent)]
    Stale(#[from] DetailMismatch),
}

/// Where the fetched corpus lives: a local directory or an HTTP base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Dir(PathBuf),
    Http(String),
}

impl DataSource {
    /// `http://` and `https://` arguments are URL bases (any trailing slash
    /// trimmed); everything else is a local directory.
    pub fn parse(raw: &str) -> DataSource {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DataSource::Http(raw.trim_end_matches('/').to_string())
        } else {
            DataSource::Dir(PathBuf::from(raw))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Dir(dir) => dir.display().to_string(),
            DataSource::Http(base) => base.clone(),
        }
    }
}

/// How decode treats platform keys it does not recognize: skip them with a
/// warning, or reject the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    #[default]
    Lenient,
    Strict,
}

/// Fetched payloads carry unit-interval scores; the rest of the tool works
/// in 0-100 points. Every fetched score passes through here exactly once.
pub fn to_points(unit: f64) -> f64 {
    unit * 100.0
}

const INDEX_DOC: &str = "query-index.json";

enum Backend {
    Dir(PathBuf),
    Http {
        base: String,
        client: reqwest::blocking::Client,
    },
}

/// Reads the query corpus from one source, with a bounded timeout for HTTP.
pub struct Fetcher {
    backend: Backend,
    mode: DecodeMode,
}

impl Fetcher {
    pub fn new(source: DataSource, mode: DecodeMode, timeout: Duration) -> Result<Fetcher, InputError> {
        let backend = match source {
            DataSource::Dir(dir) => Backend::Dir(dir),
            DataSource::Http(base) => {
                let client = reqwest::blocking::Client::builder()
                    .timeout(timeout)
                    .build()
                    .map_err(InputError::Client)?;
                Backend::Http { base, client }
            }
        };
        Ok(Fetcher { backend, mode })
    }

    /// Reads one document. `Ok(None)` means the document does not exist at
    /// the source (missing file, HTTP 404).
    fn fetch_text(&self, rel: &str) -> Result<Option<String>, InputError> {
        match &self.backend {
            Backend::Dir(dir) => {
                let path = dir.join(rel);
                match std::fs::read_to_string(&path) {
                    Ok(text) => Ok(Some(text)),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(InputError::Io { path: path.display().to_string(), source: e }),
                }
            }
            Backend::Http { base, client } => {
                let url = format!("{base}/{rel}");
                let resp = match client.get(&url).send() {
                    Ok(resp) => resp,
                    Err(e) if e.is_timeout() => return Err(InputError::Timeout(url)),
                    Err(e) => return Err(InputError::Http { url, source: e }),
                };
                if resp.status() == reqwest::StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                let resp = resp
                    .error_for_status()
                    .map_err(|e| InputError::Http { url: url.clone(), source: e })?;
                let text = resp.text().map_err(|e| {
                    if e.is_timeout() {
                        InputError::Timeout(url.clone())
                    } else {
                        InputError::Http { url: url.clone(), source: e }
                    }
                })?;
                Ok(Some(text))
            }
        }
    }

    fn locate(&self, rel: &str) -> String {
        match &self.backend {
            Backend::Dir(dir) => dir.join(rel).display().to_string(),
            Backend::Http { base, .. } => format!("{base}/{rel}"),
        }
    }

    pub fn load_index(&self) -> Result<Vec<QueryRecord>, InputError> {
        let text = self
            .fetch_text(INDEX_DOC)?
            .ok_or_else(|| InputError::IndexMissing(self.locate(INDEX_DOC)))?;
        let records = index::decode_index(&text, self.mode)?;
        info!("loaded {} queries from {}", records.len(), self.locate(INDEX_DOC));
        Ok(records)
    }

    /// Person-level detail for one query. A missing document is the expected
    /// "no detail available" case, not an error.
    pub fn load_detail(&self, query_id: &str) -> Result<Option<QueryDetail>, InputError> {
        let rel = format!("persons/{query_id}.json");
        match self.fetch_text(&rel)? {
            Some(text) => Ok(Some(persons::decode_persons(&text, query_id, self.mode)?)),
            None => {
                info!("no person detail document for query {query_id}");
                Ok(None)
            }
        }
    }

    /// One query's full view: its index entry plus whatever person detail
    /// the source has for it.
    pub fn load_view(&self, query_id: &str) -> Result<QueryView, InputError> {
        let records = self.load_index()?;
        let record = records
            .into_iter()
            .find(|r| r.query_id == query_id)
            .ok_or_else(|| InputError::QueryNotFound(query_id.to_string()))?;
        let detail = self.load_detail(query_id)?;
        Ok(QueryView::assemble(record, detail)?)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/fetcher.rs"]
mod tests;
