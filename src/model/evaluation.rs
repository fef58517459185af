use serde::Serialize;

/// Platform keys recognized in fetched evaluation documents. The published
/// summary corpus covers the first three; the other two only appear in
/// per-query payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalPlatform {
    Lessie,
    Exa,
    Juicebox,
    Droid,
    Manus,
}

impl EvalPlatform {
    pub fn all() -> &'static [EvalPlatform] {
        &[
            EvalPlatform::Lessie,
            EvalPlatform::Exa,
            EvalPlatform::Juicebox,
            EvalPlatform::Droid,
            EvalPlatform::Manus,
        ]
    }

    /// Platforms with a full published evaluation summary.
    pub fn summary() -> &'static [EvalPlatform] {
        &[EvalPlatform::Lessie, EvalPlatform::Exa, EvalPlatform::Juicebox]
    }

    pub fn parse(s: &str) -> Option<EvalPlatform> {
        match s {
            "lessie" => Some(EvalPlatform::Lessie),
            "exa" => Some(EvalPlatform::Exa),
            "juicebox" => Some(EvalPlatform::Juicebox),
            "droid" => Some(EvalPlatform::Droid),
            "manus" => Some(EvalPlatform::Manus),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    B2bProspecting,
    Recruiting,
    InfluencerSearch,
    Deterministic,
}

impl QueryKind {
    pub fn all() -> &'static [QueryKind] {
        &[
            QueryKind::B2bProspecting,
            QueryKind::Recruiting,
            QueryKind::InfluencerSearch,
            QueryKind::Deterministic,
        ]
    }

    pub fn parse(s: &str) -> Option<QueryKind> {
        match s {
            "b2b_prospecting" => Some(QueryKind::B2bProspecting),
            "recruiting" => Some(QueryKind::Recruiting),
            "influencer_search" => Some(QueryKind::InfluencerSearch),
            "deterministic" => Some(QueryKind::Deterministic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalDimension {
    Relevance,
    Accuracy,
    Uniqueness,
    ResultDepth,
    HighQualityRate,
    PrecisionAtK,
}

impl EvalDimension {
    pub fn all() -> &'static [EvalDimension] {
        &[
            EvalDimension::Relevance,
            EvalDimension::Accuracy,
            EvalDimension::Uniqueness,
            EvalDimension::ResultDepth,
            EvalDimension::HighQualityRate,
            EvalDimension::PrecisionAtK,
        ]
    }
}

/// Result depth arrives as a raw per-query result count; every other
/// dimension is already a quality fraction. This ceiling maps depth onto the
/// same 0-100 point scale, capped so deep result sets cannot exceed it.
pub const DEPTH_CEILING: f64 = 60.0;

pub fn normalize_depth(raw: f64) -> f64 {
    (raw / DEPTH_CEILING).min(1.0) * 100.0
}

/// Per-dimension evaluation scores in points. `result_depth` is stored
/// already normalized against [`DEPTH_CEILING`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvalDimensions {
    pub relevance: f64,
    pub accuracy: f64,
    pub uniqueness: f64,
    pub result_depth: f64,
    pub high_quality_rate: f64,
    pub precision_at_k: f64,
}

impl EvalDimensions {
    pub fn get(&self, dim: EvalDimension) -> f64 {
        match dim {
            EvalDimension::Relevance => self.relevance,
            EvalDimension::Accuracy => self.accuracy,
            EvalDimension::Uniqueness => self.uniqueness,
            EvalDimension::ResultDepth => self.result_depth,
            EvalDimension::HighQualityRate => self.high_quality_rate,
            EvalDimension::PrecisionAtK => self.precision_at_k,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueryTypeStats {
    pub kind: QueryKind,
    pub count: u32,
    pub avg_score: f64,
    pub dimensions: EvalDimensions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvalTiming {
    pub total_time: &'static str,
    pub avg_seconds_per_person: f64,
}

/// Published evaluation summary for one platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformEvaluation {
    pub platform: EvalPlatform,
    pub total_queries: u32,
    pub total_queries_original: u32,
    pub total_persons: u32,
    pub top_k_persons: u32,
    pub judge_model: &'static str,
    pub timing: EvalTiming,
    pub judge_score: f64,
    pub richness: f64,
    pub by_dimension: EvalDimensions,
    pub by_query_type: [QueryTypeStats; 4],
}

impl PlatformEvaluation {
    /// `by_query_type` holds one entry per kind, in enum order.
    pub fn query_type(&self, kind: QueryKind) -> &QueryTypeStats {
        &self.by_query_type[kind as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvalExample {
    pub name: &'static str,
    pub score: f64,
    pub verification: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalCasePlatform {
    pub platform: EvalPlatform,
    pub judge_score: f64,
    pub num_persons: u32,
    pub relevance: f64,
    pub accuracy: f64,
    pub uniqueness: f64,
    pub richness: f64,
    pub good_examples: Vec<EvalExample>,
    pub bad_examples: Vec<EvalExample>,
}

/// Representative query with independently verified person-level results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalCaseStudy {
    pub query_id: &'static str,
    pub prompt: &'static str,
    pub kind: QueryKind,
    pub platforms: Vec<EvalCasePlatform>,
}
