use crate::model::evaluation::{EvalDimension, EvalPlatform, QueryKind};
use crate::model::keys::{Dimension, Platform, Scenario};

#[derive(Debug, Clone, Copy)]
pub struct PlatformDef {
    pub key: Platform,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ScenarioDef {
    pub key: Scenario,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DimensionDef {
    pub key: Dimension,
    pub label: &'static str,
    pub weight: f64,
    pub description: &'static str,
}

/// Networks the coverage matrix is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceNetwork {
    Linkedin,
    Youtube,
    Twitter,
    Tiktok,
    Github,
    Reddit,
    Instagram,
}

impl SourceNetwork {
    pub fn all() -> &'static [SourceNetwork] {
        &[
            SourceNetwork::Linkedin,
            SourceNetwork::Youtube,
            SourceNetwork::Twitter,
            SourceNetwork::Tiktok,
            SourceNetwork::Github,
            SourceNetwork::Reddit,
            SourceNetwork::Instagram,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceNetwork::Linkedin => "LinkedIn",
            SourceNetwork::Youtube => "YouTube",
            SourceNetwork::Twitter => "Twitter",
            SourceNetwork::Tiktok => "TikTok",
            SourceNetwork::Github => "GitHub",
            SourceNetwork::Reddit => "Reddit",
            SourceNetwork::Instagram => "Instagram",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EvalPlatformDef {
    pub key: EvalPlatform,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct QueryKindDef {
    pub key: QueryKind,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct EvalDimensionDef {
    pub key: EvalDimension,
    pub label: &'static str,
    pub description: &'static str,
}

const PLATFORM_DEFS: &[PlatformDef] = &[
    PlatformDef {
        key: Platform::Lessie,
        label: "Lessie",
        color: "#3B82F6",
    },
    PlatformDef {
        key: Platform::Exa,
        label: "EXA",
        color: "#8B5CF6",
    },
    PlatformDef {
        key: Platform::Dinq,
        label: "DINQ",
        color: "#10B981",
    },
    PlatformDef {
        key: Platform::Manus,
        label: "Manus",
        color: "#F59E0B",
    },
    PlatformDef {
        key: Platform::Gpt,
        label: "GPT",
        color: "#74AA9C",
    },
    PlatformDef {
        key: Platform::Gemini,
        label: "Gemini",
        color: "#EF4444",
    },
];

const SCENARIO_DEFS: &[ScenarioDef] = &[
    ScenarioDef {
        key: Scenario::Influencer,
        label: "Influencer Discovery",
        color: "#F472B6",
    },
    ScenarioDef {
        key: Scenario::Recruitment,
        label: "Recruitment",
        color: "#60A5FA",
    },
    ScenarioDef {
        key: Scenario::LeadGen,
        label: "Lead Generation",
        color: "#34D399",
    },
];

// Weights are presentational metadata for the published scorecard; the
// benchmark rows already carry the blended overall score.
const DIMENSION_DEFS: &[DimensionDef] = &[
    DimensionDef {
        key: Dimension::Recall,
        label: "Recall",
        weight: 0.20,
        description: "How many ground-truth people were found",
    },
    DimensionDef {
        key: Dimension::Precision,
        label: "Precision",
        weight: 0.20,
        description: "How many returned results are truly relevant",
    },
    DimensionDef {
        key: Dimension::DataCoverage,
        label: "Data Coverage",
        weight: 0.15,
        description: "How many data sources are covered",
    },
    DimensionDef {
        key: Dimension::ContactRate,
        label: "Contact Rate",
        weight: 0.15,
        description: "Percentage of results with email or phone",
    },
    DimensionDef {
        key: Dimension::Richness,
        label: "Richness",
        weight: 0.15,
        description: "Completeness of each person profile",
    },
    DimensionDef {
        key: Dimension::ResponseTime,
        label: "Response Time",
        weight: 0.15,
        description: "How fast the search returns results",
    },
];

const EVAL_PLATFORM_DEFS: &[EvalPlatformDef] = &[
    EvalPlatformDef {
        key: EvalPlatform::Lessie,
        label: "Lessie",
        color: "#3B82F6",
    },
    EvalPlatformDef {
        key: EvalPlatform::Exa,
        label: "Exa",
        color: "#F59E0B",
    },
    EvalPlatformDef {
        key: EvalPlatform::Juicebox,
        label: "Juicebox",
        color: "#10B981",
    },
    EvalPlatformDef {
        key: EvalPlatform::Droid,
        label: "Claude Code",
        color: "#8B5CF6",
    },
    EvalPlatformDef {
        key: EvalPlatform::Manus,
        label: "Manus",
        color: "#EF4444",
    },
];

const QUERY_KIND_DEFS: &[QueryKindDef] = &[
    QueryKindDef {
        key: QueryKind::B2bProspecting,
        label: "B2B Prospecting",
    },
    QueryKindDef {
        key: QueryKind::Recruiting,
        label: "Recruiting",
    },
    QueryKindDef {
        key: QueryKind::InfluencerSearch,
        label: "Influencer Search",
    },
    QueryKindDef {
        key: QueryKind::Deterministic,
        label: "Deterministic",
    },
];

const EVAL_DIMENSION_DEFS: &[EvalDimensionDef] = &[
    EvalDimensionDef {
        key: EvalDimension::Relevance,
        label: "Relevance",
        description: "How well each returned person matches the search intent and criteria",
    },
    EvalDimensionDef {
        key: EvalDimension::Accuracy,
        label: "Accuracy",
        description: "Whether the person's profile information is factually correct and verifiable",
    },
    EvalDimensionDef {
        key: EvalDimension::Uniqueness,
        label: "Uniqueness",
        description: "Discovery value from results beyond obvious, easily-findable profiles",
    },
    EvalDimensionDef {
        key: EvalDimension::ResultDepth,
        label: "Result Depth",
        description: "Average number of qualified results returned per query",
    },
    EvalDimensionDef {
        key: EvalDimension::HighQualityRate,
        label: "Quality Rate",
        description: "Percentage of top results scoring 80 points or above",
    },
    EvalDimensionDef {
        key: EvalDimension::PrecisionAtK,
        label: "Precision@K",
        description: "Percentage of top results with a perfect relevance match",
    },
];

pub fn platform_defs() -> &'static [PlatformDef] {
    PLATFORM_DEFS
}

pub fn scenario_defs() -> &'static [ScenarioDef] {
    SCENARIO_DEFS
}

pub fn dimension_defs() -> &'static [DimensionDef] {
    DIMENSION_DEFS
}

pub fn eval_platform_defs() -> &'static [EvalPlatformDef] {
    EVAL_PLATFORM_DEFS
}

pub fn query_kind_defs() -> &'static [QueryKindDef] {
    QUERY_KIND_DEFS
}

pub fn eval_dimension_defs() -> &'static [EvalDimensionDef] {
    EVAL_DIMENSION_DEFS
}
