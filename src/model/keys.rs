use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Lessie,
    Exa,
    Dinq,
    Manus,
    Gpt,
    Gemini,
}

impl Platform {
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Lessie,
            Platform::Exa,
            Platform::Dinq,
            Platform::Manus,
            Platform::Gpt,
            Platform::Gemini,
        ]
    }

    pub fn parse(s: &str) -> Option<Platform> {
        match s {
            "lessie" => Some(Platform::Lessie),
            "exa" => Some(Platform::Exa),
            "dinq" => Some(Platform::Dinq),
            "manus" => Some(Platform::Manus),
            "gpt" => Some(Platform::Gpt),
            "gemini" => Some(Platform::Gemini),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Influencer,
    Recruitment,
    LeadGen,
}

impl Scenario {
    pub fn all() -> &'static [Scenario] {
        &[Scenario::Influencer, Scenario::Recruitment, Scenario::LeadGen]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Recall,
    Precision,
    DataCoverage,
    ContactRate,
    Richness,
    ResponseTime,
}

impl Dimension {
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Recall,
            Dimension::Precision,
            Dimension::DataCoverage,
            Dimension::ContactRate,
            Dimension::Richness,
            Dimension::ResponseTime,
        ]
    }

    /// Dimensions shown in charts; response time is kept out of score charts
    /// because its scale reads inverted next to quality dimensions.
    pub fn display() -> &'static [Dimension] {
        &[
            Dimension::Recall,
            Dimension::Precision,
            Dimension::DataCoverage,
            Dimension::ContactRate,
            Dimension::Richness,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Recall => "recall",
            Dimension::Precision => "precision",
            Dimension::DataCoverage => "data_coverage",
            Dimension::ContactRate => "contact_rate",
            Dimension::Richness => "richness",
            Dimension::ResponseTime => "response_time",
        }
    }

    pub fn parse(s: &str) -> Option<Dimension> {
        match s {
            "recall" => Some(Dimension::Recall),
            "precision" => Some(Dimension::Precision),
            "data_coverage" => Some(Dimension::DataCoverage),
            "contact_rate" => Some(Dimension::ContactRate),
            "richness" => Some(Dimension::Richness),
            "response_time" => Some(Dimension::ResponseTime),
            _ => None,
        }
    }
}
