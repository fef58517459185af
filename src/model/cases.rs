use serde::Serialize;

use crate::model::keys::{Platform, Scenario};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SamplePerson {
    pub name: &'static str,
    pub title: &'static str,
    pub platform_source: &'static str,
    pub profile_url: &'static str,
    pub has_email: bool,
    pub has_phone: bool,
    pub relevance_score: u32,
    pub matched_ground_truth: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CasePlatformResult {
    pub platform: Platform,
    pub matched_count: u32,
    pub total_returned: u32,
    pub sample_results: &'static [SamplePerson],
}

/// One curated evaluation query with a known ground-truth answer set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CaseStudy {
    pub id: &'static str,
    pub query: &'static str,
    pub scenario: Scenario,
    pub ground_truth_count: u32,
    pub platform_results: &'static [CasePlatformResult],
}
