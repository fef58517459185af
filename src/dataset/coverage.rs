use serde::Serialize;

use crate::catalog::defs::SourceNetwork;
use crate::model::keys::Platform;

/// Share of profiles each platform can retrieve from a source network,
/// in percent, measured over the shared ground-truth pool.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SourceCoverage {
    pub platform: Platform,
    pub linkedin: u32,
    pub youtube: u32,
    pub twitter: u32,
    pub tiktok: u32,
    pub github: u32,
    pub reddit: u32,
    pub instagram: u32,
}

impl SourceCoverage {
    pub fn get(&self, network: SourceNetwork) -> u32 {
        match network {
            SourceNetwork::Linkedin => self.linkedin,
            SourceNetwork::Youtube => self.youtube,
            SourceNetwork::Twitter => self.twitter,
            SourceNetwork::Tiktok => self.tiktok,
            SourceNetwork::Github => self.github,
            SourceNetwork::Reddit => self.reddit,
            SourceNetwork::Instagram => self.instagram,
        }
    }
}

const fn row(platform: Platform, pct: [u32; 7]) -> SourceCoverage {
    SourceCoverage {
        platform,
        linkedin: pct[0],
        youtube: pct[1],
        twitter: pct[2],
        tiktok: pct[3],
        github: pct[4],
        reddit: pct[5],
        instagram: pct[6],
    }
}

// Column order: linkedin, youtube, twitter, tiktok, github, reddit, instagram.
const COVERAGE_ROWS: &[SourceCoverage] = &[
    row(Platform::Lessie, [95, 90, 85, 88, 82, 70, 86]),
    row(Platform::Exa, [88, 82, 80, 75, 78, 65, 72]),
    row(Platform::Dinq, [85, 70, 72, 68, 65, 55, 66]),
    row(Platform::Manus, [80, 65, 70, 60, 58, 50, 55]),
    row(Platform::Gpt, [75, 72, 78, 55, 70, 68, 50]),
    row(Platform::Gemini, [72, 70, 75, 50, 65, 62, 48]),
];

pub fn coverage_rows() -> &'static [SourceCoverage] {
    COVERAGE_ROWS
}
