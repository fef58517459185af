use serde::Serialize;

use crate::dataset::{benchmarks, cases};
use crate::model::keys::{Dimension, Platform};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConsensusScores {
    pub gpt_score: f64,
    pub claude_score: f64,
    pub gemini_score: f64,
    pub final_score: f64,
}

/// Cross-judge scores for one (case, platform, dimension) cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JudgeConsensus {
    pub case_id: &'static str,
    pub platform: Platform,
    pub dimension: Dimension,
    pub scores: ConsensusScores,
}

/// Case studies that ship with a judge-consensus panel.
const SEEDED_CASE_IDS: &[&str] = &["inf-001", "rec-001", "lead-001"];

fn clamp_points(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

/// Synthesizes the three judge scores for one base score. The perturbations
/// are fixed trigonometric offsets of the base, so the same base always
/// produces the same bits. Each judge score is clamped to [0, 100]; the
/// final score is the rounded mean of the three.
pub fn consensus_scores(base: f64) -> ConsensusScores {
    let gpt_score = clamp_points(base + ((base * 7.0 + 1.0).sin() * 3.0).round());
    let claude_score = clamp_points(base + ((base * 5.0 + 2.0).cos() * 2.0).round());
    let gemini_score = clamp_points(base + ((base * 3.0 + 3.0).sin() * 2.5).round());
    let final_score = ((gpt_score + claude_score + gemini_score) / 3.0).round();
    ConsensusScores { gpt_score, claude_score, gemini_score, final_score }
}

/// Consensus cells for one seeded case: every platform crossed with every
/// dimension, with the base taken from the platform's benchmark row for the
/// case's scenario. Unseeded or unknown case ids yield no cells.
pub fn consensus_for_case(case_id: &str) -> Vec<JudgeConsensus> {
    let Some(case) = cases::case_by_id(case_id) else {
        return Vec::new();
    };
    if !SEEDED_CASE_IDS.contains(&case.id) {
        return Vec::new();
    }
    let mut out = Vec::new();
    for &platform in Platform::all() {
        let Some(row) = benchmarks::row_for(platform, case.scenario) else {
            continue;
        };
        for &dimension in Dimension::all() {
            out.push(JudgeConsensus {
                case_id: case.id,
                platform,
                dimension,
                scores: consensus_scores(row.scores.get(dimension)),
            });
        }
    }
    out
}
