//! Compiled-in benchmark corpus: published score rows, case studies,
//! data-source coverage, evaluation summaries, and the judge-consensus
//! fixture.

pub mod benchmarks;
pub mod cases;
pub mod consensus;
pub mod coverage;
pub mod evaluation;
