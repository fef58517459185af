//! Pure aggregation over the score corpus: means, ordering, chart pivots,
//! and rate arithmetic. No I/O, no state; same inputs, same outputs.

pub mod averages;
pub mod pivot;
pub mod ranking;
pub mod rates;
