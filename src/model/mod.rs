pub mod cases;
pub mod evaluation;
pub mod keys;
pub mod query;
pub mod scores;
