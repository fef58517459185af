pub mod defs;

pub use defs::{
    DimensionDef, EvalDimensionDef, EvalPlatformDef, PlatformDef, QueryKindDef, ScenarioDef,
    SourceNetwork,
};

use crate::model::evaluation::{EvalDimension, EvalPlatform, QueryKind};
use crate::model::keys::{Dimension, Platform, Scenario};

// Every table is laid out in enum order, so the discriminant doubles as the
// table index (asserted in tests below).

pub fn platform(key: Platform) -> &'static PlatformDef {
    &defs::platform_defs()[key as usize]
}

pub fn scenario(key: Scenario) -> &'static ScenarioDef {
    &defs::scenario_defs()[key as usize]
}

pub fn dimension(key: Dimension) -> &'static DimensionDef {
    &defs::dimension_defs()[key as usize]
}

pub fn eval_platform(key: EvalPlatform) -> &'static EvalPlatformDef {
    &defs::eval_platform_defs()[key as usize]
}

pub fn query_kind(key: QueryKind) -> &'static QueryKindDef {
    &defs::query_kind_defs()[key as usize]
}

pub fn eval_dimension(key: EvalDimension) -> &'static EvalDimensionDef {
    &defs::eval_dimension_defs()[key as usize]
}

/// Label for the open-ended query types showing up in fetched indexes.
/// Known kinds get their catalog label, anything else passes through.
pub fn query_type_label(raw: &str) -> &str {
    match QueryKind::parse(raw) {
        Some(kind) => query_kind(kind).label,
        None => raw,
    }
}
