//! Catalog Context - 音色目录过滤
//!
//! 职责:
//! - 维度取值索引 (FacetValueSet)
//! - 过滤条件与匹配策略 (FacetSelection)

mod facets;
mod selection;

pub use facets::FacetValueSet;
pub use selection::{FacetSelection, ALL_VALUES};
