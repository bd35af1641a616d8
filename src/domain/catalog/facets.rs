//! Facet Indexer
//!
//! 从音色列表推导每个维度的取值集合

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::voice::{Facet, Voice};

/// 每个维度在当前音色列表中出现过的取值
///
/// 不变量: 只在音色列表变化时整体重算，不做增量维护
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValueSet {
    values: BTreeMap<Facet, BTreeSet<String>>,
}

impl FacetValueSet {
    /// 空集合（所有维度都为空）
    pub fn empty() -> Self {
        Self {
            values: Facet::ALL
                .iter()
                .map(|facet| (*facet, BTreeSet::new()))
                .collect(),
        }
    }

    pub fn from_voices(voices: &[Voice]) -> Self {
        let mut set = Self::empty();
        for voice in voices {
            for facet in Facet::ALL {
                set.values
                    .entry(facet)
                    .or_default()
                    .insert(voice.facet(facet).to_string());
            }
        }
        set
    }

    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        // empty() 预先填充了所有维度
        &self.values[&facet]
    }

    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.values(facet).contains(value)
    }

    /// 下拉框选项
    pub fn options(&self, facet: Facet) -> Vec<&str> {
        self.values(facet).iter().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(BTreeSet::is_empty)
    }
}

impl Default for FacetValueSet {
    fn default() -> Self {
        Self::empty()
    }
}
