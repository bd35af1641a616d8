//! Facet Selection - 用户当前的过滤条件

use std::collections::BTreeMap;

use crate::domain::voice::{Facet, Voice};

/// 表示"全部"的下拉框取值
pub const ALL_VALUES: &str = "all";

/// 每个维度的选中值；未选中的维度不出现在 map 中
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    selected: BTreeMap<Facet, String>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置某个维度，空字符串或 "all" 表示取消选择
    ///
    /// 返回值表示选择是否发生了变化
    pub fn set(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() || value == ALL_VALUES {
            return self.selected.remove(&facet).is_some();
        }
        match self.selected.insert(facet, value.clone()) {
            Some(previous) => previous != value,
            None => true,
        }
    }

    /// 当前选中值，未选中时为空字符串
    pub fn get(&self, facet: Facet) -> &str {
        self.selected.get(&facet).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    pub fn is_unset(&self) -> bool {
        self.selected.is_empty()
    }

    /// 所有已选中维度都精确相等（区分大小写）才算匹配
    pub fn matches(&self, voice: &Voice) -> bool {
        self.selected
            .iter()
            .all(|(facet, value)| voice.facet(*facet) == value)
    }

    /// 过滤音色列表，保持原有顺序
    pub fn apply<'a, I>(&self, voices: I) -> Vec<Voice>
    where
        I: IntoIterator<Item = &'a Voice>,
    {
        voices
            .into_iter()
            .filter(|voice| self.matches(voice))
            .cloned()
            .collect()
    }
}
