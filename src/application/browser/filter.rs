//! Filter State Controller
//!
//! 持有过滤条件，音色列表或过滤条件变化时重新计算可见列表

use std::sync::Arc;

use crate::domain::catalog::{FacetSelection, FacetValueSet};
use crate::domain::voice::{Facet, Voice};

/// 过滤状态控制器
///
/// 不变量:
/// - 每次重算都产生新的 `Arc<[Voice]>`，渲染侧用 `Arc::ptr_eq` 判断是否变化
/// - facet_values 总是由当前 voices 推导
pub struct FilterController {
    voices: Arc<[Voice]>,
    selection: FacetSelection,
    facet_values: FacetValueSet,
    filtered: Arc<[Voice]>,
    revision: u64,
}

impl FilterController {
    pub fn new() -> Self {
        Self {
            voices: Arc::from(Vec::new()),
            selection: FacetSelection::new(),
            facet_values: FacetValueSet::empty(),
            filtered: Arc::from(Vec::new()),
            revision: 0,
        }
    }

    /// 整体替换音色列表
    pub fn set_voices(&mut self, voices: Vec<Voice>) {
        self.voices = Arc::from(voices);
        self.facet_values = FacetValueSet::from_voices(&self.voices);
        self.recompute();
    }

    /// 设置单个维度，空字符串或 "all" 取消选择
    ///
    /// 返回值表示可见列表是否被重算
    pub fn set_facet(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        if self.selection.set(facet, value) {
            self.recompute();
            true
        } else {
            false
        }
    }

    /// 清空所有过滤条件
    pub fn clear(&mut self) -> bool {
        if self.selection.clear() {
            self.recompute();
            true
        } else {
            false
        }
    }

    pub fn voices(&self) -> &Arc<[Voice]> {
        &self.voices
    }

    pub fn filtered(&self) -> &Arc<[Voice]> {
        &self.filtered
    }

    pub fn facet_values(&self) -> &FacetValueSet {
        &self.facet_values
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    /// 每次重算递增
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn recompute(&mut self) {
        self.filtered = Arc::from(self.selection.apply(self.voices.iter()));
        self.revision += 1;
        tracing::debug!(
            total = self.voices.len(),
            visible = self.filtered.len(),
            revision = self.revision,
            "Voice filter recomputed"
        );
    }
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::fixtures::voice;

    fn ids(voices: &[Voice]) -> Vec<&str> {
        voices.iter().map(|v| v.voice_id.as_str()).collect()
    }

    #[test]
    fn test_select_category_keeps_relative_order() {
        let mut controller = FilterController::new();
        controller.set_voices(vec![
            voice("v1", "A", "female"),
            voice("v2", "A", "male"),
            voice("v3", "B", "female"),
        ]);

        controller.set_facet(Facet::Category, "A");
        assert_eq!(ids(controller.filtered()), vec!["v1", "v2"]);
    }

    #[test]
    fn test_new_list_reference_on_every_change() {
        let mut controller = FilterController::new();
        controller.set_voices(vec![voice("v1", "A", "female")]);
        let before = controller.filtered().clone();

        assert!(controller.set_facet(Facet::Gender, "female"));
        assert!(!Arc::ptr_eq(&before, controller.filtered()));
        assert_eq!(ids(controller.filtered()), ids(&before));

        let before = controller.filtered().clone();
        controller.set_voices(vec![voice("v1", "A", "female")]);
        assert!(!Arc::ptr_eq(&before, controller.filtered()));
    }

    #[test]
    fn test_unchanged_selection_does_not_recompute() {
        let mut controller = FilterController::new();
        controller.set_voices(vec![voice("v1", "A", "female")]);
        controller.set_facet(Facet::Category, "A");
        let revision = controller.revision();

        assert!(!controller.set_facet(Facet::Category, "A"));
        assert_eq!(controller.revision(), revision);
    }

    #[test]
    fn test_list_change_reapplies_selection_and_facets() {
        let mut controller = FilterController::new();
        controller.set_facet(Facet::Category, "B");
        assert!(controller.filtered().is_empty());

        controller.set_voices(vec![voice("v1", "A", "male"), voice("v2", "B", "male")]);
        assert_eq!(ids(controller.filtered()), vec!["v2"]);
        assert_eq!(
            controller.facet_values().options(Facet::Category),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_clear_restores_full_list() {
        let mut controller = FilterController::new();
        controller.set_voices(vec![voice("v1", "A", "male"), voice("v2", "B", "female")]);
        controller.set_facet(Facet::Category, "A");
        controller.set_facet(Facet::Gender, "female");
        assert!(controller.filtered().is_empty());

        assert!(controller.clear());
        assert_eq!(ids(controller.filtered()), vec!["v1", "v2"]);
        assert!(controller.selection().is_unset());
    }
}
