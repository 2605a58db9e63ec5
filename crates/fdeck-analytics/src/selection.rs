#![forbid(unsafe_code)]

//! User-chosen metric selection driving the filter engine.

use std::collections::HashSet;

use crate::metric::{AnalyticCategory, MetricId};

/// Set of metric identifiers chosen by the user.
///
/// The empty set is the "no filter applied" sentinel: the full catalog
/// renders. Owned by a single view-model instance; every mutation runs
/// to completion before the next event is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    chosen: HashSet<MetricId>,
}

impl Selection {
    /// Create an empty selection (no filter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no metric is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Number of selected metrics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Whether a metric is selected.
    #[must_use]
    pub fn contains(&self, id: &MetricId) -> bool {
        self.chosen.contains(id)
    }

    /// Toggle a single metric.
    ///
    /// Returns whether the metric is selected afterwards.
    pub fn toggle(&mut self, id: MetricId) -> bool {
        if self.chosen.remove(&id) {
            false
        } else {
            self.chosen.insert(id);
            true
        }
    }

    /// Whether every metric of `category` is currently selected.
    ///
    /// A category without metrics is never considered fully selected.
    #[must_use]
    pub fn category_fully_selected(&self, category: &AnalyticCategory) -> bool {
        !category.metrics.is_empty()
            && category.metric_ids().all(|id| self.chosen.contains(id))
    }

    /// Bulk toggle for a category.
    ///
    /// When every metric of the category is selected, exactly those
    /// metrics are removed; otherwise the category's metrics are
    /// unioned in. Selections belonging to other categories are
    /// untouched either way.
    pub fn toggle_category(&mut self, category: &AnalyticCategory) {
        if self.category_fully_selected(category) {
            for id in category.metric_ids() {
                self.chosen.remove(id);
            }
        } else {
            for id in category.metric_ids() {
                self.chosen.insert(id.clone());
            }
        }
    }

    /// Drop every selection (back to "show everything").
    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// Iterate the selected ids (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &MetricId> {
        self.chosen.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::AnalyticMetric;

    fn category(id: &str, metric_ids: &[&str]) -> AnalyticCategory {
        let metrics = metric_ids
            .iter()
            .map(|m| AnalyticMetric::new(*m, *m))
            .collect();
        AnalyticCategory::new(id, id).with_metrics(metrics)
    }

    #[test]
    fn starts_empty() {
        let selection = Selection::new();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = Selection::new();
        assert!(selection.toggle(MetricId::from("m1")));
        assert!(selection.contains(&MetricId::from("m1")));
        assert!(!selection.toggle(MetricId::from("m1")));
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_unions_without_duplicates() {
        // Select m1, then select-all on its category: m1 must appear
        // once, m2 joins, nothing dropped
        let cat = category("a", &["m1", "m2"]);
        let mut selection = Selection::new();
        selection.toggle(MetricId::from("m1"));
        selection.toggle_category(&cat);

        assert_eq!(selection.len(), 2);
        assert!(selection.contains(&MetricId::from("m1")));
        assert!(selection.contains(&MetricId::from("m2")));
    }

    #[test]
    fn deselect_all_removes_exactly_category_ids() {
        let cat_a = category("a", &["m1", "m2"]);
        let cat_b = category("b", &["m3"]);
        let mut selection = Selection::new();
        selection.toggle_category(&cat_a);
        selection.toggle_category(&cat_b);

        // Fully selected: the second toggle on A removes only A's ids
        selection.toggle_category(&cat_a);
        assert!(!selection.contains(&MetricId::from("m1")));
        assert!(!selection.contains(&MetricId::from("m2")));
        assert!(selection.contains(&MetricId::from("m3")));
    }

    #[test]
    fn select_all_on_fully_selected_equals_explicit_deselect() {
        let cat = category("a", &["m1", "m2"]);

        let mut via_toggle = Selection::new();
        via_toggle.toggle_category(&cat);
        via_toggle.toggle_category(&cat);

        let mut via_explicit = Selection::new();
        via_explicit.toggle_category(&cat);
        via_explicit.toggle(MetricId::from("m1"));
        via_explicit.toggle(MetricId::from("m2"));

        assert_eq!(via_toggle, via_explicit);
    }

    #[test]
    fn partially_selected_category_is_not_fully_selected() {
        let cat = category("a", &["m1", "m2"]);
        let mut selection = Selection::new();
        selection.toggle(MetricId::from("m1"));
        assert!(!selection.category_fully_selected(&cat));

        selection.toggle(MetricId::from("m2"));
        assert!(selection.category_fully_selected(&cat));
    }

    #[test]
    fn empty_category_is_never_fully_selected() {
        let cat = category("a", &[]);
        let selection = Selection::new();
        assert!(!selection.category_fully_selected(&cat));
    }

    #[test]
    fn iter_visits_every_selected_id() {
        let cat = category("a", &["m1", "m2"]);
        let mut selection = Selection::new();
        selection.toggle_category(&cat);

        let mut ids: Vec<&str> = selection.iter().map(MetricId::as_str).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["m1", "m2"]);
    }

    #[test]
    fn clear_resets_to_no_filter() {
        let cat = category("a", &["m1", "m2"]);
        let mut selection = Selection::new();
        selection.toggle_category(&cat);
        selection.clear();
        assert!(selection.is_empty());
    }
}
