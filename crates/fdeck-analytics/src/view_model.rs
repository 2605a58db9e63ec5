#![forbid(unsafe_code)]

//! Analytics view state: selection, expansion, and the visible tree.
//!
//! The view-model owns the catalog plus the user's selection and
//! expansion state, and applies discrete toggle events one at a time.
//! The visible tree is recomputed from the pure filter on every read;
//! nothing derived is cached, so the view can never go stale.

use std::collections::HashSet;

use crate::filter::filter_categories;
use crate::metric::{AnalyticCategory, CategoryId, MetricId};
use crate::selection::Selection;

/// Discrete user events consumed by [`AnalyticsView::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsMsg {
    /// Toggle a single metric in the selection.
    ToggleMetric(MetricId),
    /// Select or deselect every metric of a category.
    ToggleCategory(CategoryId),
    /// Reset the selection to "show everything".
    ClearSelection,
    /// Expand or collapse a category in the UI.
    ToggleExpanded(CategoryId),
}

/// View-model for the analytics screen.
///
/// Single-instance, single-threaded ownership: each update runs to
/// completion before the next event is accepted, so there is never a
/// partially applied toggle.
#[derive(Debug, Clone)]
pub struct AnalyticsView {
    categories: Vec<AnalyticCategory>,
    selection: Selection,
    expanded: HashSet<CategoryId>,
}

impl AnalyticsView {
    /// Create a view over a catalog.
    ///
    /// The first category starts expanded; everything else starts
    /// collapsed with an empty selection.
    #[must_use]
    pub fn new(categories: Vec<AnalyticCategory>) -> Self {
        let expanded = categories
            .first()
            .map(|category| category.id.clone())
            .into_iter()
            .collect();
        Self {
            categories,
            selection: Selection::new(),
            expanded,
        }
    }

    /// Apply one user event.
    ///
    /// A toggle naming an unknown category is ignored.
    pub fn update(&mut self, msg: AnalyticsMsg) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?msg, "analytics update");

        match msg {
            AnalyticsMsg::ToggleMetric(id) => {
                self.selection.toggle(id);
            }
            AnalyticsMsg::ToggleCategory(id) => {
                if let Some(category) = self.categories.iter().find(|c| c.id == id) {
                    self.selection.toggle_category(category);
                }
            }
            AnalyticsMsg::ClearSelection => self.selection.clear(),
            AnalyticsMsg::ToggleExpanded(id) => {
                if !self.expanded.remove(&id) {
                    self.expanded.insert(id);
                }
            }
        }
    }

    /// The filtered category tree in display order.
    ///
    /// Recomputed from the catalog and selection on every call.
    #[must_use]
    pub fn visible(&self) -> Vec<AnalyticCategory> {
        filter_categories(&self.categories, &self.selection)
    }

    /// Whether a category is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &CategoryId) -> bool {
        self.expanded.contains(id)
    }

    /// Current selection (read-only).
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Full catalog, unfiltered.
    #[must_use]
    pub fn categories(&self) -> &[AnalyticCategory] {
        &self.categories
    }
}
