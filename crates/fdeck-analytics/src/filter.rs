#![forbid(unsafe_code)]

//! Pure selection filter over the metric catalog.

use crate::metric::AnalyticCategory;
use crate::selection::Selection;

/// Filter the catalog down to the selected metrics.
///
/// An empty selection means "no filter": the catalog is returned
/// unchanged. Otherwise each category keeps only its selected metrics
/// in their original order, and categories left with zero metrics are
/// dropped. Surviving categories keep their input order.
///
/// Deterministic in its inputs and free of side effects; cheap enough
/// to run on every render without memoization.
#[must_use]
pub fn filter_categories(
    categories: &[AnalyticCategory],
    selection: &Selection,
) -> Vec<AnalyticCategory> {
    if selection.is_empty() {
        return categories.to_vec();
    }

    categories
        .iter()
        .filter_map(|category| {
            let metrics: Vec<_> = category
                .metrics
                .iter()
                .filter(|metric| selection.contains(&metric.id))
                .cloned()
                .collect();
            if metrics.is_empty() {
                None
            } else {
                Some(AnalyticCategory {
                    id: category.id.clone(),
                    title: category.title.clone(),
                    metrics,
                })
            }
        })
        .collect()
}
