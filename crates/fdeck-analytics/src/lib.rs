#![forbid(unsafe_code)]

//! Analytics: metric catalog, selection filtering, and sparkline scaling.

pub mod filter;
pub mod metric;
pub mod selection;
pub mod sparkline;
pub mod view_model;

pub use filter::filter_categories;
pub use metric::{AnalyticCategory, AnalyticMetric, CategoryId, MetricId, Trend};
pub use selection::Selection;
pub use sparkline::{SampleError, normalize, render_bars};
pub use view_model::{AnalyticsMsg, AnalyticsView};
