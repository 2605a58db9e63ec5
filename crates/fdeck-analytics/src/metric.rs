#![forbid(unsafe_code)]

//! Metric catalog types for the analytics view.
//!
//! Categories and metrics are plain display-ordered data: the order
//! they carry is the order the UI renders, and every transformation
//! downstream preserves it.

/// Identifier for a single metric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricId(pub String);

impl MetricId {
    /// Create a new metric id.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MetricId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MetricId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for MetricId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier for a metric category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(pub String);

impl CategoryId {
    /// Create a new category id.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Direction a metric moved over the reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    /// The metric improved / increased.
    Up,
    /// The metric declined / decreased.
    Down,
}

impl Trend {
    /// String tag used in serialized catalogs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Arrow glyph for compact rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Up => '▲',
            Self::Down => '▼',
        }
    }
}

/// A single analytic metric with its formatted display fields.
///
/// Values and change strings are preformatted upstream; this type only
/// carries them. `chart_data` backs the inline sparkline and is
/// expected to be non-empty whenever the metric is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticMetric {
    /// Stable identifier used by selection.
    pub id: MetricId,
    /// Display title.
    pub title: String,
    /// Current formatted value (e.g. `"1,204"`).
    pub value: String,
    /// Direction of change.
    pub trend: Trend,
    /// Formatted change (e.g. `"+12.4%"`).
    pub change: String,
    /// Ordered samples backing the sparkline.
    pub chart_data: Vec<f64>,
}

impl AnalyticMetric {
    /// Create a metric with empty display fields and an upward trend.
    #[must_use]
    pub fn new(id: impl Into<MetricId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            value: String::new(),
            trend: Trend::Up,
            change: String::new(),
            chart_data: Vec::new(),
        }
    }

    /// Set the formatted value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the trend direction.
    #[must_use]
    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = trend;
        self
    }

    /// Set the formatted change string.
    #[must_use]
    pub fn change(mut self, change: impl Into<String>) -> Self {
        self.change = change.into();
        self
    }

    /// Set the sparkline samples.
    #[must_use]
    pub fn chart_data(mut self, samples: Vec<f64>) -> Self {
        self.chart_data = samples;
        self
    }
}

/// An ordered group of metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticCategory {
    /// Stable identifier used by expansion and bulk selection.
    pub id: CategoryId,
    /// Display title.
    pub title: String,
    /// Metrics in display order.
    pub metrics: Vec<AnalyticMetric>,
}

impl AnalyticCategory {
    /// Create an empty category.
    #[must_use]
    pub fn new(id: impl Into<CategoryId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            metrics: Vec::new(),
        }
    }

    /// Append a metric.
    #[must_use]
    pub fn metric(mut self, metric: AnalyticMetric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Set metrics from a vec.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Vec<AnalyticMetric>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Iterate the metric ids in display order.
    pub fn metric_ids(&self) -> impl Iterator<Item = &MetricId> {
        self.metrics.iter().map(|metric| &metric.id)
    }

    /// Number of metrics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the category has no metrics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
