#![forbid(unsafe_code)]

//! Fleetdeck public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.

use std::fmt;

// --- Style re-exports ------------------------------------------------------

pub use fdeck_style::{ActivePalette, ColorParseError, ColorScale, Rgb, ScaleStep};

// --- Analytics re-exports --------------------------------------------------

pub use fdeck_analytics::{
    AnalyticCategory, AnalyticMetric, AnalyticsMsg, AnalyticsView, CategoryId, MetricId,
    SampleError, Selection, Trend, filter_categories, normalize, render_bars,
};

// --- Tenant re-exports -----------------------------------------------------

pub use fdeck_tenant::{
    DirectoryError, MemoryDirectory, MemoryVehicleRegistry, NotifyError, QuoteMailer,
    QuoteNotification, RecordingMailer, TenantContext, TenantDirectory, TenantId, TenantSession,
    Vehicle, VehicleId, VehicleRegistry, VehicleStatus, referral_code,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for fleetdeck apps.
#[derive(Debug)]
pub enum Error {
    /// Tenant or vehicle document boundary failure.
    Directory(DirectoryError),
    /// Outbound notification failure.
    Notify(NotifyError),
    /// Malformed brand color.
    Color(ColorParseError),
    /// Malformed sparkline samples.
    Samples(SampleError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(err) => write!(f, "{err}"),
            Self::Notify(err) => write!(f, "{err}"),
            Self::Color(err) => write!(f, "{err}"),
            Self::Samples(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Directory(err) => Some(err),
            Self::Notify(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::Samples(err) => Some(err),
        }
    }
}

impl From<DirectoryError> for Error {
    fn from(err: DirectoryError) -> Self {
        Self::Directory(err)
    }
}

impl From<NotifyError> for Error {
    fn from(err: NotifyError) -> Self {
        Self::Notify(err)
    }
}

impl From<ColorParseError> for Error {
    fn from(err: ColorParseError) -> Self {
        Self::Color(err)
    }
}

impl From<SampleError> for Error {
    fn from(err: SampleError) -> Self {
        Self::Samples(err)
    }
}

/// Standard result type for fleetdeck APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ActivePalette, AnalyticCategory, AnalyticMetric, AnalyticsMsg, AnalyticsView, ColorScale,
        Error, Result, Rgb, ScaleStep, Selection, TenantContext, TenantDirectory, TenantId,
        TenantSession, Trend,
    };

    pub use crate::{analytics, style, tenant};
}

pub use fdeck_analytics as analytics;
pub use fdeck_style as style;
pub use fdeck_tenant as tenant;
