#![forbid(unsafe_code)]

//! Tenant boundary: configuration documents, fleet CRUD, notifications,
//! and the load→derive→publish theming pipeline.

pub mod context;
pub mod notify;
pub mod pipeline;
pub mod vehicle;

pub use context::{
    DirectoryError, DirectoryResult, MemoryDirectory, TenantContext, TenantDirectory, TenantId,
};
pub use notify::{NotifyError, QuoteMailer, QuoteNotification, RecordingMailer, referral_code};
pub use pipeline::TenantSession;
pub use vehicle::{
    MemoryVehicleRegistry, ParseVehicleStatusError, Vehicle, VehicleId, VehicleRegistry,
    VehicleStatus,
};
