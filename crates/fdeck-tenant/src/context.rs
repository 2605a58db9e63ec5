#![forbid(unsafe_code)]

//! Tenant configuration documents and the directory boundary.
//!
//! The directory is an external collaborator (a remote document store
//! in production); this module fixes only its input/output contract
//! plus an in-memory backend for tests and ephemeral deployments.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

/// Identifier for a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub String);

impl TenantId {
    /// Create a new tenant id.
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

impl From<&str> for TenantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TenantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Tenant configuration document as loaded from the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantContext {
    /// Stable tenant identifier.
    pub id: TenantId,
    /// Display name shown in the portal header.
    pub name: String,
    /// Raw brand color string (`#RRGGBB`). Validated at theme time, not
    /// at load time, so a bad value degrades to the previous theme
    /// instead of failing the whole load.
    pub brand_color: String,
    /// Contact address for outbound notifications.
    pub contact_email: Option<String>,
}

/// Errors surfaced by the tenant/document boundary.
///
/// Transient from the caller's point of view: retrying is safe, and no
/// theming or selection state is touched by a failed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No document exists for the id.
    NotFound(TenantId),
    /// The backing store failed (network, storage, decode).
    Backend(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "tenant {:?} not found", id.as_str()),
            Self::Backend(msg) => write!(f, "document store error: {msg}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Read access to tenant configuration documents.
pub trait TenantDirectory {
    /// Load the configuration document for one tenant.
    fn load_tenant(&self, id: &TenantId) -> DirectoryResult<TenantContext>;
}

/// In-memory directory for tests and ephemeral deployments.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    tenants: RwLock<HashMap<TenantId, TenantContext>>,
}

impl MemoryDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a tenant document.
    pub fn insert(&self, context: TenantContext) {
        let mut tenants = self.tenants.write().expect("MemoryDirectory lock poisoned");
        tenants.insert(context.id.clone(), context);
    }
}

impl TenantDirectory for MemoryDirectory {
    fn load_tenant(&self, id: &TenantId) -> DirectoryResult<TenantContext> {
        let tenants = self.tenants.read().expect("MemoryDirectory lock poisoned");
        tenants
            .get(id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))
    }
}
