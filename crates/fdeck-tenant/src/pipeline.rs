#![forbid(unsafe_code)]

//! Tenant activation: load → derive → publish.
//!
//! A tenant switch is the only path that replaces the active palette.
//! The load is awaited once by the caller's event loop; by the time
//! [`TenantSession::activate`] runs, derivation is synchronous and
//! publishes exactly one fully formed scale. A malformed brand color
//! never reaches the publisher, so the last-known-good palette stays in
//! effect.

use std::sync::Arc;

use fdeck_style::{ActivePalette, ColorScale, Rgb};
use tracing::{info, warn};

use crate::context::{DirectoryResult, TenantContext, TenantDirectory, TenantId};

/// Session tying a tenant directory to the palette cell.
///
/// Exactly one derivation runs per completed tenant load, keyed by the
/// tenant id: re-activating the tenant that is already active is a
/// no-op.
pub struct TenantSession<D> {
    directory: D,
    palette: Arc<ActivePalette>,
    active: Option<TenantContext>,
}

impl<D: TenantDirectory> TenantSession<D> {
    /// Create a session with its own empty palette cell.
    #[must_use]
    pub fn new(directory: D) -> Self {
        Self::with_palette(directory, Arc::new(ActivePalette::new()))
    }

    /// Create a session publishing into an existing palette cell.
    #[must_use]
    pub fn with_palette(directory: D, palette: Arc<ActivePalette>) -> Self {
        Self {
            directory,
            palette,
            active: None,
        }
    }

    /// Load a tenant and publish its derived theme.
    ///
    /// Directory failures propagate and leave both the active tenant
    /// and the palette untouched. An invalid brand color logs a warning
    /// and keeps the previous palette; the tenant still activates.
    pub fn activate(&mut self, id: &TenantId) -> DirectoryResult<TenantContext> {
        if let Some(active) = &self.active
            && active.id == *id
        {
            return Ok(active.clone());
        }

        let context = self.directory.load_tenant(id)?;
        self.apply_theme(&context);
        self.active = Some(context.clone());
        Ok(context)
    }

    fn apply_theme(&self, context: &TenantContext) {
        match Rgb::from_hex(&context.brand_color) {
            Ok(base) => {
                self.palette.publish(ColorScale::derive(base));
                info!(
                    tenant = context.id.as_str(),
                    brand = %context.brand_color,
                    "tenant theme published"
                );
            }
            Err(err) => {
                warn!(
                    tenant = context.id.as_str(),
                    brand = %context.brand_color,
                    error = %err,
                    "invalid brand color, keeping previous palette"
                );
            }
        }
    }

    /// The palette cell this session publishes into.
    #[must_use]
    pub fn palette(&self) -> &Arc<ActivePalette> {
        &self.palette
    }

    /// Currently active tenant, if any.
    #[must_use]
    pub fn active(&self) -> Option<&TenantContext> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{DirectoryError, MemoryDirectory};

    fn tenant(id: &str, brand_color: &str) -> TenantContext {
        TenantContext {
            id: TenantId::from(id),
            name: format!("{id} Detailing"),
            brand_color: brand_color.to_string(),
            contact_email: None,
        }
    }

    fn session_with(tenants: &[TenantContext]) -> TenantSession<MemoryDirectory> {
        let directory = MemoryDirectory::new();
        for t in tenants {
            directory.insert(t.clone());
        }
        TenantSession::new(directory)
    }

    #[test]
    fn activate_publishes_derived_theme() {
        let mut session = session_with(&[tenant("acme", "#6366F1")]);
        let context = session.activate(&TenantId::from("acme")).unwrap();

        assert_eq!(context.id, TenantId::from("acme"));
        let scale = session.palette().current().unwrap();
        assert_eq!(scale.base().to_hex(), "#6366F1");
    }

    #[test]
    fn unknown_tenant_leaves_palette_untouched() {
        let mut session = session_with(&[tenant("acme", "#6366F1")]);
        session.activate(&TenantId::from("acme")).unwrap();

        let err = session.activate(&TenantId::from("ghost")).unwrap_err();
        assert_eq!(err, DirectoryError::NotFound(TenantId::from("ghost")));
        assert_eq!(
            session.palette().current().unwrap().base().to_hex(),
            "#6366F1"
        );
        assert_eq!(session.active().unwrap().id, TenantId::from("acme"));
    }

    #[test]
    fn invalid_brand_color_keeps_last_known_good() {
        let mut session = session_with(&[
            tenant("acme", "#6366F1"),
            tenant("broken", "tomato"),
        ]);
        session.activate(&TenantId::from("acme")).unwrap();
        session.activate(&TenantId::from("broken")).unwrap();

        // The broken tenant is active, but the palette still carries
        // the previous tenant's theme
        assert_eq!(session.active().unwrap().id, TenantId::from("broken"));
        assert_eq!(
            session.palette().current().unwrap().base().to_hex(),
            "#6366F1"
        );
    }

    #[test]
    fn invalid_brand_color_on_first_tenant_leaves_cell_empty() {
        let mut session = session_with(&[tenant("broken", "#FFF")]);
        session.activate(&TenantId::from("broken")).unwrap();
        assert_eq!(session.palette().current(), None);
    }

    #[test]
    fn reactivation_is_keyed_by_tenant_id() {
        let mut session = session_with(&[tenant("acme", "#6366F1")]);
        let updates = session.palette().subscribe();

        session.activate(&TenantId::from("acme")).unwrap();
        session.activate(&TenantId::from("acme")).unwrap();

        assert!(updates.try_recv().is_ok());
        assert!(
            updates.try_recv().is_err(),
            "re-activating the same tenant must not republish"
        );
    }

    #[test]
    fn tenant_switch_replaces_theme_wholesale() {
        let mut session = session_with(&[
            tenant("acme", "#6366F1"),
            tenant("zen", "#0F766E"),
        ]);
        session.activate(&TenantId::from("acme")).unwrap();
        session.activate(&TenantId::from("zen")).unwrap();

        let scale = session.palette().current().unwrap();
        assert_eq!(scale.base().to_hex(), "#0F766E");
        // Every variable reflects the new brand; none leak from the old
        assert_eq!(scale, ColorScale::derive(Rgb::from_hex("#0F766E").unwrap()));
    }
}
