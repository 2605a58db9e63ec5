#![forbid(unsafe_code)]

//! Single-writer state cell for the currently published color scale.
//!
//! There is exactly one writer path ([`ActivePalette::publish`]) and any
//! number of readers. Readers only ever observe a fully formed scale:
//! the cell swaps the whole value under a write lock, never entry by
//! entry. Until the first tenant publishes, the cell is empty and
//! consumers fall back to whatever static styling they carry.
//!
//! The cell is an explicitly owned value, handed to whoever needs it;
//! there is no ambient global behind it.

use std::sync::mpsc;
use std::sync::{Mutex, RwLock};

use crate::scale::ColorScale;

/// Holder of the most recently published scale for one process.
///
/// Lives for the process lifetime once created; there is no teardown,
/// only replacement.
#[derive(Debug, Default)]
pub struct ActivePalette {
    current: RwLock<Option<ColorScale>>,
    subscribers: Mutex<Vec<mpsc::Sender<ColorScale>>>,
}

impl ActivePalette {
    /// Create an empty cell (no scale published yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active scale wholesale and notify subscribers.
    ///
    /// Last publish wins. Publishing a scale equal to the current one
    /// is a no-op beyond the comparison itself; subscribers are not
    /// re-notified. There is no rollback: callers that fail to derive a
    /// scale simply never reach this method, leaving the previous scale
    /// in effect.
    pub fn publish(&self, scale: ColorScale) {
        {
            let mut current = self.current.write().expect("ActivePalette lock poisoned");
            if *current == Some(scale) {
                #[cfg(feature = "tracing")]
                tracing::debug!(base = %scale.base().to_hex(), "palette unchanged, publish skipped");
                return;
            }
            *current = Some(scale);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(base = %scale.base().to_hex(), "palette published");

        let mut subscribers = self
            .subscribers
            .lock()
            .expect("ActivePalette lock poisoned");
        subscribers.retain(|sender| sender.send(scale).is_ok());
    }

    /// Snapshot of the current scale.
    ///
    /// `None` until the first publish.
    #[must_use]
    pub fn current(&self) -> Option<ColorScale> {
        *self.current.read().expect("ActivePalette lock poisoned")
    }

    /// Register a subscriber that receives every subsequent publish.
    ///
    /// If a scale is already active it is delivered immediately, so a
    /// late subscriber starts from the current state rather than
    /// waiting for the next tenant switch. Disconnected receivers are
    /// pruned on the next publish.
    #[must_use]
    pub fn subscribe(&self) -> mpsc::Receiver<ColorScale> {
        let (sender, receiver) = mpsc::channel();
        if let Some(scale) = self.current() {
            let _ = sender.send(scale);
        }
        self.subscribers
            .lock()
            .expect("ActivePalette lock poisoned")
            .push(sender);
        receiver
    }

    /// Presentation variables of the active scale.
    ///
    /// Empty before the first publish.
    #[must_use]
    pub fn variables(&self) -> Vec<(String, String)> {
        self.current()
            .map(ColorScale::css_variables)
            .unwrap_or_default()
    }
}
