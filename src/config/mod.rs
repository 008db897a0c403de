//! Configuration module
//!
//! Handles the JSON config file (hotkeys, click positions, mouse behavior)
//! and the shared handle that lets the hotkey loop swap a reloaded config
//! atomically while dispatched actions keep their own snapshot.

pub mod settings;

use std::sync::Arc;

use parking_lot::RwLock;

pub use settings::{Config, ConfigError, MouseSettings, TargetRegion};

/// Process-wide configuration handle.
///
/// Reloads replace the inner `Arc` wholesale; readers snapshot it once at
/// dispatch start, so an in-flight action never observes a partial reload.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<Arc<Config>>>,
}

impl ConfigHandle {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    /// Current config; cheap clone of the inner `Arc`
    pub fn snapshot(&self) -> Arc<Config> {
        self.inner.read().clone()
    }

    /// Atomically swap in a new config
    pub fn replace(&self, config: Config) {
        *self.inner.write() = Arc::new(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_outlives_replace() {
        let handle = ConfigHandle::new(Config::default());
        let before = handle.snapshot();

        let mut changed = Config::default();
        changed.mouse_settings.return_to_original = false;
        handle.replace(changed);

        assert!(before.mouse_settings.return_to_original);
        assert!(!handle.snapshot().mouse_settings.return_to_original);
    }
}
