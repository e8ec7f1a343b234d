//! Thread-safe settings caching with arc-swap for lock-free reads.

use crate::loader::{ConfigError, SettingsLoader};
use crate::schema::Settings;
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Thread-safe settings cache using arc-swap for lock-free reads.
pub struct SettingsCache {
    settings: ArcSwap<Settings>,
}

impl SettingsCache {
    /// Creates a new settings cache with the given initial settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: ArcSwap::from_pointee(settings),
        }
    }

    /// Gets the current settings.
    pub fn get(&self) -> Arc<Settings> {
        self.settings.load_full()
    }

    /// Updates the settings atomically.
    pub fn update(&self, settings: Settings) {
        self.settings.store(Arc::new(settings));
    }

    /// Applies `change` to a copy of the current settings and stores the result.
    pub fn modify<F>(&self, change: F)
    where
        F: Fn(&mut Settings),
    {
        self.settings.rcu(|current| {
            let mut next = Settings::clone(current);
            change(&mut next);
            next
        });
    }

    /// Re-reads `path` and swaps the result in. The cache is unchanged on error.
    pub fn reload(&self, path: &Path) -> Result<Arc<Settings>, ConfigError> {
        let settings = SettingsLoader::load_settings(path)?;
        debug!(path = %path.display(), "Reloaded settings");
        self.update(settings);
        Ok(self.get())
    }
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
