//! Global theme registry
//!
//! The registry is the process-wide register of named themes plus the
//! current selection. Widgets and the build plugin's driver read the current
//! theme through it; the ordering core itself never does, since it receives
//! the breakpoint table as an explicit argument.

use std::sync::{Arc, Mutex, OnceLock, RwLock};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::ThemeError;
use crate::theme::Theme;

/// Global registry instance
static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

/// Global change callback - set by the app layer to react to theme switches
static CHANGE_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Name the implicit default theme is registered under.
pub const DEFAULT_THEME: &str = "default";

/// Set the change callback function
///
/// Called whenever the current theme switches or its content is replaced,
/// so the embedding layer can trigger restyling.
pub fn set_change_callback(callback: fn()) {
    *CHANGE_CALLBACK.lock().unwrap() = Some(callback);
}

/// Trigger the registered change callback
fn trigger_change() {
    if let Some(callback) = *CHANGE_CALLBACK.lock().unwrap() {
        callback();
    }
}

/// Process-wide register of named themes.
pub struct ThemeRegistry {
    /// Registered themes by name
    themes: RwLock<FxHashMap<String, Arc<Theme>>>,
    /// Name of the current theme
    current: RwLock<String>,
}

impl ThemeRegistry {
    fn new() -> Self {
        let mut themes = FxHashMap::default();
        themes.insert(DEFAULT_THEME.to_owned(), Arc::new(Theme::default()));
        Self {
            themes: RwLock::new(themes),
            current: RwLock::new(DEFAULT_THEME.to_owned()),
        }
    }

    /// Get the global registry, initializing it with an empty default theme
    /// on first use.
    pub fn get() -> &'static ThemeRegistry {
        REGISTRY.get_or_init(ThemeRegistry::new)
    }

    /// Register (or replace) a theme under a name.
    ///
    /// Replacing the current theme's content notifies change listeners.
    pub fn set(&self, name: impl Into<String>, theme: Theme) {
        let name = name.into();
        debug!(theme = %name, "registering theme");
        self.themes
            .write()
            .unwrap()
            .insert(name.clone(), Arc::new(theme));
        if *self.current.read().unwrap() == name {
            trigger_change();
        }
    }

    /// Switch the current theme.
    pub fn set_current(&self, name: &str) -> Result<(), ThemeError> {
        if !self.themes.read().unwrap().contains_key(name) {
            return Err(ThemeError::UnknownTheme(name.to_owned()));
        }
        let mut current = self.current.write().unwrap();
        if *current != name {
            debug!(from = %*current, to = %name, "switching current theme");
            *current = name.to_owned();
            drop(current);
            trigger_change();
        }
        Ok(())
    }

    /// The current theme.
    pub fn current(&self) -> Arc<Theme> {
        let name = self.current.read().unwrap();
        self.themes
            .read()
            .unwrap()
            .get(&*name)
            .cloned()
            // The current name always points at a registered theme; fall
            // back to an empty theme rather than poisoning readers.
            .unwrap_or_default()
    }

    /// The current theme's name.
    pub fn current_name(&self) -> String {
        self.current.read().unwrap().clone()
    }

    /// A registered theme by name.
    pub fn theme(&self, name: &str) -> Option<Arc<Theme>> {
        self.themes.read().unwrap().get(name).cloned()
    }

    /// Registered theme names, unordered.
    pub fn names(&self) -> Vec<String> {
        self.themes.read().unwrap().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use vesti_spec::{Scalar, Slice};

    use super::{ThemeRegistry, DEFAULT_THEME};
    use crate::theme::Theme;

    // Tests build private instances instead of touching the global
    // register, which is shared across the test binary.

    #[test]
    fn test_starts_on_empty_default() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.current_name(), DEFAULT_THEME);
        assert!(registry.current().colors.is_empty());
    }

    #[test]
    fn test_set_and_switch() {
        let registry = ThemeRegistry::new();
        registry.set(
            "acme",
            Theme::from_json_str(r##"{ "colors": { "primary": "#06f" } }"##).unwrap(),
        );
        registry.set_current("acme").unwrap();

        assert_eq!(registry.current_name(), "acme");
        let current = registry.current();
        assert_eq!(
            current.resolve(Slice::Colors, "primary"),
            Some(&Scalar::from("#06f"))
        );
    }

    #[test]
    fn test_unknown_current_is_rejected() {
        let registry = ThemeRegistry::new();
        assert!(registry.set_current("missing").is_err());
        assert_eq!(registry.current_name(), DEFAULT_THEME);
    }
}
