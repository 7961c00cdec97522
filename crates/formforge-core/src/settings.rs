//! Settings for the formforge application core.
//!
//! This module provides the [`Settings`] struct, which holds application
//! configuration, and [`LazySettings`], a globally-accessible,
//! lazily-initialized settings instance.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// The complete set of application settings.
///
/// # Examples
///
/// ```
/// use formforge_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
    /// The public base URL used to build share links
    /// (e.g. `https://forms.example.com`).
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl Settings {
    /// Builds the public share URL for a form's share token.
    ///
    /// # Examples
    ///
    /// ```
    /// use formforge_core::settings::Settings;
    ///
    /// let settings = Settings::default();
    /// let url = settings.share_url("abc-123");
    /// assert_eq!(url, "http://localhost:3000/submit/abc-123");
    /// ```
    pub fn share_url(&self, token: &str) -> String {
        format!("{}/submit/{token}", self.base_url.trim_end_matches('/'))
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup to set the
/// settings, then use [`get`](LazySettings::get) to access them. If
/// [`get`](LazySettings::get) is called before configuration, defaults are
/// installed.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings, installing defaults
    /// if none were configured.
    pub fn get(&self) -> &Settings {
        self.inner.get_or_init(Settings::default)
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.debug);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_share_url_strips_trailing_slash() {
        let settings = Settings {
            base_url: "https://forms.example.com/".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.share_url("tok"),
            "https://forms.example.com/submit/tok"
        );
    }

    #[test]
    fn test_lazy_settings_defaults_when_unconfigured() {
        let lazy = LazySettings::new();
        assert!(lazy.get().debug);
    }

    #[test]
    fn test_lazy_settings_configure() {
        let lazy = LazySettings::new();
        lazy.configure(Settings {
            debug: false,
            ..Settings::default()
        });
        assert!(!lazy.get().debug);
    }
}
