use crate::router::{ConfigurationError, Route};
use serde::Deserialize;
use std::path::PathBuf;

fn default_format() -> String {
    "html".to_string()
}

fn default_method() -> String {
    "*".to_string()
}

/// One declarative route record
///
/// Mirrors the attribute set of the route source format: a URL pattern
/// with bracket placeholders, the controller and view identifiers it maps
/// to, a response format tag, and an HTTP verb (or `*` for any).
#[derive(Debug, Clone, Deserialize)]
pub struct RouteConfig {
    /// URL pattern, e.g. `user/(name)`
    pub url: String,
    /// Controller identifier
    pub controller: String,
    /// View identifier
    pub view: String,
    /// Response format tag (defaults to `html`)
    #[serde(default = "default_format")]
    pub format: String,
    /// HTTP verb or `*` wildcard (defaults to `*`)
    #[serde(default = "default_method")]
    pub method: String,
}

impl RouteConfig {
    /// Compile this record into a validated [`Route`]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the pattern or method is
    /// malformed; the record must not be registered.
    pub fn build(&self) -> Result<Route, ConfigurationError> {
        Route::new(
            &self.url,
            &self.controller,
            &self.view,
            &self.format,
            &self.method,
        )
    }
}

/// Application-wide declarative settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Format applied when a route declares none explicitly
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Directory template-based rendering strategies resolve files against
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
    /// Ordered route declarations; order is matching precedence
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}
