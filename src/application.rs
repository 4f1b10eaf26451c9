//! Read-only application registry shared across requests.
//!
//! The [`Application`] owns the routing table plus the app-wide settings
//! rendering strategies consult. Nothing in it mutates after construction,
//! so a single instance is safely shared by reference across all
//! simultaneously handled requests: no locking, no interior mutability.

use crate::config::AppConfig;
use crate::router::{ConfigurationError, RouteMatch, Router};
use http::Method;
use std::path::{Path, PathBuf};

/// Route registry and app-wide settings, immutable after startup
#[derive(Debug, Clone)]
pub struct Application {
    router: Router,
    default_format: String,
    templates_dir: Option<PathBuf>,
}

impl Application {
    /// Assemble an application from already-built parts
    #[must_use]
    pub fn new(router: Router, default_format: &str, templates_dir: Option<PathBuf>) -> Self {
        Self {
            router,
            default_format: default_format.to_string(),
            templates_dir,
        }
    }

    /// Compile a declarative config into a running application
    ///
    /// Routes are built in declaration order, which is also their matching
    /// precedence.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] encountered; a config with
    /// any malformed route is rejected wholesale rather than registered
    /// partially.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigurationError> {
        let routes = config
            .routes
            .iter()
            .map(|record| record.build())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(
            Router::new(routes),
            &config.default_format,
            config.templates_dir,
        ))
    }

    /// Match an incoming request against the registered routes
    ///
    /// First-registered match wins; `None` means the caller owns not-found
    /// handling.
    #[must_use]
    pub fn resolve(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        self.router.route(method, path)
    }

    /// The routing table
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Format applied when a route declares none explicitly
    #[must_use]
    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    /// Directory template-based strategies resolve files against
    #[must_use]
    pub fn templates_dir(&self) -> Option<&Path> {
        self.templates_dir.as_deref()
    }
}
