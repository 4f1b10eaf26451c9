use super::error::ConfigurationError;
use super::pattern::PathPattern;
use http::Method;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum number of path parameters before heap allocation.
/// Most route patterns carry at most a handful of placeholders.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the match hot path.
///
/// Param names use `Arc<str>` because they come from the static route table
/// (known at startup), so handing one out per match is an O(1) refcount
/// bump. Values remain `String` as they are per-request data from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Which HTTP verbs a route accepts
///
/// Declared as a standard verb string or the `*` wildcard meaning "any".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodRule {
    /// Wildcard: the route matches every verb
    Any,
    /// The route matches exactly this verb
    Only(Method),
}

const SUPPORTED_METHODS: [Method; 8] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
    Method::OPTIONS,
    Method::HEAD,
    Method::TRACE,
];

impl MethodRule {
    /// Parse a declared method string (`GET`, `post`, `*`, …)
    ///
    /// An empty declaration counts as the wildcard, matching how optional
    /// method attributes behave in declarative route sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnsupportedMethod`] for anything that
    /// is neither a standard verb nor the wildcard.
    pub fn parse(method: &str) -> Result<Self, ConfigurationError> {
        let trimmed = method.trim();
        if trimmed.is_empty() || trimmed == "*" {
            return Ok(MethodRule::Any);
        }
        let upper = trimmed.to_ascii_uppercase();
        SUPPORTED_METHODS
            .iter()
            .find(|m| m.as_str() == upper)
            .map(|m| MethodRule::Only(m.clone()))
            .ok_or_else(|| ConfigurationError::UnsupportedMethod {
                method: method.to_string(),
            })
    }

    /// Whether a concrete request verb satisfies this rule
    #[must_use]
    pub fn accepts(&self, method: &Method) -> bool {
        match self {
            MethodRule::Any => true,
            MethodRule::Only(m) => m == method,
        }
    }
}

impl fmt::Display for MethodRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodRule::Any => write!(f, "*"),
            MethodRule::Only(m) => write!(f, "{}", m),
        }
    }
}

/// One declarative mapping from URL shape + method to a controller/view/format triple
///
/// Constructed once from a declarative source and immutable afterward. The
/// URL pattern is compiled at construction (see [`PathPattern`]); matching
/// reuses the cached matcher for the route's lifetime.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: PathPattern,
    controller: String,
    view: String,
    format: String,
    method: MethodRule,
}

impl Route {
    /// Build a route from declarative attribute values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for a malformed URL pattern or an
    /// unsupported method string. A route that fails here must not be
    /// registered; matching never revisits these checks.
    pub fn new(
        url: &str,
        controller: &str,
        view: &str,
        format: &str,
        method: &str,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            pattern: PathPattern::compile(url)?,
            controller: controller.to_string(),
            view: view.to_string(),
            format: format.to_string(),
            method: MethodRule::parse(method)?,
        })
    }

    /// Answer "does this concrete path match me, and with what parameters?"
    ///
    /// The request verb must satisfy the declared method rule and the path
    /// must have the pattern's shape: literal segments verbatim, each
    /// placeholder capturing one or more non-separator characters. `None`
    /// covers both method and structural mismatches; no-match is an
    /// expected outcome, never an error.
    #[must_use]
    pub fn matches(&self, path: &str, method: &Method) -> Option<ParamVec> {
        if !self.method.accepts(method) {
            return None;
        }
        self.pattern.captures(path)
    }

    /// The URL pattern exactly as declared
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Placeholder names in capture order
    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        self.pattern.param_names()
    }

    /// Controller identifier this route dispatches to
    #[must_use]
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// View identifier rendered for this route
    #[must_use]
    pub fn view(&self) -> &str {
        &self.view
    }

    /// Response format tag (e.g. `json`, `html`)
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Declared method rule
    #[must_use]
    pub fn method(&self) -> &MethodRule {
        &self.method
    }
}

/// Result of successfully matching a request path against the route table
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route (shared with the table, cheap to clone)
    pub route: Arc<Route>,
    /// Path parameters extracted from the URL, in placeholder order
    pub params: ParamVec,
}

impl RouteMatch {
    /// Get an extracted path parameter by placeholder name
    #[inline]
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert the extracted parameters to a `HashMap`
    ///
    /// Note: this allocates; use [`RouteMatch::get_param`] in hot paths.
    #[must_use]
    pub fn params_map(&self) -> HashMap<String, String> {
        self.params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Ordered route table matched first-wins against incoming requests
///
/// Routes are tried in registration order and the **first** structurally-
/// and-method matching route wins. This gives configuration authors
/// deterministic, order-dependent precedence: more specific patterns must
/// be registered before more general ones. There is no specificity scoring.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Arc<Route>>,
}

impl Router {
    /// Build a router from an ordered list of validated routes
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        let routes: Vec<Arc<Route>> = routes.into_iter().map(Arc::new).collect();

        let routes_summary: Vec<String> = routes
            .iter()
            .take(10)
            .map(|r| format!("{} {} -> {}", r.method(), r.pattern(), r.controller()))
            .collect();

        info!(
            routes_count = routes.len(),
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );

        Self { routes }
    }

    /// Match an incoming request against the table
    ///
    /// Linear scan in registration order; returns the first route whose
    /// method rule and pattern both accept the request, together with its
    /// extracted parameters. `None` means no route matches; the caller is
    /// responsible for its own not-found handling; nothing is produced
    /// automatically here.
    #[must_use]
    pub fn route(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        debug!(method = %method, path = %path, "Route match attempt");

        for route in &self.routes {
            if let Some(params) = route.matches(path, method) {
                info!(
                    method = %method,
                    path = %path,
                    route_pattern = %route.pattern(),
                    controller = %route.controller(),
                    params = ?params,
                    "Route matched"
                );
                return Some(RouteMatch {
                    route: Arc::clone(route),
                    params,
                });
            }
        }

        warn!(method = %method, path = %path, "No route matched");
        None
    }

    /// The registered routes, in registration order
    #[must_use]
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Number of registered routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Print all registered routes to stdout
    ///
    /// Useful for verifying that a declarative source loaded correctly.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.routes.len());
        for route in &self.routes {
            println!(
                "[route] {} {} -> {} (view={}, format={})",
                route.method(),
                route.pattern(),
                route.controller(),
                route.view(),
                route.format()
            );
        }
    }
}
