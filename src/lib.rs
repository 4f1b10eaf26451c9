//! # corridor
//!
//! **corridor** is the dispatch core of a request-handling framework:
//! declarative route matching with named path parameters, transport-agnostic
//! response accumulation with a single-commit guarantee, and a pluggable
//! view-resolution seam that turns a matched route into response content.
//!
//! ## Overview
//!
//! Routes are declared as records (`url`, `controller`, `view`, `format`,
//! `method`) in YAML or JSON. Patterns carry bracket placeholders like
//! `user/(name)` that are compiled once at startup into cached matchers;
//! a malformed pattern fails loudly at construction instead of silently
//! matching nothing. At request time the table is scanned in registration
//! order and the first route whose method rule and pattern both accept the
//! request wins, yielding the extracted parameters.
//!
//! The crate deliberately stops at three seams:
//!
//! - the **orchestrator** (controller loop) that owns the request
//!   lifecycle and invokes [`Runnable`] components lives outside;
//! - concrete **templating engines** plug in behind [`RenderStrategy`]
//!   ([`JsonRenderer`] ships as the template-free strategy);
//! - the **transport** (sockets, header transmission) sits behind the
//!   [`Transport`] trait, which [`Response::commit`] writes through
//!   exactly once.
//!
//! ## Architecture
//!
//! - [`config`] - declarative route-source records and the YAML/JSON loader
//! - [`router`] - pattern compilation, first-match-wins route resolution
//! - [`application`] - the read-only registry shared across requests
//! - [`response`] - status/header/body accumulation and the commit contract
//! - [`resolver`] - the `Runnable`/`ViewResolver` rendering seam
//!
//! ## Request Handling Flow
//!
//! An orchestrator drives one request through the core like this:
//!
//! 1. match the incoming path and verb against the table
//!    ([`Application::resolve`]), obtaining the route's
//!    controller/view/format triple and its extracted parameters;
//! 2. construct a [`Response`] seeded with the content type and the
//!    route's template identity;
//! 3. run the controller, which populates the response's view data;
//! 4. bind a [`ViewResolver`] to the application and the response and
//!    invoke it through [`Runnable::run`];
//! 5. [`Response::commit`] the result through the transport.
//!
//! An unmatched request produces nothing automatically; the orchestrator
//! constructs and commits its own not-found response.
//!
//! ## Quick Start
//!
//! ```no_run
//! use corridor::{Application, JsonRenderer, Response, Runnable, ViewResolver, WireTransport};
//! use http::Method;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = corridor::load_config("routes.yaml")?;
//! let app = Application::from_config(config)?;
//!
//! if let Some(matched) = app.resolve(&Method::GET, "user/alice") {
//!     let mut response = Response::new("application/json", matched.route.view());
//!     let name = matched.get_param("name").unwrap_or_default();
//!     response.view_mut().set("name", name.into());
//!
//!     let mut resolver = ViewResolver::new(&app, &mut response, JsonRenderer);
//!     resolver.run();
//!
//!     let mut transport = WireTransport::new(std::io::stdout());
//!     response.commit(&mut transport)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! There is no intra-request concurrency in this core. The route table and
//! [`Application`] are immutable after startup and safely shared by
//! reference across simultaneously handled requests; each request gets its
//! own match result, [`Response`], and resolver, so nothing here locks.
//! Only `commit()` touches I/O.

pub mod application;
pub mod config;
pub mod resolver;
pub mod response;
pub mod router;

pub use application::Application;
pub use config::{load_config, AppConfig, RouteConfig};
pub use resolver::{JsonRenderer, RenderError, RenderStrategy, Runnable, ViewResolver};
pub use response::{
    CommitError, Response, Status, Transport, UnknownStatusError, View, WireTransport,
};
pub use router::{
    ConfigurationError, MethodRule, ParamVec, PathPattern, Route, RouteMatch, Router,
};
