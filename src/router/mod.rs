//! # Router Module
//!
//! Path matching and route resolution. Declarative URL patterns with named
//! bracket placeholders (e.g. `user/(name)`) are compiled once into cached
//! matchers, then tried in registration order against incoming requests.
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Compilation**: at startup each pattern is converted into an anchored
//!    regex with one capture per placeholder. Malformed patterns fail here
//!    with [`ConfigurationError`], never at request time.
//!
//! 2. **Matching**: for each incoming request the table is scanned in
//!    registration order until a route's method rule and pattern both
//!    accept it; the first match wins and its placeholder captures are
//!    returned as parameters.
//!
//! "No route matches" is an expected outcome reported as `None`, not an
//! error; the caller owns not-found handling.

mod core;
mod error;
mod pattern;

pub use core::{MethodRule, ParamVec, Route, RouteMatch, Router, MAX_INLINE_PARAMS};
pub use error::ConfigurationError;
pub use pattern::PathPattern;
