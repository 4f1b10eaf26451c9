//! # Config Module
//!
//! Declarative route-source records and their loader. A route table is a
//! YAML or JSON document of `url`/`controller`/`view`/`format`/`method`
//! records plus application-wide settings; this module only parses. The
//! records are compiled into validated routes when the
//! [`Application`](crate::Application) is built, so malformed patterns
//! surface as [`ConfigurationError`](crate::ConfigurationError) at
//! startup, never at request time.

mod load;
mod types;

pub use load::load_config;
pub use types::{AppConfig, RouteConfig};
