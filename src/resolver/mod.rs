//! # Resolver Module
//!
//! The abstraction that turns a matched route plus application state into
//! response content, behind a single [`Runnable::run`] entry point the
//! orchestrator invokes without knowing the rendering technology.
//!
//! A [`ViewResolver`] binds exactly one [`Application`](crate::Application)
//! and one [`Response`](crate::Response) per request and delegates content
//! production to a [`RenderStrategy`]. Request-specific strategy failures
//! (missing template, render error) are recovered into an error status and
//! body on the bound response; they never escape `run()`.
//!
//! [`JsonRenderer`] is the shipped concrete strategy; template-engine
//! strategies live outside this crate and plug in through the same seam.

mod core;
mod json;

pub use core::{RenderError, RenderStrategy, Runnable, ViewResolver};
pub use json::JsonRenderer;
