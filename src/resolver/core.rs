use crate::application::Application;
use crate::response::Response;
use std::fmt;
use tracing::warn;

/// One-method execution contract
///
/// The orchestrator invokes `run()` exactly once per request on anything it
/// schedules, without knowing the concrete type behind it. Implementations
/// recover their own request-specific failures; anything that escapes
/// `run()` is the orchestrator's to handle.
pub trait Runnable {
    /// Execute this component's logic
    fn run(&mut self);
}

/// Rendering failure inside a concrete strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The template backing the view does not exist
    TemplateNotFound(String),
    /// Content production failed
    Render(String),
}

impl RenderError {
    /// The HTTP status this failure is recovered as
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            RenderError::TemplateNotFound(_) => 404,
            RenderError::Render(_) => 500,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateNotFound(template) => {
                write!(f, "template '{}' not found", template)
            }
            RenderError::Render(message) => write!(f, "rendering failed: {}", message),
        }
    }
}

impl std::error::Error for RenderError {}

/// The seam a concrete rendering technology implements
///
/// A strategy reads the matched route's output from the application and the
/// response's view, then fills in the response (body, headers, status) by
/// whatever mechanism it implements. Strategies hold no per-request state
/// of their own; the collaborators arrive explicitly on every call.
pub trait RenderStrategy {
    /// Produce response content from the bound collaborators
    ///
    /// # Errors
    ///
    /// Request-specific failures return [`RenderError`] and are recovered
    /// into an error status and body by the resolver; they never reach the
    /// orchestrator.
    fn render(&self, application: &Application, response: &mut Response)
        -> Result<(), RenderError>;
}

/// Turns a matched route into response content through a rendering strategy
///
/// Binds exactly one [`Application`] (shared, read-only) and one
/// [`Response`] (exclusively borrowed) for the lifetime of the resolver,
/// which never outlives its request. The orchestrator constructs it right
/// before invocation and drops it after [`Runnable::run`] returns.
pub struct ViewResolver<'a, S: RenderStrategy> {
    application: &'a Application,
    response: &'a mut Response,
    strategy: S,
}

impl<'a, S: RenderStrategy> ViewResolver<'a, S> {
    /// Bind the collaborators and the strategy that renders through them
    pub fn new(application: &'a Application, response: &'a mut Response, strategy: S) -> Self {
        Self {
            application,
            response,
            strategy,
        }
    }
}

impl<S: RenderStrategy> Runnable for ViewResolver<'_, S> {
    /// Render once, recovering request-specific failures into the response
    ///
    /// On [`RenderError`] the bound response gets the error's status code
    /// and an error body (JSON-shaped when the response's content type is
    /// JSON, plain text otherwise) instead of the failure escaping `run()`.
    fn run(&mut self) {
        if let Err(err) = self.strategy.render(self.application, self.response) {
            warn!(
                error = %err,
                template = self.response.view().template(),
                "Render failed, recovering into error response"
            );

            if let Err(status_err) = self.response.set_status(err.status()) {
                warn!(error = %status_err, "Recovery status rejected, leaving status unset");
            }

            let is_json = self
                .response
                .header("Content-Type")
                .is_some_and(|ct| ct.contains("json"));
            if is_json {
                self.response
                    .set_body(serde_json::json!({ "error": err.to_string() }).to_string());
            } else {
                self.response.set_body(err.to_string());
            }
        }
    }
}
