use super::core::{RenderError, RenderStrategy};
use crate::application::Application;
use crate::response::Response;

/// Renders the bound view's data map as a JSON body
///
/// The shipped concrete strategy: serializes whatever the controller
/// assigned into the view straight to JSON, with no template file
/// involved. Defaults the status to 200 when the handler set none.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl RenderStrategy for JsonRenderer {
    fn render(
        &self,
        _application: &Application,
        response: &mut Response,
    ) -> Result<(), RenderError> {
        let body = serde_json::to_string(response.view().data())
            .map_err(|err| RenderError::Render(err.to_string()))?;
        response.set_body(body);

        if response.status().is_none() {
            response
                .set_status(200)
                .map_err(|err| RenderError::Render(err.to_string()))?;
        }
        Ok(())
    }
}
