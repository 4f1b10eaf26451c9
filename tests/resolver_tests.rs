mod common;

use common::RecordingTransport;
use corridor::{
    AppConfig, Application, JsonRenderer, RenderError, RenderStrategy, Response, Runnable,
    ViewResolver,
};

fn empty_app() -> Application {
    let config: AppConfig = serde_yaml::from_str("routes: []").expect("parse config");
    Application::from_config(config).expect("build application")
}

/// Strategy double that checks template existence the way a file-based
/// template engine would, without rendering anything.
struct TemplateProbe;

impl RenderStrategy for TemplateProbe {
    fn render(
        &self,
        application: &Application,
        response: &mut Response,
    ) -> Result<(), RenderError> {
        // A real template strategy resolves the view's template against
        // the application's templates directory before rendering.
        let template = response.view().template().to_string();
        let exists = application
            .templates_dir()
            .map(|dir| dir.join(&template).exists())
            .unwrap_or(false);
        if !exists {
            return Err(RenderError::TemplateNotFound(template));
        }
        Ok(())
    }
}

struct ExplodingStrategy;

impl RenderStrategy for ExplodingStrategy {
    fn render(&self, _app: &Application, _response: &mut Response) -> Result<(), RenderError> {
        Err(RenderError::Render("data source unavailable".to_string()))
    }
}

#[test]
fn test_json_renderer_serializes_view_data() {
    common::init_tracing();
    let app = empty_app();
    let mut response = Response::new("application/json", "user.html");
    response.view_mut().set("name", "alice".into());

    let mut resolver = ViewResolver::new(&app, &mut response, JsonRenderer);
    resolver.run();

    assert_eq!(response.status().map(|s| s.id()), Some(200));
    let body: serde_json::Value =
        serde_json::from_str(response.body().expect("body set")).expect("valid json");
    assert_eq!(body["name"], "alice");
}

#[test]
fn test_json_renderer_keeps_existing_status() {
    let app = empty_app();
    let mut response = Response::new("application/json", "user.html");
    response.set_status(201).expect("known code");

    let mut resolver = ViewResolver::new(&app, &mut response, JsonRenderer);
    resolver.run();

    assert_eq!(response.status().map(|s| s.id()), Some(201));
}

#[test]
fn test_missing_template_recovers_as_not_found() {
    let app = empty_app();
    let mut response = Response::new("text/html", "nowhere.html");

    let mut resolver = ViewResolver::new(&app, &mut response, TemplateProbe);
    resolver.run();

    assert_eq!(response.status().map(|s| s.id()), Some(404));
    assert!(response.body().expect("error body").contains("nowhere.html"));
}

#[test]
fn test_render_failure_recovers_as_server_error() {
    let app = empty_app();
    let mut response = Response::new("text/html", "page.html");

    let mut resolver = ViewResolver::new(&app, &mut response, ExplodingStrategy);
    resolver.run();

    assert_eq!(response.status().map(|s| s.id()), Some(500));
    assert!(response
        .body()
        .expect("error body")
        .contains("data source unavailable"));
}

#[test]
fn test_recovery_body_is_json_for_json_responses() {
    let app = empty_app();
    let mut response = Response::new("application/json", "page.html");

    let mut resolver = ViewResolver::new(&app, &mut response, ExplodingStrategy);
    resolver.run();

    let body: serde_json::Value =
        serde_json::from_str(response.body().expect("error body")).expect("valid json");
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("data source unavailable"));
}

#[test]
fn test_recovered_response_still_commits() {
    let app = empty_app();
    let mut response = Response::new("text/html", "nowhere.html");

    let mut resolver = ViewResolver::new(&app, &mut response, TemplateProbe);
    resolver.run();

    let mut transport = RecordingTransport::new();
    response.commit(&mut transport).expect("commit");
    assert_eq!(transport.statuses(), vec![404]);
    assert_eq!(transport.bodies().len(), 1);
}

#[test]
fn test_template_found_renders_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("page.html"), "<html></html>").expect("write template");

    let config = AppConfig {
        default_format: "html".to_string(),
        templates_dir: Some(dir.path().to_path_buf()),
        routes: Vec::new(),
    };
    let app = Application::from_config(config).expect("build application");
    let mut response = Response::new("text/html", "page.html");

    let mut resolver = ViewResolver::new(&app, &mut response, TemplateProbe);
    resolver.run();

    // Strategy succeeded: no recovery status was forced onto the response.
    assert!(response.status().is_none());
}
