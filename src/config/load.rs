use super::types::AppConfig;

/// Load an application config from a YAML or JSON file
///
/// The format is picked by file extension: `.yaml`/`.yml` parse as YAML,
/// anything else as JSON. Parsing yields the raw declarative records;
/// compiling them into validated routes happens when an
/// [`Application`](crate::Application) is built from the config.
///
/// # Errors
///
/// Fails when the file cannot be read or does not parse as the expected
/// format.
pub fn load_config(file_path: &str) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(file_path)?;
    let config: AppConfig = if file_path.ends_with(".yaml") || file_path.ends_with(".yml") {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::super::types::AppConfig;

    #[test]
    fn test_parse_route_table() {
        let cfg: AppConfig = serde_yaml::from_str(
            r#"
default_format: json
routes:
  - url: user/(name)
    controller: UserController
    view: user
    method: GET
  - url: about
    controller: PageController
    view: about
"#,
        )
        .expect("parse");
        assert_eq!(cfg.default_format, "json");
        assert_eq!(cfg.routes.len(), 2);
        assert_eq!(cfg.routes[0].method, "GET");
        assert_eq!(cfg.routes[1].method, "*");
    }
}
