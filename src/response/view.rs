use serde_json::Value;
use std::collections::HashMap;

/// Template identity plus the data a rendering strategy consumes
///
/// Owned by a [`Response`](super::Response); the caller populates the data
/// map before the resolver renders it into the response body.
#[derive(Debug, Clone, Default)]
pub struct View {
    template: String,
    data: HashMap<String, Value>,
}

impl View {
    /// Create a view bound to a template identifier
    #[must_use]
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
            data: HashMap::new(),
        }
    }

    /// The template identifier this view renders
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Point the view at a different template
    pub fn set_template(&mut self, template: &str) {
        self.template = template.to_string();
    }

    /// All data assigned so far
    #[must_use]
    pub fn data(&self) -> &HashMap<String, Value> {
        &self.data
    }

    /// Assign a value under a key (last write wins)
    pub fn set(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
    }

    /// Read back a single assigned value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}
