use super::core::ParamVec;
use super::error::ConfigurationError;
use regex::Regex;
use std::sync::Arc;

/// A URL pattern compiled once at route construction
///
/// Transforms declarative patterns like `user/(name)` into an anchored regex
/// where each bracketed placeholder becomes a capture accepting one or more
/// non-separator characters, e.g. `^user/([^/]+)$`. Literal text is escaped
/// so it matches verbatim, and the placeholder names are kept in capture
/// order for parameter extraction.
///
/// A single leading `/` is ignored on both the pattern and candidate paths,
/// so `user/(name)` and `/user/(name)` declare the same shape.
///
/// Compilation happens exactly once; matching reuses the cached regex.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    regex: Regex,
    param_names: Vec<Arc<str>>,
}

impl PathPattern {
    /// Compile a URL pattern, validating its placeholders
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for unbalanced delimiters, empty or
    /// invalid placeholder names, or a name that appears twice. Validation
    /// is mandatory at construction so a bad declaration cannot silently
    /// match nothing at request time.
    pub fn compile(pattern: &str) -> Result<Self, ConfigurationError> {
        let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);

        let mut compiled = String::with_capacity(trimmed.len() + 5);
        compiled.push('^');
        let mut param_names: Vec<Arc<str>> = Vec::new();
        let mut literal = String::new();
        let mut placeholder: Option<String> = None;

        for ch in trimmed.chars() {
            match ch {
                '(' => {
                    if placeholder.is_some() {
                        return Err(ConfigurationError::UnbalancedPattern {
                            pattern: pattern.to_string(),
                        });
                    }
                    compiled.push_str(&regex::escape(&literal));
                    literal.clear();
                    placeholder = Some(String::new());
                }
                ')' => {
                    let name = match placeholder.take() {
                        Some(name) => name,
                        None => {
                            return Err(ConfigurationError::UnbalancedPattern {
                                pattern: pattern.to_string(),
                            })
                        }
                    };
                    validate_name(pattern, &name, &param_names)?;
                    compiled.push_str("([^/]+)");
                    param_names.push(Arc::from(name.as_str()));
                }
                _ => match placeholder.as_mut() {
                    Some(name) => name.push(ch),
                    None => literal.push(ch),
                },
            }
        }

        if placeholder.is_some() {
            return Err(ConfigurationError::UnbalancedPattern {
                pattern: pattern.to_string(),
            });
        }
        compiled.push_str(&regex::escape(&literal));
        compiled.push('$');

        // Escaped literals and validated names cannot produce an invalid
        // regex; treat a compile failure as a malformed pattern anyway.
        let regex = Regex::new(&compiled).map_err(|_| ConfigurationError::UnbalancedPattern {
            pattern: pattern.to_string(),
        })?;

        Ok(Self {
            raw: pattern.to_string(),
            regex,
            param_names,
        })
    }

    /// The pattern string exactly as declared
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in capture order
    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }

    /// Match a candidate path, extracting placeholder values
    ///
    /// Returns `None` when the path does not have this pattern's shape;
    /// on a match every placeholder is bound to its captured substring,
    /// decoded as a plain string with no type coercion.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<ParamVec> {
        let candidate = path.strip_prefix('/').unwrap_or(path);
        let caps = self.regex.captures(candidate)?;

        let mut params = ParamVec::new();
        for (idx, name) in self.param_names.iter().enumerate() {
            if let Some(value) = caps.get(idx + 1) {
                params.push((Arc::clone(name), value.as_str().to_string()));
            }
        }
        Some(params)
    }
}

fn validate_name(
    pattern: &str,
    name: &str,
    seen: &[Arc<str>],
) -> Result<(), ConfigurationError> {
    if name.is_empty() {
        return Err(ConfigurationError::EmptyPlaceholder {
            pattern: pattern.to_string(),
        });
    }

    let mut chars = name.chars();
    let head_ok = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    if !head_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigurationError::InvalidPlaceholder {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }

    if seen.iter().any(|existing| existing.as_ref() == name) {
        return Err(ConfigurationError::DuplicatePlaceholder {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }

    Ok(())
}
