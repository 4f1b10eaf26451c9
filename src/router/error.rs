use std::fmt;

/// Route declaration error
///
/// Returned when a declarative route record cannot be compiled into a
/// usable [`Route`](super::Route). Detected at construction time so a bad
/// declaration aborts startup instead of silently matching nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Placeholder delimiters in the URL pattern are unbalanced
    ///
    /// Every `(` must have a matching `)` and placeholders cannot nest.
    UnbalancedPattern {
        /// The offending URL pattern
        pattern: String,
    },
    /// A placeholder has no name (`()`)
    EmptyPlaceholder {
        /// The offending URL pattern
        pattern: String,
    },
    /// A placeholder name cannot form a valid capture group
    ///
    /// Names must start with a letter or underscore and contain only
    /// ASCII letters, digits, and underscores.
    InvalidPlaceholder {
        /// The offending URL pattern
        pattern: String,
        /// The rejected placeholder name
        name: String,
    },
    /// The same placeholder name appears twice in one pattern
    DuplicatePlaceholder {
        /// The offending URL pattern
        pattern: String,
        /// The repeated placeholder name
        name: String,
    },
    /// The route's method is neither a standard HTTP verb nor the wildcard
    UnsupportedMethod {
        /// The rejected method string
        method: String,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::UnbalancedPattern { pattern } => {
                write!(
                    f,
                    "Route configuration error: unbalanced placeholder delimiters in URL pattern '{}'",
                    pattern
                )
            }
            ConfigurationError::EmptyPlaceholder { pattern } => {
                write!(
                    f,
                    "Route configuration error: empty placeholder in URL pattern '{}'",
                    pattern
                )
            }
            ConfigurationError::InvalidPlaceholder { pattern, name } => {
                write!(
                    f,
                    "Route configuration error: placeholder '({})' in URL pattern '{}' is not a valid capture name. \
                    Names must start with a letter or underscore and contain only ASCII letters, digits, and underscores.",
                    name, pattern
                )
            }
            ConfigurationError::DuplicatePlaceholder { pattern, name } => {
                write!(
                    f,
                    "Route configuration error: placeholder '({})' appears more than once in URL pattern '{}'",
                    name, pattern
                )
            }
            ConfigurationError::UnsupportedMethod { method } => {
                write!(
                    f,
                    "Route configuration error: '{}' is not a standard HTTP verb or the '*' wildcard",
                    method
                )
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
