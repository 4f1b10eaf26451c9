use http::StatusCode;
use std::fmt;

/// Unknown HTTP status code error
///
/// Returned by [`Status::new`] when the numeric code has no entry in the
/// status registry. Recoverable: reject the code and pick a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatusError {
    /// The rejected numeric code
    pub code: u16,
}

impl fmt::Display for UnknownStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown HTTP status code {}", self.code)
    }
}

impl std::error::Error for UnknownStatusError {}

/// HTTP status value object pairing a numeric code with its reason phrase
///
/// Only codes with a canonical reason phrase in the registry are
/// representable, so a `Status` always prints as e.g. `404 Not Found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    code: StatusCode,
    reason: &'static str,
}

impl Status {
    /// Look up a numeric code in the status registry
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStatusError`] when the code is outside 100–999 or
    /// has no canonical reason phrase.
    pub fn new(code: u16) -> Result<Self, UnknownStatusError> {
        let status = StatusCode::from_u16(code).map_err(|_| UnknownStatusError { code })?;
        let reason = status
            .canonical_reason()
            .ok_or(UnknownStatusError { code })?;
        Ok(Self {
            code: status,
            reason,
        })
    }

    /// The numeric code (e.g. `404`)
    #[must_use]
    pub fn id(&self) -> u16 {
        self.code.as_u16()
    }

    /// The canonical reason phrase (e.g. `"Not Found"`)
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id(), self.reason)
    }
}
