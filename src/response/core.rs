use super::status::{Status, UnknownStatusError};
use super::transport::Transport;
use super::view::View;
use std::collections::HashMap;
use std::fmt;
use std::io;
use tracing::{debug, warn};

/// Response commit error
#[derive(Debug)]
pub enum CommitError {
    /// `commit()` was called a second time on the same response
    ///
    /// Committing is a one-shot act; repeating it would re-send headers or
    /// duplicate body content depending on transport state. This fails
    /// fast rather than silently repeating side effects; callers that
    /// prefer to ignore a stray second commit can match on this variant.
    AlreadyCommitted,
    /// The transport failed while writing
    Transport(io::Error),
}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitError::AlreadyCommitted => {
                write!(f, "response has already been committed")
            }
            CommitError::Transport(err) => write!(f, "transport write failed: {}", err),
        }
    }
}

impl std::error::Error for CommitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommitError::AlreadyCommitted => None,
            CommitError::Transport(err) => Some(err),
        }
    }
}

impl From<io::Error> for CommitError {
    fn from(err: io::Error) -> Self {
        CommitError::Transport(err)
    }
}

/// Accumulates everything needed to answer a request and delivers it exactly once
///
/// Created per request, mutated by the resolver (status, headers, body)
/// during handling, then committed and discarded. Construction seeds the
/// `Content-Type` header from the given content type and binds the owned
/// [`View`] to its template file; callers never set `Content-Type`
/// manually, which keeps the header and the body encoding from drifting
/// apart.
#[derive(Debug)]
pub struct Response {
    status: Option<Status>,
    headers: HashMap<String, String>,
    body: Option<String>,
    view: View,
    committed: bool,
}

const CONTENT_TYPE: &str = "Content-Type";

impl Response {
    /// Construct an empty response from a content type and template file
    #[must_use]
    pub fn new(content_type: &str, template_file: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert(CONTENT_TYPE.to_string(), content_type.to_string());
        Self {
            status: None,
            headers,
            body: None,
            view: View::new(template_file),
            committed: false,
        }
    }

    /// Set the HTTP response status by numeric code
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStatusError`] for a code outside the status
    /// registry; the current status is left unchanged.
    pub fn set_status(&mut self, code: u16) -> Result<(), UnknownStatusError> {
        self.status = Some(Status::new(code)?);
        Ok(())
    }

    /// The current status, or `None` while unset
    ///
    /// An unset status means the transport layer applies its own default
    /// (conventionally 200); no status line is emitted at commit.
    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Read a single header's value
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Set or overwrite a header (last write wins)
    ///
    /// Keys are stored case-sensitively, exactly as written.
    pub fn set_header(&mut self, key: &str, value: &str) {
        self.headers.insert(key.to_string(), value.to_string());
    }

    /// All headers accumulated so far
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Replace the response body
    ///
    /// Full replace, not append; an absent body means no content was
    /// produced and commit emits the head only.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
    }

    /// The response body, if one was produced
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The owned view descriptor
    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Mutable access to the owned view, for populating render data
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Whether this response has already been committed
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Commit the response to the client, exactly once
    ///
    /// Emission order is fixed: status line (when set) before headers,
    /// headers before body, body verbatim with no re-encoding. When the
    /// transport reports its head as already sent, status and headers are
    /// skipped entirely and only the body is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`CommitError::AlreadyCommitted`] on a second call and
    /// [`CommitError::Transport`] when the transport fails mid-write.
    pub fn commit(&mut self, transport: &mut dyn Transport) -> Result<(), CommitError> {
        if self.committed {
            warn!("Commit refused: response already committed");
            return Err(CommitError::AlreadyCommitted);
        }

        if transport.headers_sent() {
            debug!("Transport head already sent, emitting body only");
        } else {
            if let Some(status) = &self.status {
                transport.send_status(status.id(), status.description())?;
            }
            for (name, value) in &self.headers {
                transport.send_header(name, value)?;
            }
        }

        if let Some(body) = &self.body {
            transport.send_body(body.as_bytes())?;
        }

        self.committed = true;
        debug!(
            status = self.status.map(|s| s.id()),
            header_count = self.headers.len(),
            body_bytes = self.body.as_ref().map_or(0, String::len),
            "Response committed"
        );
        Ok(())
    }
}
