use std::io::{self, Write};

/// Transport-facing send primitives a response commits through
///
/// The hosting environment supplies an implementation; the response core
/// never touches sockets or ambient transport state directly. The
/// `headers_sent` query is the explicit replacement for a global
/// "has output started" check: when it reports `true`, the committing
/// response skips status/header emission entirely and sends only the body.
pub trait Transport {
    /// Whether the transport has already begun emitting a response head
    fn headers_sent(&self) -> bool;

    /// Emit the status line
    fn send_status(&mut self, code: u16, reason: &str) -> io::Result<()>;

    /// Emit one header line
    fn send_header(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Emit body bytes, verbatim
    fn send_body(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// HTTP/1.1 wire-format transport over any [`io::Write`]
///
/// Writes `HTTP/1.1 <code> <reason>`, one `Name: value` line per header,
/// a blank separator line before the first body byte, then the body.
/// The head is considered sent as soon as any status or header line has
/// been written.
#[derive(Debug)]
pub struct WireTransport<W: Write> {
    writer: W,
    head_started: bool,
    body_started: bool,
}

impl<W: Write> WireTransport<W> {
    /// Wrap a writer in a fresh, nothing-sent transport
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            head_started: false,
            body_started: false,
        }
    }

    /// Recover the underlying writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Transport for WireTransport<W> {
    fn headers_sent(&self) -> bool {
        self.head_started
    }

    fn send_status(&mut self, code: u16, reason: &str) -> io::Result<()> {
        self.head_started = true;
        write!(self.writer, "HTTP/1.1 {} {}\r\n", code, reason)
    }

    fn send_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.head_started = true;
        write!(self.writer, "{}: {}\r\n", name, value)
    }

    fn send_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        if !self.body_started {
            // Head/body separator, even when no head was written: a bare
            // blank line keeps the wire format parseable.
            self.writer.write_all(b"\r\n")?;
            self.body_started = true;
        }
        self.writer.write_all(bytes)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let mut transport = WireTransport::new(Vec::new());
        transport.send_status(200, "OK").expect("status");
        transport
            .send_header("Content-Type", "text/plain")
            .expect("header");
        transport.send_body(b"hello").expect("body");

        let wire = String::from_utf8(transport.into_inner()).expect("utf8");
        assert_eq!(wire, "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello");
    }

    #[test]
    fn test_headers_sent_tracks_head() {
        let mut transport = WireTransport::new(Vec::new());
        assert!(!transport.headers_sent());
        transport.send_header("X-Key", "1").expect("header");
        assert!(transport.headers_sent());
    }
}
