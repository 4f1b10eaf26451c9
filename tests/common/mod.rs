#![allow(dead_code)]

use corridor::Transport;
use std::io;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test subscriber once so `RUST_LOG=debug cargo test` shows
/// the crate's tracing output interleaved with test results.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// What a transport was asked to emit, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    Status(u16, String),
    Header(String, String),
    Body(Vec<u8>),
}

/// Transport double that records every send instead of writing bytes
///
/// `headers_sent` can be preset to simulate a transport whose head was
/// already flushed by something outside the response; it also flips on
/// once a status or header is emitted.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub events: Vec<Emitted>,
    pub head_sent: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_head_already_sent() -> Self {
        Self {
            events: Vec::new(),
            head_sent: true,
        }
    }

    pub fn statuses(&self) -> Vec<u16> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Emitted::Status(code, _) => Some(*code),
                _ => None,
            })
            .collect()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.events.iter().find_map(|e| match e {
            Emitted::Header(n, v) if n == name => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn bodies(&self) -> Vec<&[u8]> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Emitted::Body(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl Transport for RecordingTransport {
    fn headers_sent(&self) -> bool {
        self.head_sent
    }

    fn send_status(&mut self, code: u16, reason: &str) -> io::Result<()> {
        self.head_sent = true;
        self.events.push(Emitted::Status(code, reason.to_string()));
        Ok(())
    }

    fn send_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.head_sent = true;
        self.events
            .push(Emitted::Header(name.to_string(), value.to_string()));
        Ok(())
    }

    fn send_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.events.push(Emitted::Body(bytes.to_vec()));
        Ok(())
    }
}
