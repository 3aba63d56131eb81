//! Side channel for inventory failures that never reach the caller.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Error, ErrorKind};

pub trait Diagnostics: Send + Sync {
    fn report(&self, source: &str, err: &Error);
}

pub type DiagnosticsHandle = Arc<dyn Diagnostics>;

pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, source: &str, err: &Error) {
        match err {
            Error::ServerError { status, body } => {
                log::error!("{source}: server error: {status} {body}");
            }
            Error::NetworkError(detail) => {
                log::error!("{source}: network error: {detail}");
            }
            Error::MalformedResponse(detail) => {
                log::error!("{source}: invalid response from server: {detail}");
            }
            err => {
                log::error!("{source}: {err}");
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub source: String,
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

/// Keeps every report in memory, e.g. for a status line showing the last
/// failed query.
#[derive(Default)]
pub struct Recorder {
    reports: Mutex<Vec<Report>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    pub fn last(&self) -> Option<Report> {
        self.reports.lock().last().cloned()
    }

    pub fn count(&self, kind: ErrorKind) -> usize {
        self.reports.lock().iter().filter(|r| r.kind == kind).count()
    }

    pub fn clear(&self) {
        self.reports.lock().clear();
    }
}

impl Diagnostics for Recorder {
    fn report(&self, source: &str, err: &Error) {
        self.reports.lock().push(Report {
            source: source.to_string(),
            kind: err.kind(),
            status: err.status(),
            message: err.to_string(),
        });
    }
}

/// Forwards each report to every inner sink, in order.
pub struct Fanout(pub Vec<DiagnosticsHandle>);

impl Diagnostics for Fanout {
    fn report(&self, source: &str, err: &Error) {
        for sink in &self.0 {
            sink.report(source, err);
        }
    }
}
