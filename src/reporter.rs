use crate::domain::{Error, FailureSink};

/// Logs each rejection's message on the error stream; the run continues.
#[derive(Debug, Default)]
pub struct StderrSink;

impl FailureSink for StderrSink {
    fn report(&self, error: &Error) {
        tracing::error!("{}", error);
    }
}
