use futures::Stream;

use crate::domain::{Error, Operation};

/// Source of the operations to run against an account.
pub trait OperationStream {
    type Ops: Stream<Item = Operation> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::Ops;
}

/// Receives each rejected operation. Reporting never aborts the run.
pub trait FailureSink {
    fn report(&self, error: &Error);
}
