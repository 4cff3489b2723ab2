pub mod account;
pub mod error;
pub mod operation;
pub mod traits;

pub use account::Account;
pub use error::Error;
pub use operation::Operation;
pub use traits::{FailureSink, OperationStream};
