use std::pin::Pin;

use futures::stream::{self, Stream};

use crate::domain::{Operation, OperationStream};

/// A fixed sequence of operations, replayed once.
pub struct ScriptedOperations {
    ops: Option<Vec<Operation>>,
}

impl ScriptedOperations {
    pub fn new(ops: Vec<Operation>) -> Self {
        Self { ops: Some(ops) }
    }
}

impl OperationStream for ScriptedOperations {
    type Ops = Pin<Box<dyn Stream<Item = Operation> + Send>>;

    fn stream(&mut self) -> Self::Ops {
        // Take ownership so the stream owns its data and is 'static.
        // A consumed script yields an empty stream.
        let ops = self.ops.take().unwrap_or_default();
        Box::pin(stream::iter(ops))
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use rust_decimal::Decimal;

    use super::ScriptedOperations;
    use crate::domain::{Operation, OperationStream};

    #[tokio::test]
    async fn streams_the_script_once_in_order() {
        let deposit = Operation::Deposit {
            amount: Decimal::from(10),
        };
        let mut script = ScriptedOperations::new(vec![deposit, Operation::Close]);

        let ops: Vec<Operation> = script.stream().collect().await;
        assert_eq!(ops, vec![deposit, Operation::Close]);

        let again: Vec<Operation> = script.stream().collect().await;
        assert!(again.is_empty());
    }
}
