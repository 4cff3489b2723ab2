use futures::StreamExt;

use crate::domain::{Account, Error, FailureSink, Operation, OperationStream};

/// Runs a script of operations against a single account, announcing each
/// step on stdout and routing rejections to the sink.
#[derive(Debug)]
pub struct Teller<S, F>
where
    S: OperationStream,
    F: FailureSink,
{
    script: S,
    sink: F,
    account: Account,
}

impl<S, F> Teller<S, F>
where
    S: OperationStream,
    F: FailureSink,
{
    pub fn new(account: Account, script: S, sink: F) -> Self {
        Self {
            script,
            sink,
            account,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Drains the script to the end. A rejected operation is reported and
    /// the run moves on to the next step.
    pub async fn run(&mut self) {
        let mut ops = self.script.stream();

        while let Some(op) = ops.next().await {
            println!("{}", op);
            match self.apply(op) {
                Ok(()) => {}
                Err(e) => self.sink.report(&e),
            }
        }
    }

    fn apply(&mut self, op: Operation) -> Result<(), Error> {
        match op {
            Operation::Deposit { amount } => {
                self.account.deposit(amount)?;
                println!("Current Balance: ${}", self.account.balance());
            }
            Operation::Withdraw { amount } => {
                self.account.withdraw(amount)?;
                println!("Current Balance: ${}", self.account.balance());
            }
            Operation::Close => self.account.close(),
        }
        tracing::debug!("applied {:?} to account {}", op, self.account.number());
        Ok(())
    }
}
