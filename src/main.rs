mod domain;
mod reporter;
mod script;
mod teller;

use rust_decimal::Decimal;

use crate::domain::{Account, Operation};
use crate::reporter::StderrSink;
use crate::script::ScriptedOperations;
use crate::teller::Teller;

// The whole run is a scripted demonstration; nothing in it is fatal, so the
// process always exits 0.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let account = Account::new("123456", Decimal::from(1000));
    println!("Bank Account Created: #{}", account.number());

    let script = ScriptedOperations::new(vec![
        Operation::Deposit {
            amount: Decimal::from(1000),
        },
        Operation::Withdraw {
            amount: Decimal::from(500),
        },
    ]);
    let mut teller = Teller::new(account, script, StderrSink);
    teller.run().await;

    println!();
    println!("Testing edge cases...");

    let account = Account::new("789101", Decimal::from(500));
    println!("Bank Account Created: #{}", account.number());

    let script = ScriptedOperations::new(vec![
        Operation::Deposit {
            amount: Decimal::from(-100),
        },
        Operation::Withdraw {
            amount: Decimal::from(600),
        },
        Operation::Close,
        Operation::Deposit {
            amount: Decimal::from(50),
        },
    ]);
    let mut teller = Teller::new(account, script, StderrSink);
    teller.run().await;
}
