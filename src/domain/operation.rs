use rust_decimal::Decimal;

/// A single step of a demonstration script, addressed to one account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    Close,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Deposit { amount } => write!(f, "Depositing ${}...", amount),
            Operation::Withdraw { amount } => write!(f, "Withdrawing ${}...", amount),
            Operation::Close => write!(f, "Closing account..."),
        }
    }
}
