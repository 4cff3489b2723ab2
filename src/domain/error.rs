/// Everything that can make a deposit or withdrawal fail. The attempted
/// operation has no effect when any of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Cannot deposit a negative amount!")]
    NegativeAmount,

    #[error("Insufficient funds for withdrawal!")]
    InsufficientFunds,

    #[error("Transaction not allowed on closed account!")]
    InactiveAccount,
}
