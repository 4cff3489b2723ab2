use rust_decimal::Decimal;

use crate::domain::Error;

#[derive(Debug)]
pub struct Account {
    number: String,  // assigned at creation, never changes
    balance: Decimal,
    active: bool,    // false once closed; closure is one-way
}

impl Account {
    /// Opens an account with the given number and opening balance.
    /// The opening balance is taken as-is and not checked for sign.
    pub fn new(number: &str, opening_balance: Decimal) -> Self {
        Self {
            number: number.to_owned(),
            balance: opening_balance,
            active: true,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Adds `amount` to the balance.
    ///
    /// The active check runs before the amount check, so a negative deposit
    /// into a closed account reports [`Error::InactiveAccount`].
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        if !self.active {
            return Err(Error::InactiveAccount);
        }
        if amount < Decimal::ZERO {
            return Err(Error::NegativeAmount);
        }
        self.balance += amount;
        Ok(())
    }

    /// Subtracts `amount` from the balance. A negative amount is not
    /// rejected and increases the balance instead.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        if !self.active {
            return Err(Error::InactiveAccount);
        }
        if amount > self.balance {
            return Err(Error::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Closes the account. Idempotent; there is no way to reopen.
    pub fn close(&mut self) {
        self.active = false;
    }
}
