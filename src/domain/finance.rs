use crate::domain::ports::{Entity, EntityId};
use crate::error::{Result, StoreError};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub id: EntityId,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
}

impl Transaction {
    pub fn new(id: EntityId, date: NaiveDate, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            id,
            date,
            amount,
            category: category.into(),
        }
    }
}

impl Entity for Transaction {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// The payment channels a transaction can be pushed through.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Processor {
    BankTransfer,
    MobileMoney,
    CryptoWallet,
}

impl Processor {
    pub fn label(&self) -> &'static str {
        match self {
            Processor::BankTransfer => "Bank Transfer",
            Processor::MobileMoney => "Mobile Money",
            Processor::CryptoWallet => "Crypto Wallet",
        }
    }

    /// Renders the confirmation line for `tx`.
    pub fn process(&self, tx: &Transaction) -> String {
        format!(
            "{}: Processed {} for {}",
            self.label(),
            format_currency(tx.amount),
            tx.category
        )
    }
}

/// Withdrawal rule applied by an [`Account`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AccountPolicy {
    /// Debits unconditionally; the balance may go negative.
    Unchecked,
    /// Rejects any debit larger than the current balance.
    #[default]
    OverdraftChecked,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Account {
    pub account_number: String,
    balance: Decimal,
    policy: AccountPolicy,
}

impl Account {
    /// Opens an overdraft-checked account.
    pub fn new(account_number: impl Into<String>, initial_balance: Decimal) -> Self {
        Self::with_policy(account_number, initial_balance, AccountPolicy::default())
    }

    pub fn with_policy(
        account_number: impl Into<String>,
        initial_balance: Decimal,
        policy: AccountPolicy,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            balance: initial_balance,
            policy,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn policy(&self) -> AccountPolicy {
        self.policy
    }

    /// Debits the transaction amount and returns the new balance.
    pub fn apply_transaction(&mut self, tx: &Transaction) -> Result<Decimal> {
        if self.policy == AccountPolicy::OverdraftChecked && tx.amount > self.balance {
            return Err(StoreError::InsufficientFunds {
                requested: tx.amount,
                available: self.balance,
            });
        }
        self.balance -= tx.amount;
        Ok(self.balance)
    }
}

/// Formats an amount as dollars with two decimals and thousands separators,
/// e.g. `$1,234.50` or `-$12.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}
