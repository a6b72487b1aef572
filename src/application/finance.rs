use crate::domain::finance::{Account, Processor, Transaction, format_currency};
use crate::error::Result;
use crate::infrastructure::in_memory::EntityRepository;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Runs a fixed batch of transactions through the processors and a savings
/// account, keeping every transaction it handled.
pub struct FinanceApp {
    account: Account,
    transactions: EntityRepository<Transaction>,
    date: NaiveDate,
}

impl FinanceApp {
    pub fn new(date: NaiveDate) -> Self {
        Self::with_account(Account::new("ACC123", dec!(1000)), date)
    }

    pub fn with_account(account: Account, date: NaiveDate) -> Self {
        Self {
            account,
            transactions: EntityRepository::new(),
            date,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn transactions(&self) -> &EntityRepository<Transaction> {
        &self.transactions
    }

    /// Processes the sample batch and returns the lines to print.
    pub fn run(&mut self) -> Result<Vec<String>> {
        self.run_batch(&[
            (Processor::MobileMoney, dec!(100), "Groceries"),
            (Processor::BankTransfer, dec!(200), "Utilities"),
            (Processor::CryptoWallet, dec!(300), "Entertainment"),
        ])
    }

    /// Processes `batch` in order, numbering transactions from 1.
    ///
    /// A rejected debit is reported in the output and the run carries on with
    /// the next transaction. Each transaction is recorded before it touches the
    /// account, so a duplicate id stops the run without debiting anything.
    pub fn run_batch(&mut self, batch: &[(Processor, Decimal, &str)]) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for (id, &(processor, amount, category)) in (1..).zip(batch) {
            let tx = Transaction::new(id, self.date, amount, category);
            self.transactions.add(tx.clone())?;
            lines.push(processor.process(&tx));

            match self.account.apply_transaction(&tx) {
                Ok(balance) => lines.push(format!(
                    "Transaction Applied. New Balance: {}",
                    format_currency(balance)
                )),
                Err(e) => {
                    tracing::warn!(tx = tx.id, "{}", e);
                    lines.push(format!("Transaction {} rejected: {}", tx.id, e));
                }
            }
        }

        tracing::info!(
            account = %self.account.account_number,
            recorded = self.transactions.len(),
            "finance run complete"
        );
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finance_run() {
        let mut app = FinanceApp::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        let lines = app.run().unwrap();

        assert_eq!(
            lines,
            vec![
                "Mobile Money: Processed $100.00 for Groceries",
                "Transaction Applied. New Balance: $900.00",
                "Bank Transfer: Processed $200.00 for Utilities",
                "Transaction Applied. New Balance: $700.00",
                "Crypto Wallet: Processed $300.00 for Entertainment",
                "Transaction Applied. New Balance: $400.00",
            ]
        );
        assert_eq!(app.account().balance(), dec!(400));
        assert_eq!(app.transactions().len(), 3);
        assert_eq!(app.transactions().get_by_id(3).unwrap().category, "Entertainment");
    }

    #[test]
    fn test_rejected_debit_does_not_stop_the_batch() {
        let account = Account::new("ACC777", dec!(250));
        let mut app = FinanceApp::with_account(account, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        let lines = app
            .run_batch(&[
                (Processor::MobileMoney, dec!(100), "Groceries"),
                (Processor::BankTransfer, dec!(400), "Rent"),
                (Processor::CryptoWallet, dec!(50), "Books"),
            ])
            .unwrap();

        assert_eq!(
            lines,
            vec![
                "Mobile Money: Processed $100.00 for Groceries",
                "Transaction Applied. New Balance: $150.00",
                "Bank Transfer: Processed $400.00 for Rent",
                "Transaction 2 rejected: Insufficient funds: requested 400, available 150",
                "Crypto Wallet: Processed $50.00 for Books",
                "Transaction Applied. New Balance: $100.00",
            ]
        );
        assert_eq!(app.account().balance(), dec!(100));
        assert_eq!(app.transactions().len(), 3);
        assert!(app.transactions().contains(2));
    }

    #[test]
    fn test_second_run_hits_duplicate_ids() {
        let mut app = FinanceApp::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        app.run().unwrap();
        assert!(app.run().is_err());
        assert_eq!(app.transactions().len(), 3);
        assert_eq!(app.account().balance(), dec!(400));
    }
}
