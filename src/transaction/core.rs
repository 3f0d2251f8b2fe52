//! Defines the core data model and the in-memory store for transactions.

use std::ops::RangeInclusive;

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The integer type used for transaction IDs.
pub type TransactionId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened, kept as the text the user entered.
    pub date: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values represent income/credits, negative values represent
    /// expenses/debits.
    pub amount: f64,
}

// ============================================================================
// STORE
// ============================================================================

/// The ordered, process-lifetime collection of transactions.
///
/// Transactions keep their insertion order. IDs are assigned from a counter
/// that only ever increases, so deleting a transaction cannot cause a later
/// insert to reuse its ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a ledger seeded with the three sample transactions that the
    /// server starts with.
    pub fn with_sample_data() -> Self {
        let mut ledger = Self::new();
        ledger.create("2023-06-01".to_owned(), 100.0);
        ledger.create("2023-06-02".to_owned(), -200.0);
        ledger.create("2023-06-03".to_owned(), 300.0);

        ledger
    }

    /// Append a new transaction to the ledger and return a copy of it.
    pub fn create(&mut self, date: String, amount: f64) -> Transaction {
        let transaction = Transaction {
            id: self.next_id,
            date,
            amount,
        };
        self.next_id += 1;
        self.transactions.push(transaction.clone());

        transaction
    }

    /// Retrieve a copy of the first transaction with the given `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a transaction in
    /// the ledger.
    pub fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Overwrite the date and amount of the first transaction with the given
    /// `id`, leaving its ID and position in the ledger unchanged.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a transaction in
    /// the ledger.
    pub fn update(&mut self, id: TransactionId, date: String, amount: f64) -> Result<(), Error> {
        let transaction = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?;

        transaction.date = date;
        transaction.amount = amount;

        Ok(())
    }

    /// Remove the first transaction with the given `id`, leaving the other
    /// transactions in their original relative order.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a transaction in
    /// the ledger.
    pub fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?;

        self.transactions.remove(index);

        Ok(())
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The sum of every transaction's amount.
    ///
    /// An empty ledger has a total balance of zero.
    pub fn total_balance(&self) -> f64 {
        self.transactions
            .iter()
            .fold(0.0, |total, transaction| total + transaction.amount)
    }

    /// Copies of the transactions whose amount falls within `range`
    /// (inclusive at both ends), in insertion order.
    pub fn amounts_in_range(&self, range: RangeInclusive<f64>) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| range.contains(&transaction.amount))
            .cloned()
            .collect()
    }
}

/// Parse a form field into an amount.
///
/// # Errors
/// Returns [Error::InvalidAmount] with the original text if it cannot be
/// parsed as a float.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, Error> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(raw.to_owned()))
}

#[cfg(test)]
mod ledger_tests {
    use crate::Error;

    use super::{Ledger, parse_amount};

    #[test]
    fn create_assigns_sequential_ids() {
        let mut ledger = Ledger::new();

        let first = ledger.create("2023-06-01".to_owned(), 100.0);
        let second = ledger.create("2023-06-02".to_owned(), -200.0);

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(ledger.transactions().len(), 2);
    }

    #[test]
    fn create_after_delete_does_not_reuse_ids() {
        let mut ledger = Ledger::with_sample_data();
        ledger.delete(3).unwrap();

        let transaction = ledger.create("2023-06-04".to_owned(), 50.0);

        assert_eq!(transaction.id, 4);
        let live_ids: Vec<_> = ledger.transactions().iter().map(|t| t.id).collect();
        assert_eq!(live_ids, vec![1, 2, 4]);
    }

    #[test]
    fn update_changes_only_the_target() {
        let mut ledger = Ledger::with_sample_data();

        ledger.update(1, "2023-06-01".to_owned(), 999.0).unwrap();

        let updated = ledger.get(1).unwrap();
        assert_eq!(updated.amount, 999.0);
        assert_eq!(updated.id, 1);
        assert_eq!(ledger.get(2).unwrap().date, "2023-06-02");
        assert_eq!(ledger.get(2).unwrap().amount, -200.0);
    }

    #[test]
    fn update_missing_transaction_returns_not_found() {
        let mut ledger = Ledger::with_sample_data();

        let result = ledger.update(999, "2023-06-04".to_owned(), 1.0);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn delete_preserves_relative_order() {
        let mut ledger = Ledger::with_sample_data();

        ledger.delete(2).unwrap();

        let ids: Vec<_> = ledger.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(ledger.get(2), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_transaction_returns_not_found() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.delete(1), Err(Error::NotFound));
    }

    #[test]
    fn total_balance_sums_all_amounts() {
        let ledger = Ledger::with_sample_data();

        assert_eq!(ledger.total_balance(), 200.0);
    }

    #[test]
    fn total_balance_of_empty_ledger_is_zero() {
        let ledger = Ledger::new();

        assert_eq!(ledger.total_balance(), 0.0);
    }

    #[test]
    fn amounts_in_range_is_inclusive_and_keeps_order() {
        let ledger = Ledger::with_sample_data();

        let matches = ledger.amounts_in_range(100.0..=300.0);

        let amounts: Vec<_> = matches.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![100.0, 300.0]);
    }

    #[test]
    fn amounts_in_range_with_no_matches_is_empty() {
        let ledger = Ledger::with_sample_data();

        assert!(ledger.amounts_in_range(1000.0..=2000.0).is_empty());
    }

    #[test]
    fn parse_amount_accepts_floats_and_surrounding_whitespace() {
        assert_eq!(parse_amount("50"), Ok(50.0));
        assert_eq!(parse_amount(" -3.50 "), Ok(-3.5));
    }

    #[test]
    fn parse_amount_rejects_non_numbers() {
        assert_eq!(
            parse_amount("lots"),
            Err(Error::InvalidAmount("lots".to_owned()))
        );
    }
}
