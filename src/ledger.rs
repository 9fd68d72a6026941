use std::collections::VecDeque;
use tracing::debug;
use crate::amounts::Figure;
use crate::transaction::Transaction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerState {
    Empty,
    NonEmpty,
}

/// The session's transactions, newest first. The balance is never stored.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    transactions: VecDeque<Transaction>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::default()
    }

    // Oldest first, so partial sums are the balances seen after each run
    pub fn balance(&self) -> Figure {
        self.transactions.iter().rev().map(|transaction| transaction.amount).sum()
    }

    /// Prepends the transaction. Duplicate ids, zero amounts and out of order
    /// dates are all accepted.
    pub fn run_transaction(&mut self, transaction: Transaction) {
        debug!(
            id = %transaction.id,
            amount = %transaction.amount,
            title = %transaction.title,
            "running transaction"
        );
        self.transactions.push_front(transaction);
    }

    pub fn clear_transactions(&mut self) {
        debug!(count = self.transactions.len(), "clearing transactions");
        self.transactions.clear();
    }

    pub fn transactions(&self) -> impl ExactSizeIterator<Item = &Transaction> + '_ {
        self.transactions.iter()
    }

    // Newest match wins when ids were reused
    pub fn find(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn state(&self) -> LedgerState {
        if self.is_empty() {
            LedgerState::Empty
        } else {
            LedgerState::NonEmpty
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use crate::transaction::{test_date, Transaction, TransactionBuilder};
    use super::{Ledger, LedgerState};

    fn transaction(id: &str, amount: Decimal) -> Transaction {
        TransactionBuilder::default()
            .id(id)
            .amount(amount)
            .title("Added money")
            .date(test_date(1))
            .build()
            .unwrap()
    }

    fn ids(ledger: &Ledger) -> Vec<&str> {
        ledger.transactions().map(|transaction| transaction.id.as_str()).collect()
    }

    #[test]
    fn empty_ledger_has_zero_balance() {
        let ledger = Ledger::new();

        assert_eq!(ledger.balance(), dec!(0));
        assert_eq!(ledger.state(), LedgerState::Empty);
        assert_eq!(ledger.transactions().len(), 0);
    }

    #[test]
    fn single_transaction_sets_balance() {
        let mut ledger = Ledger::new();
        let added = transaction("1", dec!(100));

        ledger.run_transaction(added.clone());

        assert_eq!(ledger.balance(), dec!(100));
        assert_eq!(ledger.transactions().cloned().collect::<Vec<_>>(), vec![added]);
        assert_eq!(ledger.state(), LedgerState::NonEmpty);
    }

    #[test]
    fn debit_after_credit_reduces_balance_and_comes_first() {
        let mut ledger = Ledger::new();

        ledger.run_transaction(transaction("1", dec!(100)));
        ledger.run_transaction(transaction("2", dec!(-40)));

        assert_eq!(ledger.balance(), dec!(60));
        let head = ledger.transactions().next().unwrap();
        assert_eq!(head.amount, dec!(-40));
        assert_eq!(ids(&ledger), vec!["2", "1"]);
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut ledger = Ledger::new();
        ledger.run_transaction(transaction("1", dec!(100)));
        ledger.run_transaction(transaction("2", dec!(-40)));
        ledger.run_transaction(transaction("3", dec!(7.25)));

        ledger.clear_transactions();

        assert_eq!(ledger.balance(), dec!(0));
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.state(), LedgerState::Empty);
    }

    #[test]
    fn clear_on_empty_ledger_is_harmless() {
        let mut ledger = Ledger::new();
        ledger.clear_transactions();

        assert!(ledger.is_empty());
        assert_eq!(ledger.balance(), dec!(0));
    }

    #[test]
    fn duplicate_ids_are_both_kept() {
        let mut ledger = Ledger::new();

        ledger.run_transaction(transaction("same", dec!(10)));
        ledger.run_transaction(transaction("same", dec!(-3)));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.balance(), dec!(7));
        assert_eq!(ledger.find("same").unwrap().amount, dec!(-3));
    }

    #[test]
    fn zero_and_negative_balances_are_accepted() {
        let mut ledger = Ledger::new();

        ledger.run_transaction(transaction("1", dec!(0)));
        ledger.run_transaction(transaction("2", dec!(-250)));

        assert_eq!(ledger.balance(), dec!(-250));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn find_unknown_id_returns_none() {
        let mut ledger = Ledger::new();
        ledger.run_transaction(transaction("1", dec!(5)));

        assert!(ledger.find("2").is_none());
    }

    #[test]
    fn reading_balance_twice_gives_same_value() {
        let mut ledger = Ledger::new();
        ledger.run_transaction(transaction("1", dec!(19.99)));
        ledger.run_transaction(transaction("2", dec!(-0.99)));

        assert_eq!(ledger.balance(), ledger.balance());
        assert_eq!(ledger.balance(), dec!(19.00));
    }

    #[test]
    fn balance_is_sum_of_amounts_for_random_sequences() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ledger = Ledger::new();
            let mut expected = Decimal::ZERO;

            for step in 0..rng.gen_range(0..40) {
                if rng.gen_ratio(1, 10) {
                    ledger.clear_transactions();
                    expected = Decimal::ZERO;
                } else {
                    let amount = Decimal::new(rng.gen_range(-100_000..100_000), 2);
                    ledger.run_transaction(transaction(&step.to_string(), amount));
                    expected += amount;
                }

                assert_eq!(ledger.balance(), expected, "seed {} step {}", seed, step);
            }

            let summed: Decimal = ledger.transactions().map(|transaction| transaction.amount).sum();
            assert_eq!(ledger.balance(), summed);
        }
    }

    #[test]
    fn balance_at_the_edges_of_decimal_range() {
        let mut ledger = Ledger::new();

        ledger.run_transaction(transaction("1", Decimal::MAX));
        assert_eq!(ledger.balance(), Decimal::MAX);

        ledger.run_transaction(transaction("2", Decimal::MIN));
        ledger.run_transaction(transaction("3", Decimal::MIN));
        assert_eq!(ledger.balance(), Decimal::MIN);

        ledger.run_transaction(transaction("4", Decimal::MAX));
        assert_eq!(ledger.balance(), dec!(0));
    }

    #[test]
    fn most_recent_transaction_is_always_first() {
        let mut ledger = Ledger::new();

        for id in ["a", "b", "c", "d"] {
            ledger.run_transaction(transaction(id, dec!(1)));
            assert_eq!(ledger.transactions().next().unwrap().id, id);
        }

        assert_eq!(ids(&ledger), vec!["d", "c", "b", "a"]);
    }
}
