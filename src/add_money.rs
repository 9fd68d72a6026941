use rand::Rng;
use rust_decimal::Decimal;
use crate::clock::Clock;
use crate::transaction::{Transaction, TransactionId};

pub const ADD_MONEY_TITLE: &str = "Added money";
const MAX_ADDED_MONEY: u32 = 1000;

pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> TransactionId {
    rng.gen::<u64>().to_string()
}

/// Builds the demo transaction behind the "Add money" button: a whole
/// amount below 1000, credited or debited with equal odds.
pub fn random_transaction<R: Rng + ?Sized, C: Clock + ?Sized>(rng: &mut R, clock: &C) -> Transaction {
    let id = random_id(rng);
    let magnitude = Decimal::from(rng.gen_range(0..MAX_ADDED_MONEY));
    let credit = rng.gen_bool(0.5);

    // No negative zero
    let amount = if credit || magnitude.is_zero() {
        magnitude
    } else {
        -magnitude
    };

    Transaction::new(id, amount, ADD_MONEY_TITLE, clock.now())
}
