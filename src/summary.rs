use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use crate::amounts::Figure;
use crate::ledger::Ledger;

/// Aggregates for the insights view. `debits` is kept negative so that
/// `credits + debits == balance`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub credits: Figure,
    pub debits: Figure,
    pub balance: Figure,
    pub outflow_share: Option<Decimal>,
}

impl Summary {
    pub fn of(ledger: &Ledger) -> Summary {
        let (credits, debits) = ledger.transactions().fold(
            (Figure::ZERO, Figure::ZERO),
            |(credits, debits), transaction| {
                if transaction.amount.is_sign_negative() {
                    (credits, debits + transaction.amount)
                } else {
                    (credits + transaction.amount, debits)
                }
            },
        );

        // credits - debits can overflow while both totals fit
        let outflow_share = match credits.checked_sub(debits) {
            Some(movement) if movement.is_zero() => None,
            Some(movement) => (-debits)
                .checked_div(movement)
                .and_then(|ratio| ratio.checked_mul(dec!(100))),
            None => (credits / dec!(100))
                .checked_sub(debits / dec!(100))
                .and_then(|scaled_movement| (-debits).checked_div(scaled_movement)),
        }
        .map(|share| share.round_dp(2));

        Summary {
            count: ledger.len(),
            credits,
            debits,
            balance: ledger.balance(),
            outflow_share,
        }
    }
}
