use chrono::NaiveDateTime;
#[cfg(test)]
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use crate::amounts::Figure;

pub type TransactionId = String;

/// One signed money movement. A positive amount is a credit, a negative one
/// a debit.
///
/// Nothing here is validated: ids may collide, amounts may be zero and titles
/// may be empty. The ledger keeps whatever it is given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(Builder))]
#[cfg_attr(test, builder(setter(into)))]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: Figure,
    pub title: String,
    pub date: NaiveDateTime,
}

impl Transaction {
    pub fn new(
        id: impl Into<TransactionId>,
        amount: Figure,
        title: impl Into<String>,
        date: NaiveDateTime,
    ) -> Transaction {
        Transaction {
            id: id.into(),
            amount,
            title: title.into(),
            date,
        }
    }

    /// Zero counts as a debit, like the home screen's add/remove icon.
    pub fn is_credit(&self) -> bool {
        self.amount > Figure::ZERO
    }
}

#[cfg(test)]
pub fn test_date(day: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("valid test date")
}
