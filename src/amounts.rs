use std::fmt::{Debug, Display, Formatter};
use rust_decimal::Decimal;

pub type Figure = Decimal;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignPlacement {
    Prefix,
    Suffix,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Currency {
    pub sign: String,
    pub placement: SignPlacement,
}

impl Currency {
    pub fn prefixed(sign: impl Into<String>) -> Currency {
        Currency {
            sign: sign.into(),
            placement: SignPlacement::Prefix,
        }
    }

    pub fn suffixed(sign: impl Into<String>) -> Currency {
        Currency {
            sign: sign.into(),
            placement: SignPlacement::Suffix,
        }
    }

    pub fn amount(&self, figure: Figure) -> Amount<'_> {
        Amount {
            currency: self,
            figure,
        }
    }
}

/// The two currencies shown on the home screen: the balance carries its sign
/// in front (`C$60`), individual transactions carry theirs behind (`-40€`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Currencies {
    pub balance: Currency,
    pub transaction: Currency,
}

impl Default for Currencies {
    fn default() -> Self {
        Currencies {
            balance: Currency::prefixed("C$"),
            transaction: Currency::suffixed("€"),
        }
    }
}

// Displays the raw figure, the ledger never rounds amounts
pub struct Amount<'a> {
    currency: &'a Currency,
    figure: Figure,
}

impl Display for Amount<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.currency.placement {
            SignPlacement::Prefix => write!(f, "{}{}", self.currency.sign, self.figure),
            SignPlacement::Suffix => write!(f, "{}{}", self.figure, self.currency.sign),
        }
    }
}

impl Debug for Amount<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
