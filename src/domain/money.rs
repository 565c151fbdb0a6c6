use crate::error::RentalError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::Mul;

/// A strictly positive price charged per rental day.
///
/// Wraps `rust_decimal::Decimal` so that a non-positive rate can never reach a
/// [`Vehicle`](super::vehicle::Vehicle).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rate(Decimal);

impl Rate {
    pub fn new(value: Decimal) -> Result<Self, RentalError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(RentalError::InvalidArgument(
                "Rate per day must be a positive number.".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = RentalError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The total price of a rental.
///
/// Values are kept exact; rounding to cents only happens when displayed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(pub Decimal);

impl Cost {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Mul<u32> for Rate {
    type Output = Cost;
    fn mul(self, days: u32) -> Self::Output {
        Cost(self.0 * Decimal::from(days))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{cents:.2}")
    }
}
