use std::fmt;

use thiserror::Error;

/// Number of minor units in one whole unit of currency.
const MINOR_UNITS: i64 = 10_000;

/// Number of decimal places accepted when parsing.
const SCALE: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1:?} and {2:?}")]
    Underflow(&'static str, Money, Money),

    #[error("Amount must be greater than zero: {0:?}")]
    NotPositive(Money),

    #[error("Amount must not be negative: {0:?}")]
    Negative(Money),

    #[error("Money parse error: {0}, {1}")]
    Parse(&'static str, String),
}

/// Amount of money in minor units (1/10000 of a unit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Parses a decimal string such as `"12"`, `"12.5"` or `"-0.0001"`.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let (negative, unsigned) = match string.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, string),
        };

        let mut parts = unsigned.split('.');

        if parts.clone().count() > 2 {
            return Err(MoneyError::Parse("Too many decimal points", string.to_string()));
        }

        let units = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if units.is_empty() && fraction.is_empty() {
            return Err(MoneyError::Parse("No digits", string.to_string()));
        }

        if fraction.len() > SCALE {
            return Err(MoneyError::Parse("Too many decimal places", string.to_string()));
        }

        let all_digits = units
            .chars()
            .chain(fraction.chars())
            .all(|c| c.is_ascii_digit());

        if !all_digits {
            return Err(MoneyError::Parse("Invalid digit", string.to_string()));
        }

        let units: i64 = if units.is_empty() {
            0
        } else {
            units
                .parse()
                .map_err(|_| MoneyError::Parse("Value out of range", string.to_string()))?
        };

        let fraction: i64 = format!("{:0<4}", fraction)
            .parse()
            .map_err(|_| MoneyError::Parse("Invalid fraction", string.to_string()))?;

        let minor = units
            .checked_mul(MINOR_UNITS)
            .and_then(|minor| minor.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Value out of range", string.to_string()))?;

        return Ok(if negative { Money(-minor) } else { Money(minor) });
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0;
    }

    pub fn is_negative(&self) -> bool {
        return self.0 < 0;
    }

    /// Checks the precondition shared by every amount moved between accounts.
    pub fn require_positive(self) -> Result<Self, MoneyError> {
        if !self.is_positive() {
            return Err(MoneyError::NotPositive(self));
        }

        return Ok(self);
    }

    /// Adds `other` in place. On failure `self` is left untouched.
    pub fn add(&mut self, other: &Self) -> Result<(), MoneyError> {
        let a = self.0;
        let b = other.0;

        match a.checked_add(b) {
            Some(sum) => self.0 = sum,
            None if b > 0 => return Err(MoneyError::Overflow("add", *self, *other)),
            None => return Err(MoneyError::Underflow("add", *self, *other)),
        }

        return Ok(());
    }

    /// Subtracts `other` in place. On failure `self` is left untouched.
    pub fn sub(&mut self, other: &Self) -> Result<(), MoneyError> {
        let a = self.0;
        let b = other.0;

        match a.checked_sub(b) {
            Some(difference) => self.0 = difference,
            None if b > 0 => return Err(MoneyError::Underflow("sub", *self, *other)),
            None => return Err(MoneyError::Overflow("sub", *self, *other)),
        }

        return Ok(());
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let minor = self.0.unsigned_abs();
        let scale = MINOR_UNITS as u64;

        return write!(f, "{sign}{}.{:04}", minor / scale, minor % scale);
    }
}
