//! Currency amounts.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

const MINOR_PER_MAJOR: u64 = 100;

/// Direction to take when a decimal amount has digits below one cent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rounding {
    /// Any non-zero sub-cent digit bumps the amount to the next cent.
    Up,
    /// Sub-cent digits are dropped.
    Down,
}

/// Non-negative currency amount with two decimal places.
///
/// Stored in minor units (cents) so comparisons are exact. On the wire it is a
/// plain JSON number (`999.99`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Build from whole units and cents (`Money::new(199, 99)` is 199.99).
    ///
    /// `cents` must be below 100.
    pub const fn new(major: u64, cents: u8) -> Self {
        debug_assert!((cents as u64) < MINOR_PER_MAJOR, "cents must be below 100");
        Self(major * MINOR_PER_MAJOR + cents as u64)
    }

    /// Parses a non-negative decimal with any number of fractional digits,
    /// rounding sub-cent remainders in the given direction.
    ///
    /// `"199.995"` is 200.00 rounded up and 199.99 rounded down. Signs,
    /// exponents and a bare `.` on either side are rejected.
    pub fn parse_rounded(s: &str, rounding: Rounding) -> DomainResult<Self> {
        let (major, minor) = split_decimal(s)?;
        let (cents, rest) = minor.split_at(minor.len().min(2));
        let bump = rounding == Rounding::Up && rest.bytes().any(|b| b != b'0');
        to_minor(s, major, cents, u64::from(bump))
    }

    pub fn minor_units(&self) -> u64 {
        self.0
    }

    fn as_f64(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    fn from_f64(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::validation(format!(
                "amount must be a non-negative number, got {value}"
            )));
        }
        Ok(Self((value * MINOR_PER_MAJOR as f64).round() as u64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / MINOR_PER_MAJOR, self.0 % MINOR_PER_MAJOR)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parses `"500"`, `"199.9"` or `"199.99"`. Signs, exponents and more than
    /// two fractional digits are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = split_decimal(s)?;
        if minor.len() > 2 {
            return Err(invalid_amount(s));
        }
        to_minor(s, major, minor, 0)
    }
}

fn invalid_amount(raw: &str) -> DomainError {
    DomainError::validation(format!("invalid amount: {raw:?}"))
}

/// Splits `"12.345"` into `("12", "345")`, checking both sides are plain digits.
fn split_decimal(raw: &str) -> DomainResult<(&str, &str)> {
    let s = raw.trim();
    let (major, minor) = match s.split_once('.') {
        Some((_, "")) => return Err(invalid_amount(raw)),
        Some(parts) => parts,
        None => (s, ""),
    };

    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if major.is_empty() || !digits(major) || !digits(minor) {
        return Err(invalid_amount(raw));
    }
    Ok((major, minor))
}

/// `cents` holds at most two digits; a single digit counts as tenths.
fn to_minor(raw: &str, major: &str, cents: &str, extra: u64) -> DomainResult<Money> {
    let major: u64 = major.parse().map_err(|_| invalid_amount(raw))?;
    let cents = match cents.len() {
        0 => 0,
        1 => cents.parse::<u64>().map_err(|_| invalid_amount(raw))? * 10,
        _ => cents.parse::<u64>().map_err(|_| invalid_amount(raw))?,
    };

    major
        .checked_mul(MINOR_PER_MAJOR)
        .and_then(|m| m.checked_add(cents))
        .and_then(|m| m.checked_add(extra))
        .map(Money)
        .ok_or_else(|| invalid_amount(raw))
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value).map_err(serde::de::Error::custom)
    }
}
