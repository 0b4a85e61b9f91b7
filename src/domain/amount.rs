use std::fmt;
use std::ops::{Add, Sub};

use super::error::DomainError;

/// Trait representing a currency amount with fixed precision
pub trait AmountType:
    Copy + Ord + Add<Output = Self> + Sub<Output = Self> + Default + Send + Sync + fmt::Debug
{
    /// Parse from decimal string (e.g., "300.30")
    fn from_decimal_str(s: &str) -> Result<Self, DomainError>;

    /// Convert to decimal string with 2 decimal places
    fn to_decimal_string(&self) -> String;

    /// Checked addition, returns None on overflow
    fn checked_add(&self, other: Self) -> Option<Self>;

    /// Checked subtraction, returns None on underflow
    fn checked_sub(&self, other: Self) -> Option<Self>;

    /// Zero value
    fn zero() -> Self;
}

/// Fixed-point currency amount stored as a whole number of cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedPoint(i64);

impl FixedPoint {
    const SCALE: i64 = 100;
    const FRACTION_DIGITS: usize = 2;

    /// Create from a count of cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    /// Get the amount in cents
    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl AmountType for FixedPoint {
    fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let (integer_part, fraction_part) = match s.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (s, ""),
        };

        if integer_part.is_empty()
            || fraction_part.len() > Self::FRACTION_DIGITS
            || !integer_part.bytes().all(|b| b.is_ascii_digit())
            || !fraction_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(DomainError::InvalidAmount);
        }

        let integer: i64 = integer_part
            .parse()
            .map_err(|_| DomainError::Overflow)?;

        // "5" after the point means fifty cents
        let fraction: i64 = if fraction_part.is_empty() {
            0
        } else {
            format!("{:0<2}", fraction_part)
                .parse()
                .map_err(|_| DomainError::InvalidAmount)?
        };

        let cents = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(fraction))
            .ok_or(DomainError::Overflow)?;

        Ok(Self(if is_negative { -cents } else { cents }))
    }

    fn to_decimal_string(&self) -> String {
        self.to_string()
    }

    fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn zero() -> Self {
        Self(0)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs_value = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs_value / Self::SCALE as u64,
            abs_value % Self::SCALE as u64
        )
    }
}

impl Add for FixedPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for FixedPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}
