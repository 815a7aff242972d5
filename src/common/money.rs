use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Minor units per major currency unit (4 decimal places).
const MINOR_PER_UNIT: i64 = 10_000;

/// A monetary amount stored as an `i64` count of minor units (4 decimal
/// places), so arithmetic on balances and fees stays exact. `bigdecimal` is
/// only used at the string boundary (parsing and display).
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use atm_simulator::common::money::Money;
///
/// let amount = Money::from_str("1000").unwrap();
/// assert_eq!(amount, Money::from_major(1000));
/// assert_eq!(amount.to_string(), "1000.0000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    pub const fn from_minor(value: i64) -> Self {
        Money(value)
    }

    /// Whole currency units, e.g. `from_major(1000)` is 1000.0000.
    pub const fn from_major(value: i64) -> Self {
        Money(value * MINOR_PER_UNIT)
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub fn as_minor(&self) -> i64 {
        self.0
    }

    /// Basis-point fraction of this amount, truncated toward zero.
    /// `bps(200)` is 2%.
    pub fn bps(&self, bps: i64) -> Money {
        Money(self.0 * bps / 10_000)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        let minor = (bd * BigDecimal::from(MINOR_PER_UNIT)).round(0);
        let value = minor
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(MINOR_PER_UNIT);
        write!(f, "{:.4}", bd)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Money::zero(), Money(0));
        assert_eq!(Money::from_minor(12345), Money(12345));
        assert_eq!(Money::from_major(1), Money(10_000));
        assert_eq!(Money::from_major(15_000), Money(150_000_000));
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("1").unwrap(), Money(10_000));
        assert_eq!(Money::from_str("1.5").unwrap(), Money(15_000));
        assert_eq!(Money::from_str("1.2345").unwrap(), Money(12_345));
        assert_eq!(Money::from_str("0.0001").unwrap(), Money(1));
        assert_eq!(Money::from_str(" 1000 ").unwrap(), Money::from_major(1000));
        assert_eq!(Money::from_str("-50").unwrap(), Money(-500_000));
    }

    #[test]
    fn test_from_str_rounding() {
        assert_eq!(Money::from_str("1.99999").unwrap(), Money(20_000));
        assert_eq!(Money::from_str("0.00001").unwrap(), Money(0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money(10_000).to_string(), "1.0000");
        assert_eq!(Money(12_345).to_string(), "1.2345");
        assert_eq!(Money(0).to_string(), "0.0000");
        assert_eq!(Money::from_major(13_980).to_string(), "13980.0000");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Money(10_000) + Money(5_000), Money(15_000));
        assert_eq!(Money(15_000) - Money(5_000), Money(10_000));

        let mut m = Money(10_000);
        m += Money(5_000);
        assert_eq!(m, Money(15_000));
        m -= Money(15_000);
        assert_eq!(m, Money::zero());
    }

    #[test]
    fn test_ordering() {
        assert!(Money(10_000) < Money(15_000));
        assert!(Money(10_000) <= Money(10_000));
        assert!(Money(-1) < Money::zero());
    }

    #[test]
    fn test_bps() {
        // 2% of 1000.0000 is 20.0000
        assert_eq!(Money::from_major(1000).bps(200), Money::from_major(20));
        // truncates toward zero
        assert_eq!(Money(33).bps(200), Money(0));
        assert_eq!(Money::zero().bps(200), Money::zero());
    }
}
