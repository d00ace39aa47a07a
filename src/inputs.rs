use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;
use crate::types::GpaError;

/// Largest credit weight a single course may carry.
pub const MAX_CREDIT_HOURS: Decimal = dec!(1000);

/// Trait for converting user input into validated `Decimal` credit hours.
///
/// Catalog files in the wild store credit hours as strings ("3"), so string
/// input is first class. Every conversion goes through [`check_credit_hours`].
pub trait IntoCreditHours {
    fn into_credit_hours(self) -> Result<Decimal, GpaError>;
}

/// Credit hours must lie in `0..=MAX_CREDIT_HOURS`.
pub fn check_credit_hours(value: Decimal) -> Result<Decimal, GpaError> {
    if value < Decimal::ZERO {
        return Err(GpaError::InvalidInput(format!(
            "Credit hours must be non-negative, got {}",
            value
        )));
    }
    if value > MAX_CREDIT_HOURS {
        return Err(GpaError::InvalidInput(format!(
            "Credit hours must be at most {}, got {}",
            MAX_CREDIT_HOURS, value
        )));
    }
    Ok(value)
}

impl IntoCreditHours for Decimal {
    fn into_credit_hours(self) -> Result<Decimal, GpaError> {
        check_credit_hours(self)
    }
}

macro_rules! impl_into_credit_hours_int {
    ($($t:ty),*) => {
        $(
            impl IntoCreditHours for $t {
                fn into_credit_hours(self) -> Result<Decimal, GpaError> {
                    check_credit_hours(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_credit_hours_int!(i32, u32, usize);

impl IntoCreditHours for &str {
    fn into_credit_hours(self) -> Result<Decimal, GpaError> {
        let value = Decimal::from_str(self.trim())
            .map_err(|e| GpaError::InvalidInput(format!("Invalid credit hours '{}': {}", self, e)))?;
        check_credit_hours(value)
    }
}

impl IntoCreditHours for String {
    fn into_credit_hours(self) -> Result<Decimal, GpaError> {
        self.as_str().into_credit_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(3u32.into_credit_hours().unwrap(), dec!(3));
        assert_eq!("1".into_credit_hours().unwrap(), dec!(1));
        assert_eq!(" 1.5 ".to_string().into_credit_hours().unwrap(), dec!(1.5));
        assert_eq!(0usize.into_credit_hours().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_bad_strings_are_invalid_input() {
        assert!(matches!("three".into_credit_hours(), Err(GpaError::InvalidInput(_))));
        assert!(matches!("NaN".into_credit_hours(), Err(GpaError::InvalidInput(_))));
    }

    #[test]
    fn test_range_is_enforced() {
        assert!(matches!((-2).into_credit_hours(), Err(GpaError::InvalidInput(_))));
        assert!(matches!("-0.5".into_credit_hours(), Err(GpaError::InvalidInput(_))));
        assert_eq!(MAX_CREDIT_HOURS.into_credit_hours().unwrap(), dec!(1000));
        assert!(matches!(1001u32.into_credit_hours(), Err(GpaError::InvalidInput(_))));
        assert!(matches!(
            "79228162514264337593543950335".into_credit_hours(),
            Err(GpaError::InvalidInput(_))
        ));
    }
}
