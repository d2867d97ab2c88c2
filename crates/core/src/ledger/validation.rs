//! Business rule validation for record fields.
//!
//! Each rule returns the validated value so handlers can bind the cleaned-up
//! form directly.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use cashpool_shared::{AppError, AppResult};

/// Validates that an amount is strictly positive.
pub fn validate_amount(amount: Decimal) -> AppResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(AppError::Validation(
            "Amount must be greater than zero".to_string(),
        ));
    }
    Ok(amount)
}

/// Validates that a reason is non-empty after trimming.
pub fn validate_reason(reason: &str) -> AppResult<String> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Reason is required".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Validates a `YYYY-MM-DD` date string. A missing date defaults to today.
pub fn validate_date(date: Option<&str>) -> AppResult<NaiveDate> {
    match date {
        None => Ok(Utc::now().date_naive()),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            AppError::Validation("Invalid date format. Use YYYY-MM-DD".to_string())
        }),
    }
}

/// Validates a contribution percentage when present (0..=100).
pub fn validate_percentage(percentage: Option<i16>) -> AppResult<Option<i16>> {
    match percentage {
        None => Ok(None),
        Some(value) if (0..=100).contains(&value) => Ok(Some(value)),
        Some(_) => Err(AppError::Validation(
            "Contribution percentage must be between 0 and 100".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0.01))]
    #[case(dec!(1000.00))]
    fn test_positive_amounts_pass(#[case] amount: Decimal) {
        assert_eq!(validate_amount(amount).unwrap(), amount);
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-0.01))]
    #[case(dec!(-100))]
    fn test_non_positive_amounts_fail(#[case] amount: Decimal) {
        assert!(matches!(
            validate_amount(amount),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_reason_is_trimmed() {
        assert_eq!(validate_reason("  Salary  ").unwrap(), "Salary");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_blank_reason_fails(#[case] reason: &str) {
        assert!(matches!(
            validate_reason(reason),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_date_parses_iso_format() {
        assert_eq!(
            validate_date(Some("2025-02-14")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
        );
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        assert_eq!(validate_date(None).unwrap(), Utc::now().date_naive());
    }

    #[rstest]
    #[case("14-02-2025")]
    #[case("2025/02/14")]
    #[case("2025-13-01")]
    #[case("not-a-date")]
    fn test_bad_date_formats_fail(#[case] raw: &str) {
        assert!(matches!(
            validate_date(Some(raw)),
            Err(AppError::Validation(_))
        ));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(0), Some(0))]
    #[case(Some(75), Some(75))]
    #[case(Some(100), Some(100))]
    fn test_percentage_in_range(#[case] input: Option<i16>, #[case] expected: Option<i16>) {
        assert_eq!(validate_percentage(input).unwrap(), expected);
    }

    #[rstest]
    #[case(-1)]
    #[case(101)]
    fn test_percentage_out_of_range_fails(#[case] value: i16) {
        assert!(matches!(
            validate_percentage(Some(value)),
            Err(AppError::Validation(_))
        ));
    }
}
