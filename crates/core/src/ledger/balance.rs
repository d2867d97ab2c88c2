//! Contribution-weighted balance calculation.
//!
//! A member's balance is the contribution-weighted sum of their incomes minus
//! the plain sum of their expenses:
//!
//! `balance = Σ(income.amount × income.percentage / 100) − Σ(expense.amount)`
//!
//! All arithmetic is exact `Decimal`; no floating point anywhere.

use rust_decimal::Decimal;

/// Computes the shared contribution of a single income record.
///
/// `percentage` is the record's resolved contribution percentage (0..=100).
#[must_use]
pub fn contribution(amount: Decimal, percentage: i16) -> Decimal {
    amount * Decimal::from(percentage) / Decimal::ONE_HUNDRED
}

/// Sums the contributions of `(amount, percentage)` income pairs.
///
/// An empty iterator yields exactly zero.
#[must_use]
pub fn total_contributions<I>(incomes: I) -> Decimal
where
    I: IntoIterator<Item = (Decimal, i16)>,
{
    incomes
        .into_iter()
        .fold(Decimal::ZERO, |acc, (amount, percentage)| {
            acc + contribution(amount, percentage)
        })
}

/// Sums expense amounts. An empty iterator yields exactly zero.
#[must_use]
pub fn total_expenses<I>(expenses: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    expenses.into_iter().fold(Decimal::ZERO, |acc, a| acc + a)
}

/// Computes a member's all-time net balance.
#[must_use]
pub fn balance<I, E>(incomes: I, expenses: E) -> Decimal
where
    I: IntoIterator<Item = (Decimal, i16)>,
    E: IntoIterator<Item = Decimal>,
{
    total_contributions(incomes) - total_expenses(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_contribution_weighting() {
        assert_eq!(contribution(dec!(1000.00), 75), dec!(750.00));
        assert_eq!(contribution(dec!(500.00), 75), dec!(375.00));
        assert_eq!(contribution(dec!(100.00), 0), dec!(0));
        assert_eq!(contribution(dec!(100.00), 100), dec!(100.00));
    }

    #[test]
    fn test_contribution_has_no_penny_drift() {
        // 33% of 0.01 repeated many times must stay exact in aggregate.
        let incomes = std::iter::repeat_n((dec!(0.01), 33), 10_000);
        assert_eq!(total_contributions(incomes), dec!(33));
    }

    #[test]
    fn test_balance_scenario() {
        // Member default 75%: incomes 1000.00 + 500.00 at 75%,
        // expenses 300.00 + 200.00.
        let incomes = vec![(dec!(1000.00), 75), (dec!(500.00), 75)];
        let expenses = vec![dec!(300.00), dec!(200.00)];

        assert_eq!(balance(incomes, expenses), dec!(625.00));
    }

    #[test]
    fn test_zero_records_is_zero_balance() {
        assert_eq!(balance(Vec::new(), Vec::new()), Decimal::ZERO);
    }

    #[test]
    fn test_income_only_and_expense_only() {
        assert_eq!(balance(vec![(dec!(200.00), 50)], Vec::new()), dec!(100.00));
        assert_eq!(balance(Vec::new(), vec![dec!(40.00)]), dec!(-40.00));
    }

    #[test]
    fn test_balance_is_additive_over_disjoint_records() {
        let a = balance(vec![(dec!(1000.00), 75)], vec![dec!(300.00)]);
        let b = balance(vec![(dec!(500.00), 75)], vec![dec!(200.00)]);
        let combined = balance(
            vec![(dec!(1000.00), 75), (dec!(500.00), 75)],
            vec![dec!(300.00), dec!(200.00)],
        );

        assert_eq!(combined, a + b);
    }
}
