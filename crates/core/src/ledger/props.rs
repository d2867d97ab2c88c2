//! Property-based tests for balance and aggregation.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::{balance, contribution, total_contributions};
use super::transactions::{TransactionEntry, TransactionKind, merge_ordered, page_slice};

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate contribution percentages (0 to 100).
fn percentage() -> impl Strategy<Value = i16> {
    0i16..=100
}

/// Strategy to generate income (amount, percentage) pairs.
fn incomes() -> impl Strategy<Value = Vec<(Decimal, i16)>> {
    prop::collection::vec((positive_amount(), percentage()), 0..20)
}

/// Strategy to generate expense amounts.
fn expenses() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(positive_amount(), 0..20)
}

/// Strategy to generate merge-ready entries with arbitrary dates and
/// creation timestamps.
fn entries(kind: TransactionKind) -> impl Strategy<Value = Vec<TransactionEntry>> {
    prop::collection::vec(
        (1i64..10_000, 0u32..3650, 0i64..1_000_000, positive_amount()),
        0..30,
    )
    .prop_map(move |rows| {
        rows.into_iter()
            .map(|(id, day_offset, created_secs, amount)| TransactionEntry {
                id,
                kind,
                date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
                    + chrono::Days::new(u64::from(day_offset)),
                reason: "generated".to_string(),
                amount,
                contribution_percentage: match kind {
                    TransactionKind::Income => Some(50),
                    TransactionKind::Expense => None,
                },
                created_at: Utc.timestamp_opt(created_secs, 0).unwrap(),
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A single contribution never exceeds the income amount and is never
    /// negative.
    #[test]
    fn prop_contribution_bounded_by_amount(amount in positive_amount(), pct in percentage()) {
        let c = contribution(amount, pct);
        prop_assert!(c >= Decimal::ZERO);
        prop_assert!(c <= amount);
    }

    /// Balance is linear: computing over the union of two disjoint record
    /// sets equals the sum of the two balances.
    #[test]
    fn prop_balance_is_linear(
        a_inc in incomes(), a_exp in expenses(),
        b_inc in incomes(), b_exp in expenses(),
    ) {
        let separate = balance(a_inc.clone(), a_exp.clone()) + balance(b_inc.clone(), b_exp.clone());

        let mut union_inc = a_inc;
        union_inc.extend(b_inc);
        let mut union_exp = a_exp;
        union_exp.extend(b_exp);

        prop_assert_eq!(balance(union_inc, union_exp), separate);
    }

    /// Balance does not depend on record order.
    #[test]
    fn prop_balance_is_order_independent(inc in incomes(), exp in expenses()) {
        let mut rev_inc = inc.clone();
        rev_inc.reverse();
        let mut rev_exp = exp.clone();
        rev_exp.reverse();

        prop_assert_eq!(balance(inc, exp), balance(rev_inc, rev_exp));
    }

    /// Contributions of all-zero percentages vanish.
    #[test]
    fn prop_zero_percentage_contributes_nothing(amounts in expenses()) {
        let zeroed: Vec<(Decimal, i16)> = amounts.into_iter().map(|a| (a, 0)).collect();
        prop_assert_eq!(total_contributions(zeroed), Decimal::ZERO);
    }

    /// Merging preserves every entry and yields date-descending order with
    /// a deterministic tie-break.
    #[test]
    fn prop_merge_is_ordered_and_lossless(
        inc in entries(TransactionKind::Income),
        exp in entries(TransactionKind::Expense),
    ) {
        let expected_len = inc.len() + exp.len();
        let merged = merge_ordered(inc, exp);

        prop_assert_eq!(merged.len(), expected_len);
        for pair in merged.windows(2) {
            let key = |e: &TransactionEntry| (e.date, e.created_at, e.id);
            prop_assert!(key(&pair[0]) >= key(&pair[1]));
        }
    }

    /// Walking every page in sequence reproduces the full merged list.
    #[test]
    fn prop_pages_partition_the_full_list(
        inc in entries(TransactionKind::Income),
        exp in entries(TransactionKind::Expense),
        per_page in 1u64..10,
    ) {
        let merged = merge_ordered(inc, exp);
        let total = merged.len() as u64;

        let mut walked = Vec::new();
        let mut page = 0u64;
        loop {
            let slice = page_slice(merged.clone(), page * per_page, per_page);
            if slice.is_empty() {
                break;
            }
            walked.extend(slice.into_iter().map(|e| (e.id, e.kind)));
            page += 1;
        }

        prop_assert_eq!(walked.len() as u64, total);
        let expected: Vec<(i64, TransactionKind)> =
            merged.into_iter().map(|e| (e.id, e.kind)).collect();
        prop_assert_eq!(walked, expected);
    }
}
