//! Chronological merge of income and expense records.
//!
//! Incomes and expenses live in separate tables but are presented as one
//! date-ordered sequence. Paginating each table independently and
//! concatenating would misorder interleaved dates across page boundaries, so
//! the full candidate set is merged first and sliced afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// The record type a merged entry originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// An income record, weighted by its contribution percentage.
    Income,
    /// An expense record, never weighted.
    Expense,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// One entry in the merged transaction view.
///
/// Income entries always carry their resolved contribution percentage;
/// expense entries serialize it as an explicit `null`.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionEntry {
    /// Record id within its own table (income and expense id spaces are disjoint).
    pub id: i64,
    /// Record type tag.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Transaction date.
    pub date: NaiveDate,
    /// Reason text.
    pub reason: String,
    /// Monetary amount.
    pub amount: Decimal,
    /// Resolved contribution percentage; `None` for expenses.
    pub contribution_percentage: Option<i16>,
    /// Creation timestamp, used as the deterministic tie-breaker.
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

/// Merges income and expense entries into one sequence ordered by `date`
/// descending.
///
/// Same-date ties are broken by creation order descending (`created_at`,
/// then `id`), so the ordering is deterministic for interleaved dates.
#[must_use]
pub fn merge_ordered(
    incomes: Vec<TransactionEntry>,
    expenses: Vec<TransactionEntry>,
) -> Vec<TransactionEntry> {
    let mut entries = incomes;
    entries.extend(expenses);
    entries.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| b.id.cmp(&a.id))
    });
    entries
}

/// Applies an offset/limit window to an ordered entry list.
///
/// An offset beyond the end yields an empty page, never an error.
#[must_use]
pub fn page_slice(entries: Vec<TransactionEntry>, offset: u64, limit: u64) -> Vec<TransactionEntry> {
    entries
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn entry(
        id: i64,
        kind: TransactionKind,
        date: &str,
        reason: &str,
        amount: Decimal,
        percentage: Option<i16>,
        created_secs: i64,
    ) -> TransactionEntry {
        TransactionEntry {
            id,
            kind,
            date: date.parse().unwrap(),
            reason: reason.to_string(),
            amount,
            contribution_percentage: percentage,
            created_at: Utc.timestamp_opt(created_secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_interleaved_dates_merge_in_date_desc_order() {
        let incomes = vec![
            entry(1, TransactionKind::Income, "2025-02-14", "Salary", dec!(1000.00), Some(75), 10),
            entry(2, TransactionKind::Income, "2025-02-13", "Bonus", dec!(200.00), Some(75), 20),
        ];
        let expenses = vec![entry(
            1,
            TransactionKind::Expense,
            "2025-02-15",
            "Groceries",
            dec!(500.00),
            None,
            30,
        )];

        let merged = merge_ordered(incomes, expenses);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].kind, TransactionKind::Expense);
        assert_eq!(merged[0].reason, "Groceries");
        assert_eq!(merged[1].kind, TransactionKind::Income);
        assert_eq!(merged[1].reason, "Salary");
        assert_eq!(merged[2].kind, TransactionKind::Income);
        assert_eq!(merged[2].reason, "Bonus");
    }

    #[test]
    fn test_same_date_ties_break_on_creation_order_desc() {
        let incomes = vec![
            entry(5, TransactionKind::Income, "2025-03-01", "first", dec!(10), Some(50), 100),
            entry(6, TransactionKind::Income, "2025-03-01", "third", dec!(10), Some(50), 300),
        ];
        let expenses = vec![entry(
            9,
            TransactionKind::Expense,
            "2025-03-01",
            "second",
            dec!(10),
            None,
            200,
        )];

        let merged = merge_ordered(incomes, expenses);
        let reasons: Vec<&str> = merged.iter().map(|e| e.reason.as_str()).collect();
        assert_eq!(reasons, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_page_slice_returns_exact_window() {
        let entries: Vec<TransactionEntry> = (0..30)
            .map(|i| {
                entry(
                    i,
                    TransactionKind::Income,
                    "2025-01-01",
                    "r",
                    dec!(1),
                    Some(50),
                    1000 - i,
                )
            })
            .collect();
        let sorted = merge_ordered(entries, Vec::new());

        // Page 3 at per_page 10 is the final 10 entries, no fewer, no more.
        let page = page_slice(sorted.clone(), 20, 10);
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].id, sorted[20].id);
        assert_eq!(page[9].id, sorted[29].id);
    }

    #[test]
    fn test_page_slice_beyond_range_is_empty() {
        let entries = vec![entry(
            1,
            TransactionKind::Income,
            "2025-01-01",
            "r",
            dec!(1),
            Some(50),
            0,
        )];
        assert!(page_slice(entries, 24_950, 25).is_empty());
    }

    #[test]
    fn test_expense_serializes_explicit_null_percentage() {
        let e = entry(
            3,
            TransactionKind::Expense,
            "2025-02-15",
            "Groceries",
            dec!(500.00),
            None,
            0,
        );
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "expense");
        assert!(json["contribution_percentage"].is_null());
        assert_eq!(json["amount"], "500.00");
    }
}
