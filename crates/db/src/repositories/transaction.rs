//! Combined income/expense view for one member.
//!
//! The merged, date-ordered page cannot be built by paginating each table
//! independently; this repository fetches the full candidate set from both
//! tables and delegates ordering and slicing to the core ledger logic.

use sea_orm::{DatabaseConnection, DbErr};

use cashpool_core::ledger::{TransactionEntry, TransactionKind, merge_ordered, page_slice};

use super::{ExpenseRepository, IncomeRepository};
use crate::entities::{expenses, incomes};

/// Read-only aggregation over the income and expense tables.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    incomes: IncomeRepository,
    expenses: ExpenseRepository,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            incomes: IncomeRepository::new(db.clone()),
            expenses: ExpenseRepository::new(db),
        }
    }

    /// Counts all income and expense records owned by a member.
    ///
    /// The two id spaces are disjoint, so the total is a plain sum.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn count_for_member(&self, member_id: i64) -> Result<u64, DbErr> {
        let income_count = self.incomes.count_for_member(member_id).await?;
        let expense_count = self.expenses.count_for_member(member_id).await?;
        Ok(income_count + expense_count)
    }

    /// Returns one page of the merged, date-descending transaction view.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn page_for_member(
        &self,
        member_id: i64,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<TransactionEntry>, DbErr> {
        let incomes = self.incomes.all_for_member(member_id).await?;
        let expenses = self.expenses.all_for_member(member_id).await?;

        let incomes = incomes.into_iter().map(income_entry).collect();
        let expenses = expenses.into_iter().map(expense_entry).collect();

        Ok(page_slice(merge_ordered(incomes, expenses), offset, limit))
    }
}

fn income_entry(model: incomes::Model) -> TransactionEntry {
    TransactionEntry {
        id: model.id,
        kind: TransactionKind::Income,
        date: model.date,
        reason: model.reason,
        amount: model.amount,
        contribution_percentage: Some(model.contribution_percentage),
        created_at: model.created_at.to_utc(),
    }
}

fn expense_entry(model: expenses::Model) -> TransactionEntry {
    TransactionEntry {
        id: model.id,
        kind: TransactionKind::Expense,
        date: model.date,
        reason: model.reason,
        amount: model.amount,
        contribution_percentage: None,
        created_at: model.created_at.to_utc(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn now() -> sea_orm::prelude::DateTimeWithTimeZone {
        chrono::Utc::now().into()
    }

    #[test]
    fn test_income_entry_carries_percentage() {
        let entry = income_entry(incomes::Model {
            id: 4,
            member_id: 1,
            date: "2025-02-14".parse().unwrap(),
            reason: "Salary".to_string(),
            amount: dec!(1000.00),
            contribution_percentage: 75,
            created_at: now(),
            updated_at: now(),
        });

        assert_eq!(entry.kind, TransactionKind::Income);
        assert_eq!(entry.contribution_percentage, Some(75));
        assert_eq!(entry.amount, dec!(1000.00));
    }

    #[test]
    fn test_expense_entry_has_no_percentage() {
        let entry = expense_entry(expenses::Model {
            id: 9,
            member_id: 1,
            date: "2025-02-15".parse().unwrap(),
            reason: "Groceries".to_string(),
            amount: dec!(500.00),
            created_at: now(),
            updated_at: now(),
        });

        assert_eq!(entry.kind, TransactionKind::Expense);
        assert_eq!(entry.contribution_percentage, None);
    }
}
