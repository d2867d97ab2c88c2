//! Expense repository for database operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::expenses;

/// Partial update for an expense record; `None` fields keep their stored
/// values.
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    /// New transaction date.
    pub date: Option<NaiveDate>,
    /// New reason text.
    pub reason: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
}

/// Expense repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an expense record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<expenses::Model>, DbErr> {
        expenses::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new expense record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        member_id: i64,
        date: NaiveDate,
        reason: &str,
        amount: Decimal,
    ) -> Result<expenses::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let expense = expenses::ActiveModel {
            member_id: Set(member_id),
            date: Set(date),
            reason: Set(reason.to_string()),
            amount: Set(amount),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        expense.insert(&self.db).await
    }

    /// Applies a partial update to an expense record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        expense: expenses::Model,
        changes: ExpenseChanges,
    ) -> Result<expenses::Model, DbErr> {
        let mut active: expenses::ActiveModel = expense.into();
        if let Some(date) = changes.date {
            active.date = Set(date);
        }
        if let Some(reason) = changes.reason {
            active.reason = Set(reason);
        }
        if let Some(amount) = changes.amount {
            active.amount = Set(amount);
        }
        active.updated_at = Set(chrono::Utc::now().into());
        active.update(&self.db).await
    }

    /// Deletes an expense record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        expenses::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    /// Returns all expense records owned by a member.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn all_for_member(&self, member_id: i64) -> Result<Vec<expenses::Model>, DbErr> {
        expenses::Entity::find()
            .filter(expenses::Column::MemberId.eq(member_id))
            .all(&self.db)
            .await
    }

    /// Counts the expense records owned by a member.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_for_member(&self, member_id: i64) -> Result<u64, DbErr> {
        expenses::Entity::find()
            .filter(expenses::Column::MemberId.eq(member_id))
            .count(&self.db)
            .await
    }
}
