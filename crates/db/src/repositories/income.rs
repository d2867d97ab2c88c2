//! Income repository for database operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::incomes;

/// Partial update for an income record; `None` fields keep their stored
/// values.
#[derive(Debug, Clone, Default)]
pub struct IncomeChanges {
    /// New transaction date.
    pub date: Option<NaiveDate>,
    /// New reason text.
    pub reason: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New contribution percentage.
    pub contribution_percentage: Option<i16>,
}

/// Income repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct IncomeRepository {
    db: DatabaseConnection,
}

impl IncomeRepository {
    /// Creates a new income repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an income record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<incomes::Model>, DbErr> {
        incomes::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new income record with its resolved contribution
    /// percentage.
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
        contribution_percentage: i16,
    ) -> Result<incomes::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let income = incomes::ActiveModel {
            member_id: Set(member_id),
            date: Set(date),
            reason: Set(reason.to_string()),
            amount: Set(amount),
            contribution_percentage: Set(contribution_percentage),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        income.insert(&self.db).await
    }

    /// Applies a partial update to an income record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        income: incomes::Model,
        changes: IncomeChanges,
    ) -> Result<incomes::Model, DbErr> {
        let mut active: incomes::ActiveModel = income.into();
        if let Some(date) = changes.date {
            active.date = Set(date);
        }
        if let Some(reason) = changes.reason {
            active.reason = Set(reason);
        }
        if let Some(amount) = changes.amount {
            active.amount = Set(amount);
        }
        if let Some(percentage) = changes.contribution_percentage {
            active.contribution_percentage = Set(percentage);
        }
        active.updated_at = Set(chrono::Utc::now().into());
        active.update(&self.db).await
    }

    /// Deletes an income record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        incomes::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    /// Returns all income records owned by a member.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn all_for_member(&self, member_id: i64) -> Result<Vec<incomes::Model>, DbErr> {
        incomes::Entity::find()
            .filter(incomes::Column::MemberId.eq(member_id))
            .all(&self.db)
            .await
    }

    /// Counts the income records owned by a member.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_for_member(&self, member_id: i64) -> Result<u64, DbErr> {
        incomes::Entity::find()
            .filter(incomes::Column::MemberId.eq(member_id))
            .count(&self.db)
            .await
    }
}
