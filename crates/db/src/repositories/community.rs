//! Community repository for administrative operations.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};

use crate::entities::communities;

/// Community repository; used by the admin CLI, not exposed over HTTP.
#[derive(Debug, Clone)]
pub struct CommunityRepository {
    db: DatabaseConnection,
}

impl CommunityRepository {
    /// Creates a new community repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a community by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<communities::Model>, DbErr> {
        communities::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new community.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, name: &str) -> Result<communities::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let community = communities::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        community.insert(&self.db).await
    }

    /// Renames a community.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn rename(
        &self,
        community: communities::Model,
        name: &str,
    ) -> Result<communities::Model, DbErr> {
        let mut active: communities::ActiveModel = community.into();
        active.name = Set(name.to_string());
        active.updated_at = Set(chrono::Utc::now().into());
        active.update(&self.db).await
    }

    /// Deletes a community and, through cascading, its members and records.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn remove(&self, id: i64) -> Result<u64, DbErr> {
        let result = communities::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
