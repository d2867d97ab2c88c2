//! Member repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::entities::members;

/// Member repository for lookups and administration.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    db: DatabaseConnection,
}

impl MemberRepository {
    /// Creates a new member repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a member by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<members::Model>, DbErr> {
        members::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds a member by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<members::Model>, DbErr> {
        members::Entity::find()
            .filter(members::Column::Username.eq(username))
            .one(&self.db)
            .await
    }

    /// Finds a member by ID, requiring that they belong to the given
    /// community.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_in_community(
        &self,
        member_id: i64,
        community_id: i64,
    ) -> Result<Option<members::Model>, DbErr> {
        members::Entity::find()
            .filter(members::Column::Id.eq(member_id))
            .filter(members::Column::CommunityId.eq(community_id))
            .one(&self.db)
            .await
    }

    /// Resolves a member's owning community, or `None` if the member does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn community_of(&self, member_id: i64) -> Result<Option<i64>, DbErr> {
        Ok(self
            .find_by_id(member_id)
            .await?
            .map(|member| member.community_id))
    }

    /// Creates a new member in a community.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        community_id: i64,
        name: &str,
        username: &str,
        password_hash: &str,
        contribution_percentage: i16,
    ) -> Result<members::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let member = members::ActiveModel {
            community_id: Set(community_id),
            name: Set(name.to_string()),
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            contribution_percentage: Set(contribution_percentage),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        member.insert(&self.db).await
    }

    /// Updates a member's default contribution percentage.
    ///
    /// Already-created income records keep the percentage resolved at their
    /// creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn set_contribution_percentage(
        &self,
        member: members::Model,
        contribution_percentage: i16,
    ) -> Result<members::Model, DbErr> {
        let mut active: members::ActiveModel = member.into();
        active.contribution_percentage = Set(contribution_percentage);
        active.updated_at = Set(chrono::Utc::now().into());
        active.update(&self.db).await
    }
}
