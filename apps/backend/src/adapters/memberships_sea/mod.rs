//! SeaORM adapter for project ownership and membership - generic over
//! ConnectionTrait.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{project_users, projects};
use crate::errors::domain::StoreError;
use crate::repos::memberships::{MembershipStore, ProjectMembership};

pub mod dto;

pub use dto::{MembershipUpsert, ProjectCreate};

// Adapter functions return DbErr; callers map to StoreError/AppError via From<DbErr>.

pub async fn create_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProjectCreate,
) -> Result<projects::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let project = projects::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        owner_id: Set(dto.owner_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    project.insert(conn).await
}

pub async fn find_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
) -> Result<Option<projects::Model>, sea_orm::DbErr> {
    projects::Entity::find_by_id(project_id).one(conn).await
}

pub async fn is_project_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
    user_id: &str,
) -> Result<bool, sea_orm::DbErr> {
    let count = projects::Entity::find()
        .filter(projects::Column::Id.eq(project_id))
        .filter(projects::Column::OwnerId.eq(user_id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
    user_id: &str,
) -> Result<Option<project_users::Model>, sea_orm::DbErr> {
    project_users::Entity::find()
        .filter(project_users::Column::ProjectId.eq(project_id))
        .filter(project_users::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

pub async fn list_members<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
) -> Result<Vec<project_users::Model>, sea_orm::DbErr> {
    project_users::Entity::find()
        .filter(project_users::Column::ProjectId.eq(project_id))
        .order_by_asc(project_users::Column::CreatedAt)
        .order_by_asc(project_users::Column::Id)
        .all(conn)
        .await
}

/// Insert the membership, or change the role if the pair already exists.
pub async fn upsert_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MembershipUpsert,
) -> Result<project_users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    match find_membership(conn, dto.project_id, &dto.user_id).await? {
        Some(existing) => {
            let mut active: project_users::ActiveModel = existing.into();
            active.role = Set(dto.role);
            active.updated_at = Set(now);
            active.update(conn).await
        }
        None => {
            let membership = project_users::ActiveModel {
                id: NotSet,
                project_id: Set(dto.project_id),
                user_id: Set(dto.user_id),
                role: Set(dto.role),
                created_at: Set(now),
                updated_at: Set(now),
            };
            membership.insert(conn).await
        }
    }
}

/// Returns whether a row was deleted.
pub async fn remove_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
    user_id: &str,
) -> Result<bool, sea_orm::DbErr> {
    let result = project_users::Entity::delete_many()
        .filter(project_users::Column::ProjectId.eq(project_id))
        .filter(project_users::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}

/// [`MembershipStore`] backed by the `projects` and `project_users` tables.
#[derive(Debug, Clone)]
pub struct SeaMembershipStore {
    db: DatabaseConnection,
}

impl SeaMembershipStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MembershipStore for SeaMembershipStore {
    type ProjectId = i64;
    type UserId = str;

    async fn is_owner(&self, project_id: &i64, user_id: &str) -> Result<bool, StoreError> {
        Ok(is_project_owner(&self.db, *project_id, user_id).await?)
    }

    async fn find_membership(
        &self,
        project_id: &i64,
        user_id: &str,
    ) -> Result<Option<ProjectMembership>, StoreError> {
        let membership = find_membership(&self.db, *project_id, user_id).await?;
        Ok(membership.map(ProjectMembership::from))
    }
}
