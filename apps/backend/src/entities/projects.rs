use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Creator of the project; implicit owner regardless of membership rows
    #[sea_orm(column_name = "owner_id")]
    pub owner_id: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_users::Entity")]
    ProjectUsers,
}

impl Related<super::project_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
