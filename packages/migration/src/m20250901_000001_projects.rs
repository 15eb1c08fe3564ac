use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Name,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ProjectUsers {
    Table,
    Id,
    ProjectId,
    UserId,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Projects::Name).string().not_null())
                    .col(ColumnDef::new(Projects::OwnerId).string().not_null())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Ownership lookups filter on (id, owner_id)
        manager
            .create_index(
                Index::create()
                    .name("ix_projects_owner_id")
                    .table(Projects::Table)
                    .col(Projects::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectUsers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(ProjectUsers::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectUsers::UserId).string().not_null())
                    .col(ColumnDef::new(ProjectUsers::Role).string_len(16).not_null())
                    .col(
                        ColumnDef::new(ProjectUsers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectUsers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_users_project")
                            .from(ProjectUsers::Table, ProjectUsers::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One role per (project, user)
        manager
            .create_index(
                Index::create()
                    .name("ux_project_users_project_user")
                    .table(ProjectUsers::Table)
                    .col(ProjectUsers::ProjectId)
                    .col(ProjectUsers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ux_project_users_project_user")
                    .table(ProjectUsers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectUsers::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_projects_owner_id")
                    .table(Projects::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}
