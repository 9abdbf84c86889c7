use sea_orm_migration::{prelude::*, schema::*};

static UQ_DEPARTMENT_CODE: &str = "uq-department-code";
static UQ_DEPARTMENT_NAME_LOWER: &str = "uq-department-name-lower";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(pk_auto(Department::Id))
                    .col(string_null(Department::Code))
                    .col(string_uniq(Department::Name))
                    .col(text_null(Department::Description))
                    // FK added by the faculty migration once that table exists
                    .col(integer_null(Department::HeadFacultyId))
                    .col(string_null(Department::Building))
                    .col(string_null(Department::ContactEmail))
                    .col(string_null(Department::ContactPhone))
                    .col(string(Department::Status).default("active"))
                    .col(timestamp(Department::CreatedAt))
                    .col(timestamp(Department::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_DEPARTMENT_CODE)
                    .table(Department::Table)
                    .col(Department::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Serializes find-or-create: concurrent inserts of the same name in
        // any casing collide here and the loser re-fetches the winner.
        manager
            .create_index(
                Index::create()
                    .name(UQ_DEPARTMENT_NAME_LOWER)
                    .table(Department::Table)
                    .col(Func::lower(Expr::col(Department::Name)))
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UQ_DEPARTMENT_NAME_LOWER)
                    .table(Department::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UQ_DEPARTMENT_CODE)
                    .table(Department::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Department {
    Table,
    Id,
    Code,
    Name,
    Description,
    HeadFacultyId,
    Building,
    ContactEmail,
    ContactPhone,
    Status,
    CreatedAt,
    UpdatedAt,
}
