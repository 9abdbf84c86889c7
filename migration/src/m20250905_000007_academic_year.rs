use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACADEMIC_YEAR_IS_CURRENT: &str = "idx-academic_year-is_current";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademicYear::Table)
                    .if_not_exists()
                    .col(pk_auto(AcademicYear::Id))
                    .col(string_uniq(AcademicYear::YearName))
                    .col(date(AcademicYear::StartDate))
                    .col(date(AcademicYear::EndDate))
                    .col(string(AcademicYear::Semester))
                    .col(boolean(AcademicYear::IsCurrent).default(false))
                    .col(string(AcademicYear::Status).default("active"))
                    .col(timestamp(AcademicYear::CreatedAt))
                    .col(timestamp(AcademicYear::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACADEMIC_YEAR_IS_CURRENT)
                    .table(AcademicYear::Table)
                    .col(AcademicYear::IsCurrent)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACADEMIC_YEAR_IS_CURRENT)
                    .table(AcademicYear::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AcademicYear::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AcademicYear {
    Table,
    Id,
    YearName,
    StartDate,
    EndDate,
    Semester,
    IsCurrent,
    Status,
    CreatedAt,
    UpdatedAt,
}
