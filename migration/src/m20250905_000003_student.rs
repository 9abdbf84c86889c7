use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250905_000001_department::Department;

static IDX_STUDENT_DEPARTMENT_ID: &str = "idx-student-department_id";
static IDX_STUDENT_STATUS: &str = "idx-student-status";
static FK_STUDENT_DEPARTMENT_ID: &str = "fk-student-department_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_uniq(Student::StudentId))
                    .col(string(Student::FullName))
                    .col(string_uniq(Student::Email))
                    .col(string_null(Student::Phone))
                    .col(integer_null(Student::DepartmentId))
                    .col(integer(Student::YearLevel))
                    .col(string(Student::Status).default("active"))
                    .col(date(Student::EnrollmentDate))
                    .col(date_null(Student::DateOfBirth))
                    .col(text_null(Student::Address))
                    .col(string_null(Student::GuardianName))
                    .col(string_null(Student::GuardianPhone))
                    .col(timestamp(Student::CreatedAt))
                    .col(timestamp(Student::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_DEPARTMENT_ID)
                    .table(Student::Table)
                    .col(Student::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_STATUS)
                    .table(Student::Table)
                    .col(Student::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_DEPARTMENT_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::DepartmentId)
                    .to_tbl(Department::Table)
                    .to_col(Department::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_DEPARTMENT_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDENT_STATUS)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDENT_DEPARTMENT_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    StudentId,
    FullName,
    Email,
    Phone,
    DepartmentId,
    YearLevel,
    Status,
    EnrollmentDate,
    DateOfBirth,
    Address,
    GuardianName,
    GuardianPhone,
    CreatedAt,
    UpdatedAt,
}
