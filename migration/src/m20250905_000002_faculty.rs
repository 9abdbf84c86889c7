use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250905_000001_department::Department;

static IDX_FACULTY_DEPARTMENT_ID: &str = "idx-faculty-department_id";
static FK_FACULTY_DEPARTMENT_ID: &str = "fk-faculty-department_id";
static FK_DEPARTMENT_HEAD_FACULTY_ID: &str = "fk-department-head_faculty_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faculty::Table)
                    .if_not_exists()
                    .col(pk_auto(Faculty::Id))
                    .col(string_uniq(Faculty::FacultyId))
                    .col(string(Faculty::FullName))
                    .col(string_uniq(Faculty::Email))
                    .col(string_null(Faculty::Phone))
                    .col(integer(Faculty::DepartmentId))
                    .col(string(Faculty::Position))
                    .col(string_null(Faculty::Specialization))
                    .col(string(Faculty::EmploymentType).default("full-time"))
                    .col(string(Faculty::Status).default("active"))
                    .col(date(Faculty::HireDate))
                    .col(date_null(Faculty::DateOfBirth))
                    .col(text_null(Faculty::Address))
                    .col(string_null(Faculty::EmergencyContact))
                    .col(string_null(Faculty::EmergencyPhone))
                    .col(text_null(Faculty::Qualifications))
                    .col(integer_null(Faculty::YearsOfExperience))
                    .col(timestamp(Faculty::CreatedAt))
                    .col(timestamp(Faculty::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACULTY_DEPARTMENT_ID)
                    .table(Faculty::Table)
                    .col(Faculty::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FACULTY_DEPARTMENT_ID)
                    .from_tbl(Faculty::Table)
                    .from_col(Faculty::DepartmentId)
                    .to_tbl(Department::Table)
                    .to_col(Department::Id)
                    .to_owned(),
            )
            .await?;

        // Department head reference deferred to here: both tables now exist.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DEPARTMENT_HEAD_FACULTY_ID)
                    .from_tbl(Department::Table)
                    .from_col(Department::HeadFacultyId)
                    .to_tbl(Faculty::Table)
                    .to_col(Faculty::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DEPARTMENT_HEAD_FACULTY_ID)
                    .table(Department::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FACULTY_DEPARTMENT_ID)
                    .table(Faculty::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FACULTY_DEPARTMENT_ID)
                    .table(Faculty::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Faculty::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Faculty {
    Table,
    Id,
    FacultyId,
    FullName,
    Email,
    Phone,
    DepartmentId,
    Position,
    Specialization,
    EmploymentType,
    Status,
    HireDate,
    DateOfBirth,
    Address,
    EmergencyContact,
    EmergencyPhone,
    Qualifications,
    YearsOfExperience,
    CreatedAt,
    UpdatedAt,
}
