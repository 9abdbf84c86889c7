use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250905_000001_department::Department, m20250905_000002_faculty::Faculty};

static IDX_COURSE_DEPARTMENT_ID: &str = "idx-course-department_id";
static IDX_COURSE_FACULTY_ID: &str = "idx-course-faculty_id";
static FK_COURSE_DEPARTMENT_ID: &str = "fk-course-department_id";
static FK_COURSE_FACULTY_ID: &str = "fk-course-faculty_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string_uniq(Course::CourseCode))
                    .col(string(Course::CourseName))
                    .col(text_null(Course::Description))
                    .col(integer(Course::Credits).default(3))
                    .col(integer_null(Course::DepartmentId))
                    .col(integer_null(Course::FacultyId))
                    .col(string_null(Course::Semester))
                    .col(integer_null(Course::YearLevel))
                    .col(string(Course::Status).default("active"))
                    .col(timestamp(Course::CreatedAt))
                    .col(timestamp(Course::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COURSE_DEPARTMENT_ID)
                    .table(Course::Table)
                    .col(Course::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COURSE_FACULTY_ID)
                    .table(Course::Table)
                    .col(Course::FacultyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COURSE_DEPARTMENT_ID)
                    .from_tbl(Course::Table)
                    .from_col(Course::DepartmentId)
                    .to_tbl(Department::Table)
                    .to_col(Department::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COURSE_FACULTY_ID)
                    .from_tbl(Course::Table)
                    .from_col(Course::FacultyId)
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
                    .name(FK_COURSE_FACULTY_ID)
                    .table(Course::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COURSE_DEPARTMENT_ID)
                    .table(Course::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COURSE_FACULTY_ID)
                    .table(Course::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COURSE_DEPARTMENT_ID)
                    .table(Course::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    CourseCode,
    CourseName,
    Description,
    Credits,
    DepartmentId,
    FacultyId,
    Semester,
    YearLevel,
    Status,
    CreatedAt,
    UpdatedAt,
}
