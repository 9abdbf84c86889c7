use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250905_000003_student::Student, m20250905_000004_course::Course};

static UQ_ENROLLMENT_STUDENT_COURSE: &str = "uq-enrollment-student_id-course_id";
static IDX_ENROLLMENT_COURSE_ID: &str = "idx-enrollment-course_id";
static FK_ENROLLMENT_STUDENT_ID: &str = "fk-enrollment-student_id";
static FK_ENROLLMENT_COURSE_ID: &str = "fk-enrollment-course_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(integer(Enrollment::StudentId))
                    .col(integer(Enrollment::CourseId))
                    .col(string_null(Enrollment::Grade))
                    .col(string(Enrollment::Status).default("enrolled"))
                    .col(timestamp(Enrollment::CreatedAt))
                    .col(timestamp(Enrollment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_ENROLLMENT_STUDENT_COURSE)
                    .table(Enrollment::Table)
                    .col(Enrollment::StudentId)
                    .col(Enrollment::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ENROLLMENT_COURSE_ID)
                    .table(Enrollment::Table)
                    .col(Enrollment::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENROLLMENT_STUDENT_ID)
                    .from_tbl(Enrollment::Table)
                    .from_col(Enrollment::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // No cascade from course: the deletion guard must see these rows.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENROLLMENT_COURSE_ID)
                    .from_tbl(Enrollment::Table)
                    .from_col(Enrollment::CourseId)
                    .to_tbl(Course::Table)
                    .to_col(Course::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENROLLMENT_COURSE_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENROLLMENT_STUDENT_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ENROLLMENT_COURSE_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UQ_ENROLLMENT_STUDENT_COURSE)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    Table,
    Id,
    StudentId,
    CourseId,
    Grade,
    Status,
    CreatedAt,
    UpdatedAt,
}
