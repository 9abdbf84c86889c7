pub use sea_orm_migration::prelude::*;

mod m20250905_000001_department;
mod m20250905_000002_faculty;
mod m20250905_000003_student;
mod m20250905_000004_course;
mod m20250905_000005_enrollment;
mod m20250905_000006_user;
mod m20250905_000007_academic_year;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250905_000001_department::Migration),
            Box::new(m20250905_000002_faculty::Migration),
            Box::new(m20250905_000003_student::Migration),
            Box::new(m20250905_000004_course::Migration),
            Box::new(m20250905_000005_enrollment::Migration),
            Box::new(m20250905_000006_user::Migration),
            Box::new(m20250905_000007_academic_year::Migration),
        ]
    }
}
