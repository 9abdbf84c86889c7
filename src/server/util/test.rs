//! Shared setup for in-crate repository and service tests.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema};

/// Connect to a fresh in-memory SQLite database with every entity table created
pub async fn setup_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    let schema = Schema::new(DbBackend::Sqlite);

    let stmts = vec![
        schema.create_table_from_entity(entity::prelude::Department),
        schema.create_table_from_entity(entity::prelude::Faculty),
        schema.create_table_from_entity(entity::prelude::Student),
        schema.create_table_from_entity(entity::prelude::Course),
        schema.create_table_from_entity(entity::prelude::Enrollment),
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::AcademicYear),
    ];

    for stmt in stmts {
        db.execute(&stmt).await?;
    }

    Ok(db)
}
