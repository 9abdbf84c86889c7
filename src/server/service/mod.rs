//! Service layer for business logic and orchestration.
//!
//! Services implement the rules that span more than one table: business-key
//! uniqueness with self-exclusion, deletion guards over dependent records,
//! department resolution for courses, the single-current academic year, and
//! credential verification. Every check-then-write sequence runs inside a
//! transaction with the schema's unique indexes as the concurrency backstop.

pub mod academic_year;
pub mod auth;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod faculty;
pub mod student;
pub mod user;
pub mod validate;
