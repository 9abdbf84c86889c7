//! HTTP controller endpoints for the EduPortal web API.
//!
//! This module contains Axum handlers for authentication and entity CRUD.
//! Controllers handle HTTP requests, delegate validation and business rules to
//! services, and shape the JSON envelope. They integrate with tower-sessions
//! for session management and use utoipa for OpenAPI documentation.

pub mod academic_year;
pub mod auth;
pub mod course;
pub mod dashboard;
pub mod department;
pub mod enrollment;
pub mod faculty;
pub mod student;
pub mod user;
