//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// Constructs an Axum router with authentication, entity CRUD, enrollment,
/// and dashboard endpoints registered. Each endpoint is annotated with an
/// OpenAPI specification via utoipa, collected into a unified document served
/// at `/api/docs/openapi.json` with Swagger UI at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged
/// into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "EduPortal", description = "EduPortal API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::department::DEPARTMENT_TAG, description = "Department management API routes"),
        (name = controller::course::COURSE_TAG, description = "Course management API routes"),
        (name = controller::enrollment::ENROLLMENT_TAG, description = "Course enrollment API routes"),
        (name = controller::faculty::FACULTY_TAG, description = "Faculty management API routes"),
        (name = controller::student::STUDENT_TAG, description = "Student management API routes"),
        (name = controller::user::USER_TAG, description = "User account API routes"),
        (name = controller::academic_year::ACADEMIC_YEAR_TAG, description = "Academic year API routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_session_user))
        .routes(routes!(
            controller::department::list_departments,
            controller::department::create_department
        ))
        .routes(routes!(
            controller::department::get_department,
            controller::department::update_department,
            controller::department::delete_department
        ))
        .routes(routes!(
            controller::course::list_courses,
            controller::course::create_course
        ))
        .routes(routes!(
            controller::course::get_course,
            controller::course::update_course,
            controller::course::delete_course
        ))
        .routes(routes!(
            controller::enrollment::list_enrollments,
            controller::enrollment::create_enrollment
        ))
        .routes(routes!(controller::enrollment::delete_enrollment))
        .routes(routes!(
            controller::faculty::list_faculty,
            controller::faculty::create_faculty
        ))
        .routes(routes!(
            controller::faculty::get_faculty,
            controller::faculty::update_faculty,
            controller::faculty::delete_faculty
        ))
        .routes(routes!(
            controller::student::list_students,
            controller::student::create_student
        ))
        .routes(routes!(
            controller::student::get_student,
            controller::student::update_student,
            controller::student::delete_student
        ))
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::academic_year::list_academic_years,
            controller::academic_year::create_academic_year
        ))
        .routes(routes!(
            controller::academic_year::get_academic_year,
            controller::academic_year::update_academic_year,
            controller::academic_year::delete_academic_year
        ))
        .routes(routes!(controller::dashboard::get_stats))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
