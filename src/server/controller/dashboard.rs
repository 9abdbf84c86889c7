use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        dashboard::DashboardStatsDto,
    },
    server::{
        data::{
            course::CourseRepository, department::DepartmentRepository,
            faculty::FacultyRepository, student::StudentRepository,
        },
        error::Error,
        model::app::AppState,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Entity counts for the dashboard landing page
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Totals per entity", body = ApiResponse<DashboardStatsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let stats = DashboardStatsDto {
        total_students: StudentRepository::new(&state.db).count_all().await?,
        total_faculty: FacultyRepository::new(&state.db).count_all().await?,
        total_courses: CourseRepository::new(&state.db).count_all().await?,
        total_departments: DepartmentRepository::new(&state.db).count_all().await?,
    };

    Ok((StatusCode::OK, Json(ApiResponse::data(stats))))
}
