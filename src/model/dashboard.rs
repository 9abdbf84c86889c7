use serde::{Deserialize, Serialize};

/// Counts shown on the dashboard landing page
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardStatsDto {
    pub total_students: u64,
    pub total_faculty: u64,
    pub total_courses: u64,
    pub total_departments: u64,
}
