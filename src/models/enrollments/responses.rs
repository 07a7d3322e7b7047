use serde::Serialize;

use super::entities::Enrollment;
use crate::models::common::PaginationInfo;
use crate::models::courses::entities::Course;

// 报名响应
#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    pub enrollment: Enrollment,
}

// 我的课程条目：课程信息 + 学习进度摘要
#[derive(Debug, Serialize)]
pub struct EnrolledCourse {
    #[serde(flatten)]
    pub course: Course,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
    pub completed_lectures: i64,
    pub total_lectures: i64,
    pub percentage: f64,
}

// 我的课程列表响应
#[derive(Debug, Serialize)]
pub struct MyCoursesResponse {
    pub items: Vec<EnrolledCourse>,
    pub pagination: PaginationInfo,
}

// 课程学员条目（讲师视角）
#[derive(Debug, Serialize)]
pub struct EnrolledStudent {
    pub user_id: i64,
    pub username: String,
    pub profile_name: String,
    pub avatar_url: Option<String>,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

// 课程学员列表响应
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<EnrolledStudent>,
    pub pagination: PaginationInfo,
}
