use serde::Serialize;

use super::entities::Course;
use crate::models::common::PaginationInfo;
use crate::models::lectures::responses::LectureResponse;

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}

// 课程详情响应
#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    #[serde(flatten)]
    pub course: Course,
    pub lectures: Vec<LectureResponse>,
    // 当前请求者是否已报名
    pub enrolled: bool,
}
