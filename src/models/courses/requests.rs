use serde::Deserialize;

use super::entities::CourseLevel;
use crate::models::common::PaginationQuery;

// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub price: i64,
    pub level: CourseLevel,
    #[serde(default)]
    pub duration_minutes: i64,
}

// 更新课程请求
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub price: Option<i64>,
    pub level: Option<CourseLevel>,
    pub duration_minutes: Option<i64>,
}

// 课程列表排序方式
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CourseSort {
    Newest,
    Rating,
    Enrollments,
}

// 课程查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct CourseQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort: Option<CourseSort>,
}

// 课程列表查询（存储层）
#[derive(Debug, Clone, Default)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort: Option<CourseSort>,
    pub teacher_id: Option<i64>,
    // None 表示不过滤发布状态（讲师/管理员视角）
    pub published: Option<bool>,
}

impl Default for CourseSort {
    fn default() -> Self {
        CourseSort::Newest
    }
}
