use serde::Serialize;

// 单课程学习进度响应
#[derive(Debug, Serialize)]
pub struct CourseProgressResponse {
    pub course_id: i64,
    pub completed_lecture_ids: Vec<i64>,
    pub completed_quiz_ids: Vec<i64>,
    pub total_lectures: i64,
    // 完成百分比，保留两位小数；课程没有讲座时为 0
    pub percentage: f64,
    pub last_accessed: Option<chrono::DateTime<chrono::Utc>>,
}
