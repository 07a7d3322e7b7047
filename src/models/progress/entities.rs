use serde::{Deserialize, Serialize};

// 讲座完成记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureProgress {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub lecture_id: i64,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}
