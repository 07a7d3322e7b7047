use serde::{Deserialize, Serialize};

// 课程评价实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub course_id: i64,
    pub user_id: i64,
    // 1..=5 星
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
