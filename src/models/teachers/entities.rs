use serde::{Deserialize, Serialize};

// 讲师资料实体，与 role 为 instructor 的用户一一对应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
    pub bio: Option<String>,
    pub expertise: Vec<String>,
    pub rating: f64,
    pub total_earnings: i64,
    pub total_courses: i64,
    pub profile_complete: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
