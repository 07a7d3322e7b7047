use serde::{Deserialize, Serialize};

// 讲座提问实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub lecture_id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 回答实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub user_id: i64,
    pub body: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
