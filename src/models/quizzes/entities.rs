use serde::{Deserialize, Serialize};

// 测验实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub course_id: i64,
    // 可选挂到具体讲座
    pub lecture_id: Option<i64>,
    pub title: String,
    pub questions: Vec<QuizQuestion>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 测验题目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub position: i64,
    pub text: String,
    pub options: Vec<String>,
    // 正确选项下标，0 起始
    pub correct_index: i64,
    pub explanation: Option<String>,
}

// 测验答题记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: i64,
    pub quiz_id: i64,
    pub user_id: i64,
    pub score: i64,
    pub total: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
