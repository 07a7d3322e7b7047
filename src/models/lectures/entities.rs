use serde::{Deserialize, Serialize};

// 讲座实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecture {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    // 课程内的顺序，从 1 开始
    pub position: i64,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    pub duration_seconds: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 讲座附件资源实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub lecture_id: i64,
    pub title: String,
    pub file_url: String,
    pub file_size: i64,
    pub content_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
