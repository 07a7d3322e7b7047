use serde::Serialize;

use super::entities::{Lecture, Resource};

// 讲座响应
//
// 未报名用户只能看到预览元数据，video_url 会被隐藏。
#[derive(Debug, Serialize)]
pub struct LectureResponse {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub position: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub duration_seconds: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl LectureResponse {
    /// 完整视图：报名学员、课程讲师或管理员
    pub fn full(lecture: Lecture) -> Self {
        Self {
            id: lecture.id,
            course_id: lecture.course_id,
            title: lecture.title,
            position: lecture.position,
            video_url: Some(lecture.video_url),
            thumbnail_url: lecture.thumbnail_url,
            transcript: lecture.transcript,
            summary: lecture.summary,
            duration_seconds: lecture.duration_seconds,
            created_at: lecture.created_at,
        }
    }

    /// 预览视图：隐藏视频地址与讲稿
    pub fn preview(lecture: Lecture) -> Self {
        Self {
            id: lecture.id,
            course_id: lecture.course_id,
            title: lecture.title,
            position: lecture.position,
            video_url: None,
            thumbnail_url: lecture.thumbnail_url,
            transcript: None,
            summary: None,
            duration_seconds: lecture.duration_seconds,
            created_at: lecture.created_at,
        }
    }
}

// 资源上传响应
#[derive(Debug, Serialize)]
pub struct ResourceUploadResponse {
    pub resource: Resource,
}

// 讲稿摘要响应
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub lecture_id: i64,
    pub summary: String,
}
