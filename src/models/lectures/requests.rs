use serde::Deserialize;

// 新建讲座的元数据，从 multipart 表单字段收集
//
// 视频来源二选一：上传的 video 文件部分，或外链 video_url。
// 两者都缺失时拒绝请求。
#[derive(Debug, Default)]
pub struct CreateLectureMeta {
    pub title: String,
    pub video_url: Option<String>,
    pub duration_seconds: i64,
}

// 创建讲座请求（存储层）
#[derive(Debug)]
pub struct CreateLectureRequest {
    pub course_id: i64,
    pub title: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub transcript: Option<String>,
    pub duration_seconds: i64,
}

// 更新讲座请求
#[derive(Debug, Deserialize)]
pub struct UpdateLectureRequest {
    pub title: Option<String>,
    pub position: Option<i64>,
    pub thumbnail_url: Option<String>,
    pub duration_seconds: Option<i64>,
}

// 创建资源请求（存储层）
#[derive(Debug)]
pub struct CreateResourceRequest {
    pub lecture_id: i64,
    pub title: String,
    pub file_url: String,
    pub file_size: i64,
    pub content_type: String,
}
