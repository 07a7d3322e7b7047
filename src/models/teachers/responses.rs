use serde::Serialize;

use super::entities::Teacher;

// 讲师公开资料响应
#[derive(Debug, Serialize)]
pub struct TeacherPublicResponse {
    pub id: i64,
    pub user_id: i64,
    pub profile_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub expertise: Vec<String>,
    pub rating: f64,
    pub total_courses: i64,
}

impl TeacherPublicResponse {
    pub fn from_parts(teacher: Teacher, profile_name: String, avatar_url: Option<String>) -> Self {
        Self {
            id: teacher.id,
            user_id: teacher.user_id,
            profile_name,
            avatar_url,
            bio: teacher.bio,
            expertise: teacher.expertise,
            rating: teacher.rating,
            total_courses: teacher.total_courses,
        }
    }
}
