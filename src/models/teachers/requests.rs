use serde::Deserialize;

// 创建讲师资料请求（普通用户升级为讲师）
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub bio: Option<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
}

// 更新讲师资料请求
#[derive(Debug, Deserialize)]
pub struct UpdateTeacherRequest {
    pub bio: Option<String>,
    pub expertise: Option<Vec<String>>,
}
