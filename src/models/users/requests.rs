use serde::Deserialize;

use super::entities::{UserRole, UserStatus};
use crate::models::common::PaginationQuery;

// 创建用户请求（注册或管理员创建）
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub profile_name: Option<String>,
    pub avatar_url: Option<String>,
}

fn default_role() -> UserRole {
    UserRole::User
}

// 更新用户请求（管理员）
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub profile_name: Option<String>,
    pub avatar_url: Option<String>,
}

// 用户列表查询参数
#[derive(Debug, Deserialize)]
pub struct UserQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

// 用户列表查询（存储层）
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}
