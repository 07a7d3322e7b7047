use serde::Serialize;

use super::entities::Review;
use crate::models::common::PaginationInfo;

// 评价条目：附带评价者公开信息
#[derive(Debug, Serialize)]
pub struct ReviewItem {
    #[serde(flatten)]
    pub review: Review,
    pub profile_name: String,
    pub avatar_url: Option<String>,
}

// 评价列表响应
#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub items: Vec<ReviewItem>,
    pub pagination: PaginationInfo,
}
