use serde::Deserialize;

use crate::models::common::PaginationQuery;

// 创建评价请求
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub rating: i64,
    pub comment: Option<String>,
}

// 更新评价请求
#[derive(Debug, Deserialize)]
pub struct UpdateReviewRequest {
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

// 评价列表查询参数
#[derive(Debug, Deserialize)]
pub struct ReviewQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}
