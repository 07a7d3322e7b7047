use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::models::reviews::requests::ReviewQueryParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_reviews(
    service: &ReviewService,
    request: &HttpRequest,
    course_id: i64,
    query: ReviewQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_reviews_with_pagination(course_id, query.pagination.page, query.pagination.size)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评价列表失败: {e}"),
            )),
        ),
    }
}
