use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::common::PaginationQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::ensure_course_owner;

pub async fn list_students(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只有课程讲师本人或管理员可以查看学员名单
    if let Err(resp) = ensure_course_owner(&storage, request, course_id).await {
        return Ok(resp);
    }

    match storage
        .list_course_students(course_id, query.page, query.size)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学员列表失败: {e}"),
            )),
        ),
    }
}
