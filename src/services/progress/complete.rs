use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProgressService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::lectures::ensure_lecture_in_course;

pub async fn complete_lecture(
    service: &ProgressService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 只有报名学员能记录进度
    match storage.is_enrolled(course_id, user_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotEnrolled,
                "You are not enrolled in this course",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询报名状态失败: {e}"),
                )),
            );
        }
    }

    if let Err(resp) = ensure_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    // 幂等：重复完成返回已有记录
    match storage.complete_lecture(user_id, course_id, lecture_id).await {
        Ok(progress) => {
            info!(
                "User {} completed lecture {} in course {}",
                user_id, lecture_id, course_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(progress, "Lecture marked as completed")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("记录进度失败: {e}"),
            )),
        ),
    }
}
