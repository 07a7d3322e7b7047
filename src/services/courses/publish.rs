use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CourseService, ensure_course_owner};
use crate::models::{ApiResponse, ErrorCode};

pub async fn set_published(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    published: bool,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_course_owner(&storage, request, course_id).await {
        return Ok(resp);
    }

    // 空课程不允许发布
    if published {
        match storage.count_lectures_by_course(course_id).await {
            Ok(0) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::CoursePublishRejected,
                    "Cannot publish a course with no lectures",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("统计讲座数量失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.set_course_published(course_id, published).await {
        Ok(Some(course)) => {
            info!(
                "Course {} {}",
                course_id,
                if published { "published" } else { "unpublished" }
            );
            let message = if published {
                "Course published successfully"
            } else {
                "Course unpublished successfully"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, message)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新发布状态失败: {e}"),
            )),
        ),
    }
}
