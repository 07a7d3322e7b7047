use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::responses::EnrollResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn enroll(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
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

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to get course by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching course",
                )),
            );
        }
    };

    // 未发布课程不接受报名
    if !course.published {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CourseNotPublished,
            "Course is not published",
        )));
    }

    // 重复报名直接拒绝；并发下漏网的由唯一索引兜底
    match storage.is_enrolled(course_id, user_id).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                "Already enrolled in this course",
            )));
        }
        Ok(false) => {}
        Err(e) => {
            error!("Failed to check enrollment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking enrollment",
                )),
            );
        }
    }

    // 报名价格取当前课程价格快照
    match storage.enroll(course_id, user_id, course.price).await {
        Ok(enrollment) => {
            info!("User {} enrolled in course {}", user_id, course_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                EnrollResponse { enrollment },
                "Enrolled successfully",
            )))
        }
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyEnrolled,
                    "Already enrolled in this course",
                )))
            } else {
                error!("Enrollment failed: {}", msg);
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::EnrollmentFailed,
                        format!("报名失败: {msg}"),
                    )),
                )
            }
        }
    }
}
