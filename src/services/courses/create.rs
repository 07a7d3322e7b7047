use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_course_title;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
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

    if let Err(msg) = validate_course_title(&course_data.title) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CourseCreationFailed, msg)));
    }

    if course_data.price < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CourseCreationFailed,
            "Course price must not be negative",
        )));
    }

    // 调用者必须已建立讲师资料
    let teacher = match storage.get_teacher_by_user_id(user_id).await {
        Ok(Some(t)) => t,
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::InstructorNotFound,
                "Create an instructor profile before creating courses",
            )));
        }
        Err(e) => {
            error!("Failed to get teacher profile: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching instructor",
                )),
            );
        }
    };

    match storage.create_course(teacher.id, course_data).await {
        Ok(course) => {
            info!("Course {} created by teacher {}", course.id, teacher.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(course, "Course created successfully")))
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseCreationFailed,
                    format!("创建课程失败: {e}"),
                )),
            )
        }
    }
}
