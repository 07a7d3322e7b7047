use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::middlewares::RequireJWT;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    create_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user",
            )));
        }
    };

    // 管理员账号不做讲师
    if user.role == UserRole::Admin {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::InstructorPermissionDenied,
            "Admin accounts cannot become instructors",
        )));
    }

    // 已有讲师资料的直接拒绝
    match storage.get_teacher_by_user_id(user.id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::InstructorProfileExists,
                "Instructor profile already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to query teacher profile: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking instructor profile",
                )),
            );
        }
    }

    match storage.create_teacher(user.id, create_data).await {
        Ok(teacher) => {
            info!("User {} upgraded to instructor (teacher {})", user.id, teacher.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(teacher, "Instructor profile created")))
        }
        Err(e) => {
            error!("Failed to create instructor profile: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建讲师资料失败: {e}"),
                )),
            )
        }
    }
}
