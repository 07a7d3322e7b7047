use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::responses::TeacherPublicResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teacher = match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(t)) => t,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::InstructorNotFound,
                "Instructor not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询讲师失败: {e}"),
                )),
            );
        }
    };

    // 带上用户侧的公开信息
    let (profile_name, avatar_url) = match storage.get_user_by_id(teacher.user_id).await {
        Ok(Some(user)) => (user.profile.profile_name, user.profile.avatar_url),
        _ => (String::new(), None),
    };

    let response = TeacherPublicResponse::from_parts(teacher, profile_name, avatar_url);
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
