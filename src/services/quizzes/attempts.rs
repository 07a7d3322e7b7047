use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::quizzes::responses::AttemptListResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_attempts(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
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

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "Quiz not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验失败: {e}"),
                )),
            );
        }
    };

    // 讲师本人/管理员看全部记录，学员只看自己的
    let mut is_owner = user.role == UserRole::Admin;
    if !is_owner
        && let Ok(Some(teacher)) = storage.get_teacher_by_user_id(user.id).await
        && let Ok(Some(course)) = storage.get_course_by_id(quiz.course_id).await
    {
        is_owner = teacher.id == course.teacher_id;
    }

    let filter_user = if is_owner { None } else { Some(user.id) };

    match storage.list_attempts(quiz_id, filter_user).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttemptListResponse { items },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询答题记录失败: {e}"),
            )),
        ),
    }
}
