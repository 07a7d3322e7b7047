use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::quizzes::responses::QuizPublicResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_quiz(
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

    // 课程讲师本人和管理员可以看到答案与解析
    let mut is_owner = user.role == UserRole::Admin;
    if !is_owner
        && let Ok(Some(teacher)) = storage.get_teacher_by_user_id(user.id).await
        && let Ok(Some(course)) = storage.get_course_by_id(quiz.course_id).await
    {
        is_owner = teacher.id == course.teacher_id;
    }

    if is_owner {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(quiz, "查询成功")));
    }

    // 学员必须已报名，且只能看到去除答案的题目
    match storage.is_enrolled(quiz.course_id, user.id).await {
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

    let response = QuizPublicResponse::from(quiz);
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
