use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{QuizService, ensure_quiz_owner};
use crate::models::quizzes::requests::UpdateQuizRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::quizzes::create::validate_questions;

pub async fn update_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    update_data: UpdateQuizRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_quiz_owner(&storage, request, quiz_id).await {
        return Ok(resp);
    }

    if let Some(ref title) = update_data.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::QuizInvalid,
            "Quiz title must not be empty",
        )));
    }

    if let Some(ref questions) = update_data.questions
        && let Err(msg) = validate_questions(questions)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::QuizInvalid, msg)));
    }

    match storage.update_quiz(quiz_id, update_data).await {
        Ok(Some(quiz)) => {
            info!("Quiz {} updated", quiz_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(quiz, "Quiz updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizNotFound,
            "Quiz not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新测验失败: {e}"),
            )),
        ),
    }
}
