use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{QuestionService, ensure_qa_access};
use crate::middlewares::RequireJWT;
use crate::models::questions::requests::AskQuestionRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn ask_question(
    service: &QuestionService,
    request: &HttpRequest,
    lecture_id: i64,
    question_data: AskQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_qa_access(&storage, request, lecture_id).await {
        return Ok(resp);
    }

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    if question_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Question title is required",
        )));
    }

    match storage
        .create_question(lecture_id, user_id, question_data)
        .await
    {
        Ok(question) => {
            info!("Question {} asked on lecture {}", question.id, lecture_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(question, "Question posted successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建提问失败: {e}"),
            )),
        ),
    }
}
