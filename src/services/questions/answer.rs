use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{QuestionService, ensure_qa_access};
use crate::middlewares::RequireJWT;
use crate::models::questions::requests::AnswerRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn answer_question(
    service: &QuestionService,
    request: &HttpRequest,
    question_id: i64,
    answer_data: AnswerRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let question = match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "Question not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提问失败: {e}"),
                )),
            );
        }
    };

    // 回答权限与提问一致：按提问所属讲座判断
    if let Err(resp) = ensure_qa_access(&storage, request, question.lecture_id).await {
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

    if answer_data.body.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Answer body is required",
        )));
    }

    match storage
        .create_answer(question_id, user_id, answer_data.body.trim())
        .await
    {
        Ok(answer) => {
            info!("Answer {} posted on question {}", answer.id, question_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(answer, "Answer posted successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建回答失败: {e}"),
            )),
        ),
    }
}
