use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{QuizService, ensure_quiz_owner};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_quiz_owner(&storage, request, quiz_id).await {
        return Ok(resp);
    }

    match storage.delete_quiz(quiz_id).await {
        Ok(true) => {
            info!("Quiz {} deleted", quiz_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Quiz deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizNotFound,
            "Quiz not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除测验失败: {e}"),
            )),
        ),
    }
}
