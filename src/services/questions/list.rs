use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{QuestionService, ensure_qa_access};
use crate::models::questions::responses::QuestionListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_questions(
    service: &QuestionService,
    request: &HttpRequest,
    lecture_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_qa_access(&storage, request, lecture_id).await {
        return Ok(resp);
    }

    match storage.list_questions_by_lecture(lecture_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuestionListResponse { items },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询问答列表失败: {e}"),
            )),
        ),
    }
}
