use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{LectureService, ensure_lecture_in_course};
use crate::ai::CompletionClient;
use crate::models::lectures::responses::SummaryResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::ensure_course_owner;

/// 为讲稿生成摘要并存回讲座记录
pub async fn summarize_lecture(
    service: &LectureService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_course_owner(&storage, request, course_id).await {
        return Ok(resp);
    }

    let lecture = match ensure_lecture_in_course(&storage, course_id, lecture_id).await {
        Ok(lecture) => lecture,
        Err(resp) => return Ok(resp),
    };

    let transcript = match lecture.transcript {
        Some(ref text) if !text.trim().is_empty() => text.clone(),
        _ => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::TranscriptMissing,
                "Lecture has no transcript to summarize",
            )));
        }
    };

    let client = match CompletionClient::from_config() {
        Some(client) => client,
        None => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Text generation service is disabled",
            )));
        }
    };

    let summary = match client.summarize(&transcript).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Summary generation failed for lecture {}: {}", lecture_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to generate summary",
                )),
            );
        }
    };

    if let Err(e) = storage.set_lecture_summary(lecture_id, &summary).await {
        error!("Failed to store summary for lecture {}: {}", lecture_id, e);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("写入摘要失败: {e}"),
            )),
        );
    }

    info!("Summary generated for lecture {}", lecture_id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SummaryResponse {
            lecture_id,
            summary,
        },
        "Summary generated successfully",
    )))
}
