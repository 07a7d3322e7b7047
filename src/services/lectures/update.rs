use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{LectureService, ensure_lecture_in_course};
use crate::models::lectures::requests::UpdateLectureRequest;
use crate::models::lectures::responses::LectureResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::ensure_course_owner;

pub async fn update_lecture(
    service: &LectureService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    update_data: UpdateLectureRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_course_owner(&storage, request, course_id).await {
        return Ok(resp);
    }

    if let Err(resp) = ensure_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    if let Some(position) = update_data.position
        && position < 1
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Lecture position must be at least 1",
        )));
    }

    match storage.update_lecture(lecture_id, update_data).await {
        Ok(Some(lecture)) => {
            info!("Lecture {} updated", lecture_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                LectureResponse::full(lecture),
                "Lecture updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LectureNotFound,
            "Lecture not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新讲座失败: {e}"),
            )),
        ),
    }
}
