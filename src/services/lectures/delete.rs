use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;
use tracing::{info, warn};

use super::{LectureService, ensure_lecture_in_course};
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::ensure_course_owner;

pub async fn delete_lecture(
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

    match storage.delete_lecture(lecture_id).await {
        Ok(true) => {
            // 本地存储的视频一并清理，失败只记日志
            if let Some(file_name) = lecture
                .video_url
                .strip_prefix(&format!("/lectures/{course_id}/"))
            {
                let config = AppConfig::get();
                let file_path = format!("{}/{}", config.lectures_dir(course_id), file_name);
                if Path::new(&file_path).exists()
                    && let Err(e) = std::fs::remove_file(&file_path)
                {
                    warn!("Failed to remove lecture video {}: {}", file_path, e);
                }
            }

            info!("Lecture {} deleted from course {}", lecture_id, course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Lecture deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LectureNotFound,
            "Lecture not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除讲座失败: {e}"),
            )),
        ),
    }
}
