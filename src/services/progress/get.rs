use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProgressService;
use crate::middlewares::RequireJWT;
use crate::models::progress::responses::CourseProgressResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_progress(
    service: &ProgressService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    match storage.is_enrolled(course_id, user_id).await {
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

    let progress = match storage.list_progress(user_id, course_id).await {
        Ok(progress) => progress,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询进度失败: {e}"),
                )),
            );
        }
    };

    let total_lectures = match storage.count_lectures_by_course(course_id).await {
        Ok(count) => count as i64,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("统计讲座数量失败: {e}"),
                )),
            );
        }
    };

    let completed_quiz_ids = storage
        .list_attempted_quiz_ids(user_id, course_id)
        .await
        .unwrap_or_default();

    let completed_lecture_ids: Vec<i64> = progress.iter().map(|p| p.lecture_id).collect();
    let last_accessed = progress.iter().map(|p| p.completed_at).max();

    // 百分比只按讲座计算；没有讲座的课程记为 0
    let percentage = if total_lectures > 0 {
        (completed_lecture_ids.len() as f64 / total_lectures as f64 * 100.0 * 100.0).round() / 100.0
    } else {
        0.0
    };

    let response = CourseProgressResponse {
        course_id,
        completed_lecture_ids,
        completed_quiz_ids,
        total_lectures,
        percentage,
        last_accessed,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
