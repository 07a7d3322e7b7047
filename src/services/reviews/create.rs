use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::reviews::requests::CreateReviewRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_rating;

pub async fn create_review(
    service: &ReviewService,
    request: &HttpRequest,
    course_id: i64,
    review_data: CreateReviewRequest,
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

    if let Err(msg) = validate_rating(review_data.rating) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ReviewRatingInvalid, msg)));
    }

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to get course by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching course",
                )),
            );
        }
    }

    // 未报名用户不能评价
    match storage.is_enrolled(course_id, user_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotEnrolled,
                "Only enrolled students can review a course",
            )));
        }
        Err(e) => {
            error!("Failed to check enrollment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking enrollment",
                )),
            );
        }
    }

    // 一人一课一条评价
    match storage.get_review_by_course_and_user(course_id, user_id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ReviewAlreadyExists,
                "You have already reviewed this course",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check existing review: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking review",
                )),
            );
        }
    }

    match storage.create_review(course_id, user_id, review_data).await {
        Ok(review) => {
            info!("User {} reviewed course {}", user_id, course_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(review, "Review created successfully")))
        }
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ReviewAlreadyExists,
                    "You have already reviewed this course",
                )))
            } else {
                error!("Review creation failed: {}", msg);
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("创建评价失败: {msg}"),
                    )),
                )
            }
        }
    }
}
