use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::reviews::requests::UpdateReviewRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_rating;

pub async fn update_review(
    service: &ReviewService,
    request: &HttpRequest,
    review_id: i64,
    update_data: UpdateReviewRequest,
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

    if let Some(rating) = update_data.rating
        && let Err(msg) = validate_rating(rating)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ReviewRatingInvalid, msg)));
    }

    let review = match storage.get_review_by_id(review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ReviewNotFound,
                "Review not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评价失败: {e}"),
                )),
            );
        }
    };

    // 只能修改自己的评价
    if review.user_id != user_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "You can only update your own review",
        )));
    }

    match storage.update_review(review_id, update_data).await {
        Ok(Some(review)) => {
            info!("Review {} updated", review_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(review, "Review updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "Review not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新评价失败: {e}"),
            )),
        ),
    }
}
