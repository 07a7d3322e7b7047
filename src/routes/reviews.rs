use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::requests::{CreateReviewRequest, ReviewQueryParams, UpdateReviewRequest};
use crate::services::ReviewService;
use crate::utils::{SafeCourseIdI64, SafeReviewIdI64};

// 懒加载的全局 ReviewService 实例
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

// HTTP处理程序
pub async fn create_review(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    review_data: web::Json<CreateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .create_review(&req, course_id.0, review_data.into_inner())
        .await
}

pub async fn list_reviews(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<ReviewQueryParams>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .list_reviews(&req, course_id.0, query.into_inner())
        .await
}

pub async fn update_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
    update_data: web::Json<UpdateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .update_review(&req, review_id.0, update_data.into_inner())
        .await
}

pub async fn delete_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.delete_review(&req, review_id.0).await
}

// 配置路由
//
// 评价列表公开；发表评价要求报名，服务层校验。
pub fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/courses/{course_id}/reviews")
            .route(web::get().to(list_reviews))
            .route(web::post().to(create_review).wrap(middlewares::RequireJWT)),
    );
    cfg.service(
        web::resource("/api/v1/reviews/{review_id}")
            .route(web::put().to(update_review).wrap(middlewares::RequireJWT))
            .route(web::delete().to(delete_review).wrap(middlewares::RequireJWT)),
    );
}
