pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reviews::requests::{CreateReviewRequest, ReviewQueryParams, UpdateReviewRequest};
use crate::storage::Storage;

pub struct ReviewService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReviewService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 发表评价（报名学员）
    pub async fn create_review(
        &self,
        req: &HttpRequest,
        course_id: i64,
        review_data: CreateReviewRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_review(self, req, course_id, review_data).await
    }

    // 课程评价列表（公开）
    pub async fn list_reviews(
        &self,
        req: &HttpRequest,
        course_id: i64,
        query: ReviewQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_reviews(self, req, course_id, query).await
    }

    // 更新自己的评价
    pub async fn update_review(
        &self,
        req: &HttpRequest,
        review_id: i64,
        update_data: UpdateReviewRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_review(self, req, review_id, update_data).await
    }

    // 删除评价（本人或管理员）
    pub async fn delete_review(
        &self,
        req: &HttpRequest,
        review_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_review(self, req, review_id).await
    }
}
