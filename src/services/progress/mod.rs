pub mod complete;
pub mod get;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ProgressService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProgressService {
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

    // 标记讲座完成
    pub async fn complete_lecture(
        &self,
        req: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        complete::complete_lecture(self, req, course_id, lecture_id).await
    }

    // 查询课程学习进度
    pub async fn get_progress(
        &self,
        req: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_progress(self, req, course_id).await
    }
}
