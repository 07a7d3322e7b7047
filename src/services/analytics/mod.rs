pub mod instructor;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::analytics::requests::AnalyticsQueryParams;
use crate::storage::Storage;

pub struct AnalyticsService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnalyticsService {
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

    // 讲师分析看板
    pub async fn instructor_analytics(
        &self,
        req: &HttpRequest,
        query: AnalyticsQueryParams,
    ) -> ActixResult<HttpResponse> {
        instructor::instructor_analytics(self, req, query).await
    }
}
