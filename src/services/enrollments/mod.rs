pub mod enroll;
pub mod my_courses;
pub mod students;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::PaginationQuery;
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 报名课程
    pub async fn enroll(&self, req: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        enroll::enroll(self, req, course_id).await
    }

    // 我的课程（含进度摘要）
    pub async fn list_my_courses(
        &self,
        req: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        my_courses::list_my_courses(self, req, query).await
    }

    // 课程学员列表（讲师/管理员）
    pub async fn list_students(
        &self,
        req: &HttpRequest,
        course_id: i64,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        students::list_students(self, req, course_id, query).await
    }
}
