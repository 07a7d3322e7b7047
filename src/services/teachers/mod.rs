pub mod courses;
pub mod create;
pub mod get;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::CourseQueryParams;
use crate::models::teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 普通用户升级为讲师
    pub async fn create_teacher(
        &self,
        req: &HttpRequest,
        create_data: CreateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, req, create_data).await
    }

    // 讲师公开资料
    pub async fn get_teacher(
        &self,
        req: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_teacher(self, req, teacher_id).await
    }

    // 更新本人讲师资料
    pub async fn update_my_profile(
        &self,
        req: &HttpRequest,
        update_data: UpdateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_my_profile(self, req, update_data).await
    }

    // 本人课程列表（含未发布）
    pub async fn list_my_courses(
        &self,
        req: &HttpRequest,
        query: CourseQueryParams,
    ) -> ActixResult<HttpResponse> {
        courses::list_my_courses(self, req, query).await
    }
}
