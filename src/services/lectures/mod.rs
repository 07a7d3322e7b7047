pub mod create;
pub mod delete;
pub mod resources;
pub mod summary;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::lectures::requests::UpdateLectureRequest;
use crate::storage::Storage;

pub struct LectureService {
    storage: Option<Arc<dyn Storage>>,
}

impl LectureService {
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

    // 上传讲座（含转写管线）
    pub async fn create_lecture(
        &self,
        req: &HttpRequest,
        course_id: i64,
        payload: actix_multipart::Multipart,
    ) -> ActixResult<HttpResponse> {
        create::create_lecture(self, req, course_id, payload).await
    }

    // 更新讲座
    pub async fn update_lecture(
        &self,
        req: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        update_data: UpdateLectureRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_lecture(self, req, course_id, lecture_id, update_data).await
    }

    // 删除讲座
    pub async fn delete_lecture(
        &self,
        req: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_lecture(self, req, course_id, lecture_id).await
    }

    // 上传讲座资源
    pub async fn upload_resource(
        &self,
        req: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        payload: actix_multipart::Multipart,
    ) -> ActixResult<HttpResponse> {
        resources::upload_resource(self, req, course_id, lecture_id, payload).await
    }

    // 讲座资源列表
    pub async fn list_resources(
        &self,
        req: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        resources::list_resources(self, req, course_id, lecture_id).await
    }

    // 删除讲座资源
    pub async fn delete_resource(
        &self,
        req: &HttpRequest,
        course_id: i64,
        resource_id: i64,
    ) -> ActixResult<HttpResponse> {
        resources::delete_resource(self, req, course_id, resource_id).await
    }

    // 生成讲稿摘要
    pub async fn summarize_lecture(
        &self,
        req: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        summary::summarize_lecture(self, req, course_id, lecture_id).await
    }
}

/// 校验讲座属于指定课程
///
/// 讲座路由都带课程前缀，避免跨课程操作讲座。
pub(crate) async fn ensure_lecture_in_course(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    lecture_id: i64,
) -> Result<crate::models::lectures::entities::Lecture, HttpResponse> {
    use crate::models::{ApiResponse, ErrorCode};

    match storage.get_lecture_by_id(lecture_id).await {
        Ok(Some(lecture)) if lecture.course_id == course_id => Ok(lecture),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LectureNotFound,
            "Lecture not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to get lecture by id: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching lecture",
                )),
            )
        }
    }
}
