pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod publish;
pub mod thumbnail;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::courses::entities::Course;
use crate::models::courses::requests::{CourseQueryParams, CreateCourseRequest, UpdateCourseRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
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

    // 创建课程（讲师）
    pub async fn create_course(
        &self,
        req: &HttpRequest,
        course_data: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, req, course_data).await
    }

    // 公开课程列表（搜索入口）
    pub async fn list_courses(
        &self,
        req: &HttpRequest,
        query: CourseQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, req, query).await
    }

    // 课程详情
    pub async fn get_course(&self, req: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        get::get_course(self, req, course_id).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        req: &HttpRequest,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, req, course_id, update_data).await
    }

    // 删除课程
    pub async fn delete_course(
        &self,
        req: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, req, course_id).await
    }

    // 发布课程
    pub async fn publish_course(
        &self,
        req: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        publish::set_published(self, req, course_id, true).await
    }

    // 取消发布
    pub async fn unpublish_course(
        &self,
        req: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        publish::set_published(self, req, course_id, false).await
    }

    // 上传课程缩略图
    pub async fn upload_thumbnail(
        &self,
        req: &HttpRequest,
        course_id: i64,
        payload: actix_multipart::Multipart,
    ) -> ActixResult<HttpResponse> {
        thumbnail::upload_thumbnail(self, req, course_id, payload).await
    }
}

/// 校验调用者可以访问课程内容：已报名，或是课程讲师本人/管理员
pub(crate) async fn ensure_course_access(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    course_id: i64,
) -> Result<(), HttpResponse> {
    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user",
            )));
        }
    };

    if user.role == UserRole::Admin {
        return Ok(());
    }

    // 课程讲师本人
    if let Ok(Some(teacher)) = storage.get_teacher_by_user_id(user.id).await
        && let Ok(Some(course)) = storage.get_course_by_id(course_id).await
        && teacher.id == course.teacher_id
    {
        return Ok(());
    }

    match storage.is_enrolled(course_id, user.id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::NotEnrolled,
            "You are not enrolled in this course",
        ))),
        Err(e) => {
            tracing::error!("Failed to check enrollment: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking enrollment",
                )),
            )
        }
    }
}

/// 解析课程并校验调用者是课程讲师本人或管理员
///
/// 返回 Err 时为可直接返回的错误响应。
pub(crate) async fn ensure_course_owner(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    course_id: i64,
) -> Result<Course, HttpResponse> {
    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user",
            )));
        }
    };

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to get course by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching course",
                )),
            );
        }
    };

    if user.role == UserRole::Admin {
        return Ok(course);
    }

    let teacher = match storage.get_teacher_by_user_id(user.id).await {
        Ok(Some(t)) => t,
        Ok(None) => {
            return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::CoursePermissionDenied,
                "You do not have permission to manage this course",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to get teacher profile: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching instructor",
                )),
            );
        }
    };

    if course.teacher_id != teacher.id {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CoursePermissionDenied,
            "You do not have permission to manage this course",
        )));
    }

    Ok(course)
}
