use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lectures::requests::UpdateLectureRequest;
use crate::models::users::entities::UserRole;
use crate::services::LectureService;
use crate::utils::{SafeCourseIdI64, SafeLectureIdI64, SafeResourceIdI64};

// 懒加载的全局 LectureService 实例
static LECTURE_SERVICE: Lazy<LectureService> = Lazy::new(LectureService::new_lazy);

// HTTP处理程序
pub async fn create_lecture(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .create_lecture(&req, course_id.0, payload)
        .await
}

pub async fn update_lecture(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    update_data: web::Json<UpdateLectureRequest>,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .update_lecture(&req, course_id.0, lecture_id.0, update_data.into_inner())
        .await
}

pub async fn delete_lecture(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .delete_lecture(&req, course_id.0, lecture_id.0)
        .await
}

pub async fn upload_resource(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .upload_resource(&req, course_id.0, lecture_id.0, payload)
        .await
}

pub async fn list_resources(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .list_resources(&req, course_id.0, lecture_id.0)
        .await
}

pub async fn delete_resource(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    resource_id: SafeResourceIdI64,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .delete_resource(&req, course_id.0, resource_id.0)
        .await
}

pub async fn summarize_lecture(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .summarize_lecture(&req, course_id.0, lecture_id.0)
        .await
}

// 配置路由
//
// 讲座管理全部限定课程讲师或管理员；上传走转写管线，带限流。
pub fn configure_lecture_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/courses/{course_id}/lectures").route(
            web::post()
                .to(create_lecture)
                .wrap(middlewares::RateLimit::lecture_upload())
                .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                .wrap(middlewares::RequireJWT),
        ),
    );
    cfg.service(
        web::resource("/api/v1/courses/{course_id}/lectures/{lecture_id}")
            .route(
                web::put()
                    .to(update_lecture)
                    .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                    .wrap(middlewares::RequireJWT),
            )
            .route(
                web::delete()
                    .to(delete_lecture)
                    .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                    .wrap(middlewares::RequireJWT),
            ),
    );
    cfg.service(
        web::resource("/api/v1/courses/{course_id}/lectures/{lecture_id}/resources")
            .route(
                web::post()
                    .to(upload_resource)
                    .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                    .wrap(middlewares::RequireJWT),
            )
            .route(web::get().to(list_resources).wrap(middlewares::RequireJWT)),
    );
    cfg.service(
        web::resource("/api/v1/courses/{course_id}/resources/{resource_id}").route(
            web::delete()
                .to(delete_resource)
                .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                .wrap(middlewares::RequireJWT),
        ),
    );
    cfg.service(
        web::resource("/api/v1/courses/{course_id}/lectures/{lecture_id}/summary").route(
            web::post()
                .to(summarize_lecture)
                .wrap(middlewares::RateLimit::summary())
                .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                .wrap(middlewares::RequireJWT),
        ),
    );
}
