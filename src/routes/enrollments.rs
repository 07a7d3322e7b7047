use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::common::PaginationQuery;
use crate::models::users::entities::UserRole;
use crate::services::EnrollmentService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

// HTTP处理程序
pub async fn enroll(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.enroll(&req, course_id.0).await
}

pub async fn list_my_courses(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_my_courses(&req, query.into_inner())
        .await
}

pub async fn list_students(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_students(&req, course_id.0, query.into_inner())
        .await
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/courses/{course_id}/enroll")
            .route(web::post().to(enroll).wrap(middlewares::RequireJWT)),
    );
    cfg.service(
        web::resource("/api/v1/enrollments/my")
            .route(web::get().to(list_my_courses).wrap(middlewares::RequireJWT)),
    );
    cfg.service(
        // 学员名单供讲师联系学员使用
        web::resource("/api/v1/courses/{course_id}/students").route(
            web::get()
                .to(list_students)
                .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                .wrap(middlewares::RequireJWT),
        ),
    );
}
