use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::ProgressService;
use crate::utils::{SafeCourseIdI64, SafeLectureIdI64};

// 懒加载的全局 ProgressService 实例
static PROGRESS_SERVICE: Lazy<ProgressService> = Lazy::new(ProgressService::new_lazy);

// HTTP处理程序
pub async fn complete_lecture(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .complete_lecture(&req, course_id.0, lecture_id.0)
        .await
}

pub async fn get_progress(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE.get_progress(&req, course_id.0).await
}

// 配置路由
pub fn configure_progress_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/courses/{course_id}/lectures/{lecture_id}/complete")
            .route(web::post().to(complete_lecture).wrap(middlewares::RequireJWT)),
    );
    cfg.service(
        web::resource("/api/v1/courses/{course_id}/progress")
            .route(web::get().to(get_progress).wrap(middlewares::RequireJWT)),
    );
}
