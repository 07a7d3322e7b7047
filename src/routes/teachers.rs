use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::CourseQueryParams;
use crate::models::teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::models::users::entities::UserRole;
use crate::services::TeacherService;
use crate::utils::SafeTeacherIdI64;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn create_teacher(
    req: HttpRequest,
    create_data: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_teacher(&req, create_data.into_inner())
        .await
}

pub async fn get_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&req, teacher_id.0).await
}

pub async fn update_my_profile(
    req: HttpRequest,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_my_profile(&req, update_data.into_inner())
        .await
}

pub async fn list_my_courses(
    req: HttpRequest,
    query: web::Query<CourseQueryParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_my_courses(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_instructor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/instructors")
            .service(
                // 本人资料与课程，先于 {teacher_id} 注册
                web::scope("/me")
                    .wrap(middlewares::RequireJWT)
                    .service(
                        web::resource("").route(
                            web::put()
                                .to(update_my_profile)
                                .wrap(middlewares::RequireRole::new_any(
                                    UserRole::instructor_roles(),
                                )),
                        ),
                    )
                    .service(
                        web::resource("/courses").route(
                            web::get()
                                .to(list_my_courses)
                                .wrap(middlewares::RequireRole::new_any(
                                    UserRole::instructor_roles(),
                                )),
                        ),
                    ),
            )
            .service(
                // 普通用户申请成为讲师
                web::resource("")
                    .route(web::post().to(create_teacher).wrap(middlewares::RequireJWT)),
            )
            .service(
                // 讲师公开资料
                web::resource("/{teacher_id}").route(web::get().to(get_teacher)),
            ),
    );
}
