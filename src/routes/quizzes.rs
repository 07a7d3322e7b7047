use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::quizzes::requests::{CreateQuizRequest, SubmitAttemptRequest, UpdateQuizRequest};
use crate::models::users::entities::UserRole;
use crate::services::QuizService;
use crate::utils::{SafeCourseIdI64, SafeQuizIdI64};

// 懒加载的全局 QuizService 实例
static QUIZ_SERVICE: Lazy<QuizService> = Lazy::new(QuizService::new_lazy);

// HTTP处理程序
pub async fn create_quiz(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    quiz_data: web::Json<CreateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .create_quiz(&req, course_id.0, quiz_data.into_inner())
        .await
}

pub async fn get_quiz(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.get_quiz(&req, quiz_id.0).await
}

pub async fn update_quiz(
    req: HttpRequest,
    quiz_id: SafeQuizIdI64,
    update_data: web::Json<UpdateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .update_quiz(&req, quiz_id.0, update_data.into_inner())
        .await
}

pub async fn delete_quiz(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.delete_quiz(&req, quiz_id.0).await
}

pub async fn submit_attempt(
    req: HttpRequest,
    quiz_id: SafeQuizIdI64,
    attempt_data: web::Json<SubmitAttemptRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .submit_attempt(&req, quiz_id.0, attempt_data.into_inner())
        .await
}

pub async fn list_attempts(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.list_attempts(&req, quiz_id.0).await
}

// 配置路由
pub fn configure_quiz_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/courses/{course_id}/quizzes").route(
            web::post()
                .to(create_quiz)
                .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                .wrap(middlewares::RequireJWT),
        ),
    );
    cfg.service(
        web::scope("/api/v1/quizzes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{quiz_id}")
                    .route(web::get().to(get_quiz))
                    .route(
                        web::put()
                            .to(update_quiz)
                            .wrap(middlewares::RequireRole::new_any(
                                UserRole::instructor_roles(),
                            )),
                    )
                    .route(
                        web::delete()
                            .to(delete_quiz)
                            .wrap(middlewares::RequireRole::new_any(
                                UserRole::instructor_roles(),
                            )),
                    ),
            )
            .service(
                web::resource("/{quiz_id}/attempts")
                    .route(web::post().to(submit_attempt))
                    .route(web::get().to(list_attempts)),
            ),
    );
}
