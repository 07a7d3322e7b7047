use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::questions::requests::{AnswerRequest, AskQuestionRequest};
use crate::services::QuestionService;
use crate::utils::{SafeLectureIdI64, SafeQuestionIdI64};

// 懒加载的全局 QuestionService 实例
static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);

// HTTP处理程序
pub async fn ask_question(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
    question_data: web::Json<AskQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .ask_question(&req, lecture_id.0, question_data.into_inner())
        .await
}

pub async fn list_questions(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.list_questions(&req, lecture_id.0).await
}

pub async fn answer_question(
    req: HttpRequest,
    question_id: SafeQuestionIdI64,
    answer_data: web::Json<AnswerRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .answer_question(&req, question_id.0, answer_data.into_inner())
        .await
}

// 配置路由
pub fn configure_question_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/lectures/{lecture_id}/questions")
            .route(web::post().to(ask_question).wrap(middlewares::RequireJWT))
            .route(web::get().to(list_questions).wrap(middlewares::RequireJWT)),
    );
    cfg.service(
        web::resource("/api/v1/questions/{question_id}/answers")
            .route(web::post().to(answer_question).wrap(middlewares::RequireJWT)),
    );
}
