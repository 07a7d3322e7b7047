pub mod attempt;
pub mod attempts;
pub mod create;
pub mod delete;
pub mod get;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::quizzes::requests::{CreateQuizRequest, SubmitAttemptRequest, UpdateQuizRequest};
use crate::storage::Storage;

pub struct QuizService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizService {
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

    // 创建测验（课程讲师）
    pub async fn create_quiz(
        &self,
        req: &HttpRequest,
        course_id: i64,
        quiz_data: CreateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_quiz(self, req, course_id, quiz_data).await
    }

    // 获取测验：学员视角不含答案，讲师视角完整
    pub async fn get_quiz(&self, req: &HttpRequest, quiz_id: i64) -> ActixResult<HttpResponse> {
        get::get_quiz(self, req, quiz_id).await
    }

    // 更新测验
    pub async fn update_quiz(
        &self,
        req: &HttpRequest,
        quiz_id: i64,
        update_data: UpdateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_quiz(self, req, quiz_id, update_data).await
    }

    // 删除测验
    pub async fn delete_quiz(&self, req: &HttpRequest, quiz_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_quiz(self, req, quiz_id).await
    }

    // 提交答题
    pub async fn submit_attempt(
        &self,
        req: &HttpRequest,
        quiz_id: i64,
        attempt_data: SubmitAttemptRequest,
    ) -> ActixResult<HttpResponse> {
        attempt::submit_attempt(self, req, quiz_id, attempt_data).await
    }

    // 答题记录
    pub async fn list_attempts(
        &self,
        req: &HttpRequest,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        attempts::list_attempts(self, req, quiz_id).await
    }
}

/// 校验调用者是测验所属课程的讲师本人或管理员，返回测验
pub(crate) async fn ensure_quiz_owner(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    quiz_id: i64,
) -> Result<crate::models::quizzes::entities::Quiz, HttpResponse> {
    use crate::models::{ApiResponse, ErrorCode};
    use crate::services::courses::ensure_course_owner;

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "Quiz not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to get quiz by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching quiz",
                )),
            );
        }
    };

    ensure_course_owner(storage, request, quiz.course_id).await?;

    Ok(quiz)
}
