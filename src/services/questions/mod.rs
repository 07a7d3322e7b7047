pub mod answer;
pub mod ask;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::questions::requests::{AnswerRequest, AskQuestionRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct QuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionService {
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

    // 讲座下提问
    pub async fn ask_question(
        &self,
        req: &HttpRequest,
        lecture_id: i64,
        question_data: AskQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        ask::ask_question(self, req, lecture_id, question_data).await
    }

    // 讲座问答列表
    pub async fn list_questions(
        &self,
        req: &HttpRequest,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_questions(self, req, lecture_id).await
    }

    // 回答提问
    pub async fn answer_question(
        &self,
        req: &HttpRequest,
        question_id: i64,
        answer_data: AnswerRequest,
    ) -> ActixResult<HttpResponse> {
        answer::answer_question(self, req, question_id, answer_data).await
    }
}

/// 校验调用者可以参与某讲座的问答：已报名，或是课程讲师/管理员
pub(crate) async fn ensure_qa_access(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    lecture_id: i64,
) -> Result<crate::models::lectures::entities::Lecture, HttpResponse> {
    let lecture = match storage.get_lecture_by_id(lecture_id).await {
        Ok(Some(lecture)) => lecture,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LectureNotFound,
                "Lecture not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to get lecture by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching lecture",
                )),
            );
        }
    };

    crate::services::courses::ensure_course_access(storage, request, lecture.course_id).await?;

    Ok(lecture)
}
