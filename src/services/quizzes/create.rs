use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::QuizService;
use crate::models::quizzes::requests::{CreateQuizQuestion, CreateQuizRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::ensure_course_owner;
use crate::services::lectures::ensure_lecture_in_course;

/// 校验题目列表：每题至少两个选项，答案下标在范围内
pub(crate) fn validate_questions(questions: &[CreateQuizQuestion]) -> Result<(), &'static str> {
    if questions.is_empty() {
        return Err("Quiz must contain at least one question");
    }

    for question in questions {
        if question.text.trim().is_empty() {
            return Err("Question text must not be empty");
        }
        if question.options.len() < 2 {
            return Err("Each question needs at least two options");
        }
        if question.correct_index < 0 || question.correct_index >= question.options.len() as i64 {
            return Err("Correct answer index is out of range");
        }
    }

    Ok(())
}

pub async fn create_quiz(
    service: &QuizService,
    request: &HttpRequest,
    course_id: i64,
    quiz_data: CreateQuizRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_course_owner(&storage, request, course_id).await {
        return Ok(resp);
    }

    if quiz_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::QuizInvalid,
            "Quiz title is required",
        )));
    }

    if let Err(msg) = validate_questions(&quiz_data.questions) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::QuizInvalid, msg)));
    }

    // 挂到讲座时校验归属
    if let Some(lecture_id) = quiz_data.lecture_id
        && let Err(resp) = ensure_lecture_in_course(&storage, course_id, lecture_id).await
    {
        return Ok(resp);
    }

    match storage.create_quiz(course_id, quiz_data).await {
        Ok(quiz) => {
            info!("Quiz {} created for course {}", quiz.id, course_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(quiz, "Quiz created successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建测验失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: usize, correct: i64) -> CreateQuizQuestion {
        CreateQuizQuestion {
            text: "What is ownership?".to_string(),
            options: (0..options).map(|i| format!("option {i}")).collect(),
            correct_index: correct,
            explanation: None,
        }
    }

    #[test]
    fn test_valid_questions() {
        assert!(validate_questions(&[question(4, 0), question(2, 1)]).is_ok());
    }

    #[test]
    fn test_empty_quiz_rejected() {
        assert!(validate_questions(&[]).is_err());
    }

    #[test]
    fn test_correct_index_out_of_range() {
        assert!(validate_questions(&[question(3, 3)]).is_err());
        assert!(validate_questions(&[question(3, -1)]).is_err());
    }

    #[test]
    fn test_too_few_options() {
        assert!(validate_questions(&[question(1, 0)]).is_err());
    }
}
