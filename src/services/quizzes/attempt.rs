use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::quizzes::entities::QuizQuestion;
use crate::models::quizzes::requests::SubmitAttemptRequest;
use crate::models::quizzes::responses::{AttemptResultResponse, QuestionResult};
use crate::models::{ApiResponse, ErrorCode};

/// 判分：每题答案下标完全一致计 1 分
pub(crate) fn score_attempt(questions: &[QuizQuestion], answers: &[i64]) -> (i64, Vec<QuestionResult>) {
    let mut score = 0;
    let mut results = Vec::with_capacity(questions.len());

    for (question, &selected) in questions.iter().zip(answers.iter()) {
        let correct = selected == question.correct_index;
        if correct {
            score += 1;
        }
        results.push(QuestionResult {
            question_id: question.id,
            selected_index: selected,
            correct_index: question.correct_index,
            correct,
            explanation: question.explanation.clone(),
        });
    }

    (score, results)
}

pub async fn submit_attempt(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    attempt_data: SubmitAttemptRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "Quiz not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验失败: {e}"),
                )),
            );
        }
    };

    // 只有报名学员能答题
    match storage.is_enrolled(quiz.course_id, user_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotEnrolled,
                "You are not enrolled in this course",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询报名状态失败: {e}"),
                )),
            );
        }
    }

    // 答案数量必须与题目数量一致
    if attempt_data.answers.len() != quiz.questions.len() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::QuizAttemptInvalid,
            format!(
                "Expected {} answers, got {}",
                quiz.questions.len(),
                attempt_data.answers.len()
            ),
        )));
    }

    let total = quiz.questions.len() as i64;
    let (score, results) = score_attempt(&quiz.questions, &attempt_data.answers);

    match storage.create_attempt(quiz_id, user_id, score, total).await {
        Ok(attempt) => {
            info!(
                "User {} scored {}/{} on quiz {}",
                user_id, score, total, quiz_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AttemptResultResponse { attempt, results },
                "Attempt recorded",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("写入答题记录失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, correct_index: i64) -> QuizQuestion {
        QuizQuestion {
            id,
            position: id,
            text: format!("question {id}"),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_index,
            explanation: Some(format!("because {id}")),
        }
    }

    #[test]
    fn test_all_correct() {
        let questions = vec![question(1, 0), question(2, 2)];
        let (score, results) = score_attempt(&questions, &[0, 2]);
        assert_eq!(score, 2);
        assert!(results.iter().all(|r| r.correct));
    }

    #[test]
    fn test_partial_score() {
        let questions = vec![question(1, 0), question(2, 2), question(3, 1)];
        let (score, results) = score_attempt(&questions, &[0, 1, 1]);
        assert_eq!(score, 2);
        assert!(results[0].correct);
        assert!(!results[1].correct);
        assert!(results[2].correct);
    }

    #[test]
    fn test_results_carry_explanations() {
        let questions = vec![question(7, 1)];
        let (score, results) = score_attempt(&questions, &[0]);
        assert_eq!(score, 0);
        assert_eq!(results[0].question_id, 7);
        assert_eq!(results[0].explanation.as_deref(), Some("because 7"));
    }

    #[test]
    fn test_empty_quiz_scores_zero() {
        let (score, results) = score_attempt(&[], &[]);
        assert_eq!(score, 0);
        assert!(results.is_empty());
    }
}
