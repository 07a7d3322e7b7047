use serde::Serialize;

use super::entities::{Quiz, QuizAttempt, QuizQuestion};

// 学员视角的测验题目：不包含答案与解析
#[derive(Debug, Serialize)]
pub struct QuizQuestionPublic {
    pub id: i64,
    pub position: i64,
    pub text: String,
    pub options: Vec<String>,
}

impl From<QuizQuestion> for QuizQuestionPublic {
    fn from(q: QuizQuestion) -> Self {
        Self {
            id: q.id,
            position: q.position,
            text: q.text,
            options: q.options,
        }
    }
}

// 学员视角的测验响应
#[derive(Debug, Serialize)]
pub struct QuizPublicResponse {
    pub id: i64,
    pub course_id: i64,
    pub lecture_id: Option<i64>,
    pub title: String,
    pub questions: Vec<QuizQuestionPublic>,
}

impl From<Quiz> for QuizPublicResponse {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            course_id: quiz.course_id,
            lecture_id: quiz.lecture_id,
            title: quiz.title,
            questions: quiz.questions.into_iter().map(Into::into).collect(),
        }
    }
}

// 单题判分结果
#[derive(Debug, Serialize)]
pub struct QuestionResult {
    pub question_id: i64,
    pub selected_index: i64,
    pub correct_index: i64,
    pub correct: bool,
    pub explanation: Option<String>,
}

// 答题结果响应
#[derive(Debug, Serialize)]
pub struct AttemptResultResponse {
    pub attempt: QuizAttempt,
    pub results: Vec<QuestionResult>,
}

// 答题记录列表响应
#[derive(Debug, Serialize)]
pub struct AttemptListResponse {
    pub items: Vec<QuizAttempt>,
}
