use serde::Serialize;

use super::entities::{Answer, Question};

// 提问条目：附带全部回答
#[derive(Debug, Serialize)]
pub struct QuestionWithAnswers {
    #[serde(flatten)]
    pub question: Question,
    pub answers: Vec<Answer>,
}

// 讲座问答列表响应
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub items: Vec<QuestionWithAnswers>,
}
