use serde::Deserialize;

// 提问请求
#[derive(Debug, Deserialize)]
pub struct AskQuestionRequest {
    pub title: String,
    pub body: Option<String>,
}

// 回答请求
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub body: String,
}
