use serde::Deserialize;

// 创建测验请求
#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    pub lecture_id: Option<i64>,
    pub title: String,
    pub questions: Vec<CreateQuizQuestion>,
}

// 创建测验题目
#[derive(Debug, Deserialize)]
pub struct CreateQuizQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: i64,
    pub explanation: Option<String>,
}

// 更新测验请求：整体替换题目列表
#[derive(Debug, Deserialize)]
pub struct UpdateQuizRequest {
    pub title: Option<String>,
    pub questions: Option<Vec<CreateQuizQuestion>>,
}

// 提交答题请求：按题目顺序给出所选选项下标
#[derive(Debug, Deserialize)]
pub struct SubmitAttemptRequest {
    pub answers: Vec<i64>,
}
