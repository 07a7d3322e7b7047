use super::SeaOrmStorage;
use crate::entity::answers;
use crate::entity::questions::{ActiveModel, Column, Entity as Questions};
use crate::errors::{CourseMarketError, Result};
use crate::models::questions::{
    entities::{Answer, Question},
    requests::AskQuestionRequest,
    responses::QuestionWithAnswers,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建提问
    pub async fn create_question_impl(
        &self,
        lecture_id: i64,
        user_id: i64,
        req: AskQuestionRequest,
    ) -> Result<Question> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            lecture_id: Set(lecture_id),
            user_id: Set(user_id),
            title: Set(req.title),
            body: Set(req.body),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("创建提问失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 通过 ID 获取提问
    pub async fn get_question_by_id_impl(&self, question_id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(question_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询提问失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 列出讲座问答（含回答）
    pub async fn list_questions_by_lecture_impl(
        &self,
        lecture_id: i64,
    ) -> Result<Vec<QuestionWithAnswers>> {
        let questions = Questions::find()
            .filter(Column::LectureId.eq(lecture_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询提问列表失败: {e}")))?;

        let mut items = Vec::with_capacity(questions.len());
        for question in questions {
            let answers = answers::Entity::find()
                .filter(answers::Column::QuestionId.eq(question.id))
                .order_by_asc(answers::Column::CreatedAt)
                .all(&self.db)
                .await
                .map_err(|e| {
                    CourseMarketError::database_operation(format!("查询回答列表失败: {e}"))
                })?;

            items.push(QuestionWithAnswers {
                question: question.into_question(),
                answers: answers.into_iter().map(|m| m.into_answer()).collect(),
            });
        }

        Ok(items)
    }

    /// 创建回答
    pub async fn create_answer_impl(
        &self,
        question_id: i64,
        user_id: i64,
        body: &str,
    ) -> Result<Answer> {
        let now = chrono::Utc::now().timestamp();

        let model = answers::ActiveModel {
            question_id: Set(question_id),
            user_id: Set(user_id),
            body: Set(body.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("创建回答失败: {e}")))?;

        Ok(result.into_answer())
    }
}
