use super::SeaOrmStorage;
use crate::entity::quiz_attempts;
use crate::entity::quiz_questions;
use crate::entity::quizzes::{ActiveModel, Column, Entity as Quizzes};
use crate::errors::{CourseMarketError, Result};
use crate::models::quizzes::{
    entities::{Quiz, QuizAttempt},
    requests::{CreateQuizQuestion, CreateQuizRequest, UpdateQuizRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 写入题目列表
    async fn insert_questions(&self, quiz_id: i64, questions: Vec<CreateQuizQuestion>) -> Result<()> {
        for (index, question) in questions.into_iter().enumerate() {
            let options = serde_json::to_string(&question.options)
                .map_err(|e| CourseMarketError::serialization(format!("选项序列化失败: {e}")))?;

            let model = quiz_questions::ActiveModel {
                quiz_id: Set(quiz_id),
                position: Set(index as i64 + 1),
                text: Set(question.text),
                options: Set(options),
                correct_index: Set(question.correct_index),
                explanation: Set(question.explanation),
                ..Default::default()
            };

            model
                .insert(&self.db)
                .await
                .map_err(|e| CourseMarketError::database_operation(format!("写入题目失败: {e}")))?;
        }
        Ok(())
    }

    /// 创建测验及其题目
    pub async fn create_quiz_impl(&self, course_id: i64, req: CreateQuizRequest) -> Result<Quiz> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            lecture_id: Set(req.lecture_id),
            title: Set(req.title),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let quiz = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("创建测验失败: {e}")))?;

        self.insert_questions(quiz.id, req.questions).await?;

        self.get_quiz_by_id_impl(quiz.id)
            .await?
            .ok_or_else(|| CourseMarketError::not_found("测验创建后查询失败"))
    }

    /// 通过 ID 获取测验（含题目）
    pub async fn get_quiz_by_id_impl(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        let quiz = Quizzes::find_by_id(quiz_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询测验失败: {e}")))?;

        let quiz = match quiz {
            Some(q) => q,
            None => return Ok(None),
        };

        let questions = quiz_questions::Entity::find()
            .filter(quiz_questions::Column::QuizId.eq(quiz_id))
            .order_by_asc(quiz_questions::Column::Position)
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(Some(quiz.into_quiz(questions)))
    }

    /// 列出课程的全部测验
    pub async fn list_quizzes_by_course_impl(&self, course_id: i64) -> Result<Vec<Quiz>> {
        let quizzes = Quizzes::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询测验列表失败: {e}")))?;

        let mut result = Vec::with_capacity(quizzes.len());
        for quiz in quizzes {
            let questions = quiz_questions::Entity::find()
                .filter(quiz_questions::Column::QuizId.eq(quiz.id))
                .order_by_asc(quiz_questions::Column::Position)
                .all(&self.db)
                .await
                .map_err(|e| CourseMarketError::database_operation(format!("查询题目失败: {e}")))?;
            result.push(quiz.into_quiz(questions));
        }

        Ok(result)
    }

    /// 更新测验，题目列表整体替换
    pub async fn update_quiz_impl(
        &self,
        quiz_id: i64,
        update: UpdateQuizRequest,
    ) -> Result<Option<Quiz>> {
        let existing = Quizzes::find_by_id(quiz_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询测验失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(quiz_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("更新测验失败: {e}")))?;

        if let Some(questions) = update.questions {
            quiz_questions::Entity::delete_many()
                .filter(quiz_questions::Column::QuizId.eq(quiz_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    CourseMarketError::database_operation(format!("清除旧题目失败: {e}"))
                })?;

            self.insert_questions(quiz_id, questions).await?;
        }

        self.get_quiz_by_id_impl(quiz_id).await
    }

    /// 删除测验
    pub async fn delete_quiz_impl(&self, quiz_id: i64) -> Result<bool> {
        let result = Quizzes::delete_by_id(quiz_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("删除测验失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 写入答题记录
    pub async fn create_attempt_impl(
        &self,
        quiz_id: i64,
        user_id: i64,
        score: i64,
        total: i64,
    ) -> Result<QuizAttempt> {
        let now = chrono::Utc::now().timestamp();

        let model = quiz_attempts::ActiveModel {
            quiz_id: Set(quiz_id),
            user_id: Set(user_id),
            score: Set(score),
            total: Set(total),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("写入答题记录失败: {e}")))?;

        Ok(result.into_attempt())
    }

    /// 列出答题记录
    pub async fn list_attempts_impl(
        &self,
        quiz_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<QuizAttempt>> {
        let mut select = quiz_attempts::Entity::find()
            .filter(quiz_attempts::Column::QuizId.eq(quiz_id))
            .order_by_desc(quiz_attempts::Column::CreatedAt);

        if let Some(user_id) = user_id {
            select = select.filter(quiz_attempts::Column::UserId.eq(user_id));
        }

        let items = select
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询答题记录失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_attempt()).collect())
    }

    /// 列出学员在某课程中至少答过一次的测验 ID
    pub async fn list_attempted_quiz_ids_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Vec<i64>> {
        let quiz_ids: Vec<i64> = Quizzes::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::CourseId.eq(course_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询测验列表失败: {e}")))?;

        if quiz_ids.is_empty() {
            return Ok(Vec::new());
        }

        let attempted: Vec<i64> = quiz_attempts::Entity::find()
            .select_only()
            .column(quiz_attempts::Column::QuizId)
            .distinct()
            .filter(quiz_attempts::Column::UserId.eq(user_id))
            .filter(quiz_attempts::Column::QuizId.is_in(quiz_ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询答题记录失败: {e}")))?;

        Ok(attempted)
    }
}
