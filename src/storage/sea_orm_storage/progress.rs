use super::SeaOrmStorage;
use crate::entity::lecture_progress::{ActiveModel, Column, Entity as LectureProgresses};
use crate::entity::lectures;
use crate::errors::{CourseMarketError, Result};
use crate::models::progress::entities::LectureProgress;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 记录讲座完成，已存在时直接返回原记录
    pub async fn complete_lecture_impl(
        &self,
        user_id: i64,
        course_id: i64,
        lecture_id: i64,
    ) -> Result<LectureProgress> {
        let existing = LectureProgresses::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::LectureId.eq(lecture_id))
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询完成记录失败: {e}")))?;

        if let Some(record) = existing {
            return Ok(record.into_progress());
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            lecture_id: Set(lecture_id),
            completed_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("写入完成记录失败: {e}")))?;

        Ok(result.into_progress())
    }

    /// 列出学员在某课程的完成记录
    pub async fn list_progress_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Vec<LectureProgress>> {
        let items = LectureProgresses::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::CompletedAt)
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询完成记录失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_progress()).collect())
    }

    /// 统计学员在某课程完成的讲座数
    pub async fn count_completed_lectures_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<i64> {
        let count = LectureProgresses::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("统计完成记录失败: {e}")))?;

        Ok(count as i64)
    }

    /// 统计指定课程集合的讲座完成记录总数
    pub async fn count_lecture_completions_impl(&self, course_ids: &[i64]) -> Result<i64> {
        if course_ids.is_empty() {
            return Ok(0);
        }

        let count = LectureProgresses::find()
            .filter(Column::CourseId.is_in(course_ids.to_vec()))
            .count(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("统计完成记录失败: {e}")))?;

        Ok(count as i64)
    }

    /// 统计指定课程集合的讲座总数
    pub async fn count_lectures_impl(&self, course_ids: &[i64]) -> Result<i64> {
        if course_ids.is_empty() {
            return Ok(0);
        }

        let count = lectures::Entity::find()
            .filter(lectures::Column::CourseId.is_in(course_ids.to_vec()))
            .count(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("统计讲座数失败: {e}")))?;

        Ok(count as i64)
    }
}
