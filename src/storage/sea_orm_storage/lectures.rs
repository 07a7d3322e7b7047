use super::SeaOrmStorage;
use crate::entity::lectures::{ActiveModel, Column, Entity as Lectures};
use crate::entity::resources;
use crate::errors::{CourseMarketError, Result};
use crate::models::lectures::{
    entities::{Lecture, Resource},
    requests::{CreateLectureRequest, CreateResourceRequest, UpdateLectureRequest},
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建讲座，顺序号排在课程末尾
    pub async fn create_lecture_impl(&self, req: CreateLectureRequest) -> Result<Lecture> {
        let now = chrono::Utc::now().timestamp();

        let position = self.count_lectures_by_course_impl(req.course_id).await? as i64 + 1;

        let model = ActiveModel {
            course_id: Set(req.course_id),
            title: Set(req.title),
            position: Set(position),
            video_url: Set(req.video_url),
            thumbnail_url: Set(req.thumbnail_url),
            transcript: Set(req.transcript),
            summary: Set(None),
            duration_seconds: Set(req.duration_seconds),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("创建讲座失败: {e}")))?;

        Ok(result.into_lecture())
    }

    /// 通过 ID 获取讲座
    pub async fn get_lecture_by_id_impl(&self, lecture_id: i64) -> Result<Option<Lecture>> {
        let result = Lectures::find_by_id(lecture_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询讲座失败: {e}")))?;

        Ok(result.map(|m| m.into_lecture()))
    }

    /// 列出课程的全部讲座
    pub async fn list_lectures_by_course_impl(&self, course_id: i64) -> Result<Vec<Lecture>> {
        let lectures = Lectures::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Position)
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询讲座列表失败: {e}")))?;

        Ok(lectures.into_iter().map(|m| m.into_lecture()).collect())
    }

    /// 统计课程讲座数量
    pub async fn count_lectures_by_course_impl(&self, course_id: i64) -> Result<u64> {
        let count = Lectures::find()
            .filter(Column::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("统计讲座数量失败: {e}")))?;

        Ok(count)
    }

    /// 更新讲座信息
    pub async fn update_lecture_impl(
        &self,
        lecture_id: i64,
        update: UpdateLectureRequest,
    ) -> Result<Option<Lecture>> {
        let existing = self.get_lecture_by_id_impl(lecture_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(lecture_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(position) = update.position {
            model.position = Set(position);
        }

        if let Some(thumbnail_url) = update.thumbnail_url {
            model.thumbnail_url = Set(Some(thumbnail_url));
        }

        if let Some(duration_seconds) = update.duration_seconds {
            model.duration_seconds = Set(duration_seconds);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("更新讲座失败: {e}")))?;

        self.get_lecture_by_id_impl(lecture_id).await
    }

    /// 写入讲稿摘要
    pub async fn set_lecture_summary_impl(&self, lecture_id: i64, summary: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Lectures::update_many()
            .col_expr(Column::Summary, Expr::value(summary))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(lecture_id))
            .exec(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("写入摘要失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除讲座
    pub async fn delete_lecture_impl(&self, lecture_id: i64) -> Result<bool> {
        let result = Lectures::delete_by_id(lecture_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("删除讲座失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建讲座资源
    pub async fn create_resource_impl(&self, req: CreateResourceRequest) -> Result<Resource> {
        let now = chrono::Utc::now().timestamp();

        let model = resources::ActiveModel {
            lecture_id: Set(req.lecture_id),
            title: Set(req.title),
            file_url: Set(req.file_url),
            file_size: Set(req.file_size),
            content_type: Set(req.content_type),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("创建资源失败: {e}")))?;

        Ok(result.into_resource())
    }

    /// 通过 ID 获取资源
    pub async fn get_resource_by_id_impl(&self, resource_id: i64) -> Result<Option<Resource>> {
        let result = resources::Entity::find_by_id(resource_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询资源失败: {e}")))?;

        Ok(result.map(|m| m.into_resource()))
    }

    /// 列出讲座资源
    pub async fn list_resources_by_lecture_impl(&self, lecture_id: i64) -> Result<Vec<Resource>> {
        let items = resources::Entity::find()
            .filter(resources::Column::LectureId.eq(lecture_id))
            .order_by_asc(resources::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询资源列表失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_resource()).collect())
    }

    /// 删除资源
    pub async fn delete_resource_impl(&self, resource_id: i64) -> Result<bool> {
        let result = resources::Entity::delete_by_id(resource_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("删除资源失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
