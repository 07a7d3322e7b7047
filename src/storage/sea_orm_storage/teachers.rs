use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::users;
use crate::errors::{CourseMarketError, Result};
use crate::models::teachers::{
    entities::Teacher,
    requests::{CreateTeacherRequest, UpdateTeacherRequest},
};
use crate::models::users::entities::UserRole;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建讲师资料，同时把用户角色置为 instructor
    pub async fn create_teacher_impl(
        &self,
        user_id: i64,
        req: CreateTeacherRequest,
    ) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();
        let profile_complete =
            req.bio.as_deref().is_some_and(|b| !b.trim().is_empty()) && !req.expertise.is_empty();

        let expertise = serde_json::to_string(&req.expertise)
            .map_err(|e| CourseMarketError::serialization(format!("专长序列化失败: {e}")))?;

        let model = ActiveModel {
            user_id: Set(user_id),
            bio: Set(req.bio),
            expertise: Set(expertise),
            rating: Set(0.0),
            total_earnings: Set(0),
            total_courses: Set(0),
            profile_complete: Set(profile_complete),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("创建讲师资料失败: {e}")))?;

        // 角色提升与资料创建不在同一事务中，角色写失败时资料已存在，
        // 重试创建会撞唯一索引并被上层当作冲突处理
        users::Entity::update_many()
            .col_expr(
                users::Column::Role,
                sea_orm::sea_query::Expr::value(UserRole::Instructor.to_string()),
            )
            .filter(users::Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("更新用户角色失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取讲师资料
    pub async fn get_teacher_by_id_impl(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询讲师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过用户 ID 获取讲师资料
    pub async fn get_teacher_by_user_id_impl(&self, user_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询讲师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 更新讲师资料
    pub async fn update_teacher_impl(
        &self,
        teacher_id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = match self.get_teacher_by_id_impl(teacher_id).await? {
            Some(t) => t,
            None => return Ok(None),
        };

        let now = chrono::Utc::now().timestamp();

        let bio = update.bio.or(existing.bio);
        let expertise = update.expertise.unwrap_or(existing.expertise);
        let profile_complete =
            bio.as_deref().is_some_and(|b| !b.trim().is_empty()) && !expertise.is_empty();

        let expertise_json = serde_json::to_string(&expertise)
            .map_err(|e| CourseMarketError::serialization(format!("专长序列化失败: {e}")))?;

        let model = ActiveModel {
            id: Set(teacher_id),
            bio: Set(bio),
            expertise: Set(expertise_json),
            profile_complete: Set(profile_complete),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("更新讲师资料失败: {e}")))?;

        self.get_teacher_by_id_impl(teacher_id).await
    }
}
