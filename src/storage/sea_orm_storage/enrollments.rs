use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::{courses, teachers, users};
use crate::errors::{CourseMarketError, Result};
use crate::models::{
    PaginationInfo,
    enrollments::{
        entities::Enrollment,
        responses::{EnrolledStudent, StudentListResponse},
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 报名课程
    ///
    /// 同一调用内更新课程报名计数与讲师累计收入，
    /// 计数器只在这里变更。重复报名由唯一索引拦截。
    pub async fn enroll_impl(
        &self,
        course_id: i64,
        user_id: i64,
        price_paid: i64,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            user_id: Set(user_id),
            price_paid: Set(price_paid),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("报名失败: {e}")))?;

        courses::Entity::update_many()
            .col_expr(
                courses::Column::TotalEnrollments,
                Expr::col(courses::Column::TotalEnrollments).add(1),
            )
            .filter(courses::Column::Id.eq(course_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                CourseMarketError::database_operation(format!("更新报名计数失败: {e}"))
            })?;

        if price_paid > 0
            && let Some(course) = courses::Entity::find_by_id(course_id)
                .one(&self.db)
                .await
                .map_err(|e| CourseMarketError::database_operation(format!("查询课程失败: {e}")))?
        {
            teachers::Entity::update_many()
                .col_expr(
                    teachers::Column::TotalEarnings,
                    Expr::col(teachers::Column::TotalEarnings).add(price_paid),
                )
                .filter(teachers::Column::Id.eq(course.teacher_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    CourseMarketError::database_operation(format!("更新讲师收入失败: {e}"))
                })?;
        }

        Ok(result.into_enrollment())
    }

    /// 查询是否已报名
    pub async fn is_enrolled_impl(&self, course_id: i64, user_id: i64) -> Result<bool> {
        let count = Enrollments::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询报名状态失败: {e}")))?;

        Ok(count > 0)
    }

    /// 分页列出学员的报名记录
    pub async fn list_user_enrollments_impl(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> Result<(Vec<Enrollment>, PaginationInfo)> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let paginator = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询报名总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询报名页数失败: {e}")))?;

        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询报名列表失败: {e}")))?;

        Ok((
            items.into_iter().map(|m| m.into_enrollment()).collect(),
            PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        ))
    }

    /// 分页列出课程学员及其公开信息
    pub async fn list_course_students_impl(
        &self,
        course_id: i64,
        page: i64,
        size: i64,
    ) -> Result<StudentListResponse> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let paginator = Enrollments::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询学员总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询学员页数失败: {e}")))?;

        let enrollments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询学员列表失败: {e}")))?;

        let mut items = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let user = users::Entity::find_by_id(enrollment.user_id)
                .one(&self.db)
                .await
                .map_err(|e| CourseMarketError::database_operation(format!("查询用户失败: {e}")))?;

            if let Some(user) = user {
                let enrollment = enrollment.into_enrollment();
                items.push(EnrolledStudent {
                    user_id: user.id,
                    username: user.username,
                    profile_name: user.profile_name.unwrap_or_default(),
                    avatar_url: user.avatar_url,
                    enrolled_at: enrollment.created_at,
                });
            }
        }

        Ok(StudentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出指定课程集合中某时间之后的报名记录
    pub async fn list_enrollments_since_impl(
        &self,
        course_ids: &[i64],
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<Enrollment>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let items = Enrollments::find()
            .filter(Column::CourseId.is_in(course_ids.to_vec()))
            .filter(Column::CreatedAt.gte(since.timestamp()))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询报名记录失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_enrollment()).collect())
    }

    /// 统计指定课程集合的报名总数
    pub async fn count_enrollments_impl(&self, course_ids: &[i64]) -> Result<i64> {
        if course_ids.is_empty() {
            return Ok(0);
        }

        let count = Enrollments::find()
            .filter(Column::CourseId.is_in(course_ids.to_vec()))
            .count(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("统计报名数失败: {e}")))?;

        Ok(count as i64)
    }

    /// 统计指定课程集合的已知总收入
    pub async fn sum_revenue_impl(&self, course_ids: &[i64]) -> Result<i64> {
        if course_ids.is_empty() {
            return Ok(0);
        }

        let items: Vec<i64> = Enrollments::find()
            .select_only()
            .column(Column::PricePaid)
            .filter(Column::CourseId.is_in(course_ids.to_vec()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("统计收入失败: {e}")))?;

        Ok(items.into_iter().sum())
    }
}
