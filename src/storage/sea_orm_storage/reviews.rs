use super::SeaOrmStorage;
use crate::entity::reviews::{ActiveModel, Column, Entity as Reviews};
use crate::entity::{courses, teachers, users};
use crate::errors::{CourseMarketError, Result};
use crate::models::{
    PaginationInfo,
    reviews::{
        entities::Review,
        requests::{CreateReviewRequest, UpdateReviewRequest},
        responses::{ReviewItem, ReviewListResponse},
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 重算课程评分聚合与讲师平均评分
    ///
    /// 评分聚合只在这里写入，评价的增删改都会走到这里。
    async fn recompute_rating_aggregates(&self, course_id: i64) -> Result<()> {
        let ratings: Vec<i64> = Reviews::find()
            .select_only()
            .column(Column::Rating)
            .filter(Column::CourseId.eq(course_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询评分失败: {e}")))?;

        let count = ratings.len() as i64;
        let average = if count > 0 {
            ratings.iter().sum::<i64>() as f64 / count as f64
        } else {
            0.0
        };
        let average = (average * 100.0).round() / 100.0;

        courses::Entity::update_many()
            .col_expr(courses::Column::Rating, Expr::value(average))
            .col_expr(courses::Column::RatingCount, Expr::value(count))
            .filter(courses::Column::Id.eq(course_id))
            .exec(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("更新课程评分失败: {e}")))?;

        // 讲师平均评分：名下有评分的课程的评分均值
        let course = courses::Entity::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询课程失败: {e}")))?;

        if let Some(course) = course {
            let rated: Vec<f64> = courses::Entity::find()
                .select_only()
                .column(courses::Column::Rating)
                .filter(courses::Column::TeacherId.eq(course.teacher_id))
                .filter(courses::Column::RatingCount.gt(0))
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(|e| {
                    CourseMarketError::database_operation(format!("查询讲师课程评分失败: {e}"))
                })?;

            let teacher_rating = if rated.is_empty() {
                0.0
            } else {
                let avg = rated.iter().sum::<f64>() / rated.len() as f64;
                (avg * 100.0).round() / 100.0
            };

            teachers::Entity::update_many()
                .col_expr(teachers::Column::Rating, Expr::value(teacher_rating))
                .filter(teachers::Column::Id.eq(course.teacher_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    CourseMarketError::database_operation(format!("更新讲师评分失败: {e}"))
                })?;
        }

        Ok(())
    }

    /// 创建评价
    pub async fn create_review_impl(
        &self,
        course_id: i64,
        user_id: i64,
        req: CreateReviewRequest,
    ) -> Result<Review> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            user_id: Set(user_id),
            rating: Set(req.rating),
            comment: Set(req.comment),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("创建评价失败: {e}")))?;

        self.recompute_rating_aggregates(course_id).await?;

        Ok(result.into_review())
    }

    /// 通过 ID 获取评价
    pub async fn get_review_by_id_impl(&self, review_id: i64) -> Result<Option<Review>> {
        let result = Reviews::find_by_id(review_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询评价失败: {e}")))?;

        Ok(result.map(|m| m.into_review()))
    }

    /// 查询学员对课程的评价
    pub async fn get_review_by_course_and_user_impl(
        &self,
        course_id: i64,
        user_id: i64,
    ) -> Result<Option<Review>> {
        let result = Reviews::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询评价失败: {e}")))?;

        Ok(result.map(|m| m.into_review()))
    }

    /// 分页列出课程评价
    pub async fn list_reviews_with_pagination_impl(
        &self,
        course_id: i64,
        page: i64,
        size: i64,
    ) -> Result<ReviewListResponse> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let paginator = Reviews::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询评价总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询评价页数失败: {e}")))?;

        let reviews = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询评价列表失败: {e}")))?;

        let mut items = Vec::with_capacity(reviews.len());
        for review in reviews {
            let user = users::Entity::find_by_id(review.user_id)
                .one(&self.db)
                .await
                .map_err(|e| CourseMarketError::database_operation(format!("查询用户失败: {e}")))?;

            let (profile_name, avatar_url) = user
                .map(|u| (u.profile_name.unwrap_or_default(), u.avatar_url))
                .unwrap_or_default();

            items.push(ReviewItem {
                review: review.into_review(),
                profile_name,
                avatar_url,
            });
        }

        Ok(ReviewListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新评价
    pub async fn update_review_impl(
        &self,
        review_id: i64,
        update: UpdateReviewRequest,
    ) -> Result<Option<Review>> {
        let existing = match self.get_review_by_id_impl(review_id).await? {
            Some(r) => r,
            None => return Ok(None),
        };

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(review_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(rating) = update.rating {
            model.rating = Set(rating);
        }

        if let Some(comment) = update.comment {
            model.comment = Set(Some(comment));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("更新评价失败: {e}")))?;

        self.recompute_rating_aggregates(existing.course_id).await?;

        self.get_review_by_id_impl(review_id).await
    }

    /// 删除评价
    pub async fn delete_review_impl(&self, review_id: i64) -> Result<bool> {
        let existing = match self.get_review_by_id_impl(review_id).await? {
            Some(r) => r,
            None => return Ok(false),
        };

        let result = Reviews::delete_by_id(review_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("删除评价失败: {e}")))?;

        if result.rows_affected > 0 {
            self.recompute_rating_aggregates(existing.course_id).await?;
        }

        Ok(result.rows_affected > 0)
    }

    /// 列出指定课程集合的全部评分值
    pub async fn list_review_ratings_impl(&self, course_ids: &[i64]) -> Result<Vec<i64>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ratings: Vec<i64> = Reviews::find()
            .select_only()
            .column(Column::Rating)
            .filter(Column::CourseId.is_in(course_ids.to_vec()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询评分失败: {e}")))?;

        Ok(ratings)
    }
}
