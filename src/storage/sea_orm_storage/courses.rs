use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::teachers;
use crate::errors::{CourseMarketError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CourseSort, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课程，讲师课程计数在同一调用内 +1
    pub async fn create_course_impl(
        &self,
        teacher_id: i64,
        req: CreateCourseRequest,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let tags = serde_json::to_string(&req.tags)
            .map_err(|e| CourseMarketError::serialization(format!("标签序列化失败: {e}")))?;

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            title: Set(req.title),
            description: Set(req.description),
            category: Set(req.category),
            tags: Set(tags),
            price: Set(req.price),
            level: Set(req.level.to_string()),
            duration_minutes: Set(req.duration_minutes),
            rating: Set(0.0),
            rating_count: Set(0),
            total_enrollments: Set(0),
            published: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("创建课程失败: {e}")))?;

        teachers::Entity::update_many()
            .col_expr(
                teachers::Column::TotalCourses,
                Expr::col(teachers::Column::TotalCourses).add(1),
            )
            .filter(teachers::Column::Id.eq(teacher_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                CourseMarketError::database_operation(format!("更新讲师课程计数失败: {e}"))
            })?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        // 发布状态筛选（公开列表只看已发布课程）
        if let Some(published) = query.published {
            select = select.filter(Column::Published.eq(published));
        }

        // 讲师筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 搜索条件：标题 / 描述 / 分类
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Description.contains(&escaped))
                    .add(Column::Category.contains(&escaped)),
            );
        }

        // 分类筛选
        if let Some(ref category) = query.category
            && !category.trim().is_empty()
        {
            select = select.filter(Column::Category.eq(category.trim()));
        }

        // 级别筛选
        if let Some(ref level) = query.level {
            select = select.filter(Column::Level.eq(level.to_string()));
        }

        // 价格区间
        if let Some(min_price) = query.min_price {
            select = select.filter(Column::Price.gte(min_price));
        }
        if let Some(max_price) = query.max_price {
            select = select.filter(Column::Price.lte(max_price));
        }

        // 排序
        select = match query.sort.unwrap_or_default() {
            CourseSort::Newest => select.order_by_desc(Column::CreatedAt),
            CourseSort::Rating => select
                .order_by_desc(Column::Rating)
                .order_by_desc(Column::RatingCount),
            CourseSort::Enrollments => select.order_by_desc(Column::TotalEnrollments),
        };

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出讲师名下所有课程 ID
    pub async fn list_course_ids_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = Courses::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::TeacherId.eq(teacher_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                CourseMarketError::database_operation(format!("查询讲师课程列表失败: {e}"))
            })?;

        Ok(ids)
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(course_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(course_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(category) = update.category {
            model.category = Set(category);
        }

        if let Some(tags) = update.tags {
            let tags = serde_json::to_string(&tags)
                .map_err(|e| CourseMarketError::serialization(format!("标签序列化失败: {e}")))?;
            model.tags = Set(tags);
        }

        if let Some(price) = update.price {
            model.price = Set(price);
        }

        if let Some(level) = update.level {
            model.level = Set(level.to_string());
        }

        if let Some(duration_minutes) = update.duration_minutes {
            model.duration_minutes = Set(duration_minutes);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(course_id).await
    }

    /// 设置课程发布状态
    pub async fn set_course_published_impl(
        &self,
        course_id: i64,
        published: bool,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(course_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            id: Set(course_id),
            published: Set(published),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("更新发布状态失败: {e}")))?;

        self.get_course_by_id_impl(course_id).await
    }

    /// 设置课程缩略图
    pub async fn set_course_thumbnail_impl(
        &self,
        course_id: i64,
        thumbnail_url: &str,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Courses::update_many()
            .col_expr(Column::ThumbnailUrl, Expr::value(thumbnail_url))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(course_id))
            .exec(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("更新缩略图失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除课程，讲师课程计数 -1
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let existing = match self.get_course_by_id_impl(course_id).await? {
            Some(c) => c,
            None => return Ok(false),
        };

        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("删除课程失败: {e}")))?;

        if result.rows_affected > 0 {
            teachers::Entity::update_many()
                .col_expr(
                    teachers::Column::TotalCourses,
                    Expr::col(teachers::Column::TotalCourses).sub(1),
                )
                .filter(teachers::Column::Id.eq(existing.teacher_id))
                .filter(teachers::Column::TotalCourses.gt(0))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    CourseMarketError::database_operation(format!("更新讲师课程计数失败: {e}"))
                })?;
        }

        Ok(result.rows_affected > 0)
    }
}
