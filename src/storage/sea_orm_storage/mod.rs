//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod enrollments;
mod lectures;
mod progress;
mod questions;
mod quizzes;
mod reviews;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{CourseMarketError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CourseMarketError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CourseMarketError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CourseMarketError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CourseMarketError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CourseMarketError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{entities::Enrollment, responses::StudentListResponse},
    lectures::{
        entities::{Lecture, Resource},
        requests::{CreateLectureRequest, CreateResourceRequest, UpdateLectureRequest},
    },
    progress::entities::LectureProgress,
    questions::{
        entities::{Answer, Question},
        requests::AskQuestionRequest,
        responses::QuestionWithAnswers,
    },
    quizzes::{
        entities::{Quiz, QuizAttempt},
        requests::{CreateQuizRequest, UpdateQuizRequest},
    },
    reviews::{
        entities::Review,
        requests::{CreateReviewRequest, UpdateReviewRequest},
        responses::ReviewListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 讲师模块
    async fn create_teacher(&self, user_id: i64, req: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(user_id, req).await
    }

    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(teacher_id).await
    }

    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_user_id_impl(user_id).await
    }

    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(teacher_id, update).await
    }

    // 课程模块
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(teacher_id, course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn list_course_ids_by_teacher(&self, teacher_id: i64) -> Result<Vec<i64>> {
        self.list_course_ids_by_teacher_impl(teacher_id).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn set_course_published(&self, course_id: i64, published: bool) -> Result<Option<Course>> {
        self.set_course_published_impl(course_id, published).await
    }

    async fn set_course_thumbnail(&self, course_id: i64, thumbnail_url: &str) -> Result<bool> {
        self.set_course_thumbnail_impl(course_id, thumbnail_url)
            .await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    // 讲座模块
    async fn create_lecture(&self, lecture: CreateLectureRequest) -> Result<Lecture> {
        self.create_lecture_impl(lecture).await
    }

    async fn get_lecture_by_id(&self, lecture_id: i64) -> Result<Option<Lecture>> {
        self.get_lecture_by_id_impl(lecture_id).await
    }

    async fn list_lectures_by_course(&self, course_id: i64) -> Result<Vec<Lecture>> {
        self.list_lectures_by_course_impl(course_id).await
    }

    async fn count_lectures_by_course(&self, course_id: i64) -> Result<u64> {
        self.count_lectures_by_course_impl(course_id).await
    }

    async fn update_lecture(
        &self,
        lecture_id: i64,
        update: UpdateLectureRequest,
    ) -> Result<Option<Lecture>> {
        self.update_lecture_impl(lecture_id, update).await
    }

    async fn set_lecture_summary(&self, lecture_id: i64, summary: &str) -> Result<bool> {
        self.set_lecture_summary_impl(lecture_id, summary).await
    }

    async fn delete_lecture(&self, lecture_id: i64) -> Result<bool> {
        self.delete_lecture_impl(lecture_id).await
    }

    // 资源模块
    async fn create_resource(&self, resource: CreateResourceRequest) -> Result<Resource> {
        self.create_resource_impl(resource).await
    }

    async fn get_resource_by_id(&self, resource_id: i64) -> Result<Option<Resource>> {
        self.get_resource_by_id_impl(resource_id).await
    }

    async fn list_resources_by_lecture(&self, lecture_id: i64) -> Result<Vec<Resource>> {
        self.list_resources_by_lecture_impl(lecture_id).await
    }

    async fn delete_resource(&self, resource_id: i64) -> Result<bool> {
        self.delete_resource_impl(resource_id).await
    }

    // 报名模块
    async fn enroll(&self, course_id: i64, user_id: i64, price_paid: i64) -> Result<Enrollment> {
        self.enroll_impl(course_id, user_id, price_paid).await
    }

    async fn is_enrolled(&self, course_id: i64, user_id: i64) -> Result<bool> {
        self.is_enrolled_impl(course_id, user_id).await
    }

    async fn list_user_enrollments(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> Result<(Vec<Enrollment>, PaginationInfo)> {
        self.list_user_enrollments_impl(user_id, page, size).await
    }

    async fn list_course_students(
        &self,
        course_id: i64,
        page: i64,
        size: i64,
    ) -> Result<StudentListResponse> {
        self.list_course_students_impl(course_id, page, size).await
    }

    async fn list_enrollments_since(
        &self,
        course_ids: &[i64],
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<Enrollment>> {
        self.list_enrollments_since_impl(course_ids, since).await
    }

    async fn count_enrollments(&self, course_ids: &[i64]) -> Result<i64> {
        self.count_enrollments_impl(course_ids).await
    }

    async fn sum_revenue(&self, course_ids: &[i64]) -> Result<i64> {
        self.sum_revenue_impl(course_ids).await
    }

    // 学习进度模块
    async fn complete_lecture(
        &self,
        user_id: i64,
        course_id: i64,
        lecture_id: i64,
    ) -> Result<LectureProgress> {
        self.complete_lecture_impl(user_id, course_id, lecture_id)
            .await
    }

    async fn list_progress(&self, user_id: i64, course_id: i64) -> Result<Vec<LectureProgress>> {
        self.list_progress_impl(user_id, course_id).await
    }

    async fn count_completed_lectures(&self, user_id: i64, course_id: i64) -> Result<i64> {
        self.count_completed_lectures_impl(user_id, course_id).await
    }

    async fn count_lecture_completions(&self, course_ids: &[i64]) -> Result<i64> {
        self.count_lecture_completions_impl(course_ids).await
    }

    async fn count_lectures(&self, course_ids: &[i64]) -> Result<i64> {
        self.count_lectures_impl(course_ids).await
    }

    // 测验模块
    async fn create_quiz(&self, course_id: i64, quiz: CreateQuizRequest) -> Result<Quiz> {
        self.create_quiz_impl(course_id, quiz).await
    }

    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_id_impl(quiz_id).await
    }

    async fn list_quizzes_by_course(&self, course_id: i64) -> Result<Vec<Quiz>> {
        self.list_quizzes_by_course_impl(course_id).await
    }

    async fn update_quiz(&self, quiz_id: i64, update: UpdateQuizRequest) -> Result<Option<Quiz>> {
        self.update_quiz_impl(quiz_id, update).await
    }

    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool> {
        self.delete_quiz_impl(quiz_id).await
    }

    async fn create_attempt(
        &self,
        quiz_id: i64,
        user_id: i64,
        score: i64,
        total: i64,
    ) -> Result<QuizAttempt> {
        self.create_attempt_impl(quiz_id, user_id, score, total)
            .await
    }

    async fn list_attempts(&self, quiz_id: i64, user_id: Option<i64>) -> Result<Vec<QuizAttempt>> {
        self.list_attempts_impl(quiz_id, user_id).await
    }

    async fn list_attempted_quiz_ids(&self, user_id: i64, course_id: i64) -> Result<Vec<i64>> {
        self.list_attempted_quiz_ids_impl(user_id, course_id).await
    }

    // 评价模块
    async fn create_review(
        &self,
        course_id: i64,
        user_id: i64,
        review: CreateReviewRequest,
    ) -> Result<Review> {
        self.create_review_impl(course_id, user_id, review).await
    }

    async fn get_review_by_id(&self, review_id: i64) -> Result<Option<Review>> {
        self.get_review_by_id_impl(review_id).await
    }

    async fn get_review_by_course_and_user(
        &self,
        course_id: i64,
        user_id: i64,
    ) -> Result<Option<Review>> {
        self.get_review_by_course_and_user_impl(course_id, user_id)
            .await
    }

    async fn list_reviews_with_pagination(
        &self,
        course_id: i64,
        page: i64,
        size: i64,
    ) -> Result<ReviewListResponse> {
        self.list_reviews_with_pagination_impl(course_id, page, size)
            .await
    }

    async fn update_review(
        &self,
        review_id: i64,
        update: UpdateReviewRequest,
    ) -> Result<Option<Review>> {
        self.update_review_impl(review_id, update).await
    }

    async fn delete_review(&self, review_id: i64) -> Result<bool> {
        self.delete_review_impl(review_id).await
    }

    async fn list_review_ratings(&self, course_ids: &[i64]) -> Result<Vec<i64>> {
        self.list_review_ratings_impl(course_ids).await
    }

    // 问答模块
    async fn create_question(
        &self,
        lecture_id: i64,
        user_id: i64,
        question: AskQuestionRequest,
    ) -> Result<Question> {
        self.create_question_impl(lecture_id, user_id, question)
            .await
    }

    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(question_id).await
    }

    async fn list_questions_by_lecture(&self, lecture_id: i64) -> Result<Vec<QuestionWithAnswers>> {
        self.list_questions_by_lecture_impl(lecture_id).await
    }

    async fn create_answer(&self, question_id: i64, user_id: i64, body: &str) -> Result<Answer> {
        self.create_answer_impl(question_id, user_id, body).await
    }
}
