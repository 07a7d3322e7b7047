use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 讲师管理方法
    // 创建讲师资料并将用户角色置为 instructor
    async fn create_teacher(&self, user_id: i64, req: CreateTeacherRequest) -> Result<Teacher>;
    // 通过ID获取讲师资料
    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>>;
    // 通过用户ID获取讲师资料
    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>>;
    // 更新讲师资料
    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;

    /// 课程管理方法
    // 创建课程，讲师课程计数 +1
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 列出讲师名下所有课程 ID
    async fn list_course_ids_by_teacher(&self, teacher_id: i64) -> Result<Vec<i64>>;
    // 更新课程信息
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 设置课程发布状态
    async fn set_course_published(&self, course_id: i64, published: bool) -> Result<Option<Course>>;
    // 设置课程缩略图
    async fn set_course_thumbnail(&self, course_id: i64, thumbnail_url: &str) -> Result<bool>;
    // 删除课程，讲师课程计数 -1
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 讲座管理方法
    // 创建讲座，顺序号自动排在课程末尾
    async fn create_lecture(&self, lecture: CreateLectureRequest) -> Result<Lecture>;
    // 通过ID获取讲座
    async fn get_lecture_by_id(&self, lecture_id: i64) -> Result<Option<Lecture>>;
    // 列出课程的全部讲座，按顺序号排序
    async fn list_lectures_by_course(&self, course_id: i64) -> Result<Vec<Lecture>>;
    // 统计课程讲座数量
    async fn count_lectures_by_course(&self, course_id: i64) -> Result<u64>;
    // 更新讲座信息
    async fn update_lecture(
        &self,
        lecture_id: i64,
        update: UpdateLectureRequest,
    ) -> Result<Option<Lecture>>;
    // 写入讲稿摘要
    async fn set_lecture_summary(&self, lecture_id: i64, summary: &str) -> Result<bool>;
    // 删除讲座
    async fn delete_lecture(&self, lecture_id: i64) -> Result<bool>;

    /// 资源管理方法
    // 创建讲座资源
    async fn create_resource(&self, resource: CreateResourceRequest) -> Result<Resource>;
    // 通过ID获取资源
    async fn get_resource_by_id(&self, resource_id: i64) -> Result<Option<Resource>>;
    // 列出讲座资源
    async fn list_resources_by_lecture(&self, lecture_id: i64) -> Result<Vec<Resource>>;
    // 删除资源
    async fn delete_resource(&self, resource_id: i64) -> Result<bool>;

    /// 报名管理方法
    // 报名课程：写入报名记录，课程报名计数 +1，讲师累计收入增加
    async fn enroll(&self, course_id: i64, user_id: i64, price_paid: i64) -> Result<Enrollment>;
    // 查询是否已报名
    async fn is_enrolled(&self, course_id: i64, user_id: i64) -> Result<bool>;
    // 列出学员的全部报名记录（分页）
    async fn list_user_enrollments(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> Result<(Vec<Enrollment>, PaginationInfo)>;
    // 列出课程学员（分页，带用户公开信息）
    async fn list_course_students(
        &self,
        course_id: i64,
        page: i64,
        size: i64,
    ) -> Result<StudentListResponse>;
    // 列出指定课程集合中某时间之后的报名记录（分析用）
    async fn list_enrollments_since(
        &self,
        course_ids: &[i64],
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<Enrollment>>;
    // 统计指定课程集合的报名总数
    async fn count_enrollments(&self, course_ids: &[i64]) -> Result<i64>;
    // 统计指定课程集合的已知总收入
    async fn sum_revenue(&self, course_ids: &[i64]) -> Result<i64>;

    /// 学习进度方法
    // 记录讲座完成，重复调用幂等
    async fn complete_lecture(
        &self,
        user_id: i64,
        course_id: i64,
        lecture_id: i64,
    ) -> Result<LectureProgress>;
    // 列出学员在某课程的完成记录
    async fn list_progress(&self, user_id: i64, course_id: i64) -> Result<Vec<LectureProgress>>;
    // 统计学员在某课程完成的讲座数
    async fn count_completed_lectures(&self, user_id: i64, course_id: i64) -> Result<i64>;
    // 统计指定课程集合的讲座完成记录总数（分析用）
    async fn count_lecture_completions(&self, course_ids: &[i64]) -> Result<i64>;
    // 统计指定课程集合的讲座总数（分析用）
    async fn count_lectures(&self, course_ids: &[i64]) -> Result<i64>;

    /// 测验管理方法
    // 创建测验及其题目
    async fn create_quiz(&self, course_id: i64, quiz: CreateQuizRequest) -> Result<Quiz>;
    // 通过ID获取测验（含题目）
    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>>;
    // 列出课程的全部测验
    async fn list_quizzes_by_course(&self, course_id: i64) -> Result<Vec<Quiz>>;
    // 更新测验（题目整体替换）
    async fn update_quiz(&self, quiz_id: i64, update: UpdateQuizRequest) -> Result<Option<Quiz>>;
    // 删除测验
    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool>;
    // 写入答题记录
    async fn create_attempt(
        &self,
        quiz_id: i64,
        user_id: i64,
        score: i64,
        total: i64,
    ) -> Result<QuizAttempt>;
    // 列出答题记录，user_id 为 None 时列出全部
    async fn list_attempts(&self, quiz_id: i64, user_id: Option<i64>) -> Result<Vec<QuizAttempt>>;
    // 列出学员在某课程中至少答过一次的测验 ID
    async fn list_attempted_quiz_ids(&self, user_id: i64, course_id: i64) -> Result<Vec<i64>>;

    /// 评价管理方法
    // 创建评价并重算课程与讲师的评分聚合
    async fn create_review(
        &self,
        course_id: i64,
        user_id: i64,
        review: CreateReviewRequest,
    ) -> Result<Review>;
    // 通过ID获取评价
    async fn get_review_by_id(&self, review_id: i64) -> Result<Option<Review>>;
    // 查询学员对课程的评价
    async fn get_review_by_course_and_user(
        &self,
        course_id: i64,
        user_id: i64,
    ) -> Result<Option<Review>>;
    // 列出课程评价（分页，带评价者公开信息）
    async fn list_reviews_with_pagination(
        &self,
        course_id: i64,
        page: i64,
        size: i64,
    ) -> Result<ReviewListResponse>;
    // 更新评价并重算聚合
    async fn update_review(
        &self,
        review_id: i64,
        update: UpdateReviewRequest,
    ) -> Result<Option<Review>>;
    // 删除评价并重算聚合
    async fn delete_review(&self, review_id: i64) -> Result<bool>;
    // 列出指定课程集合的全部评分值（分析用）
    async fn list_review_ratings(&self, course_ids: &[i64]) -> Result<Vec<i64>>;

    /// 问答管理方法
    // 创建提问
    async fn create_question(
        &self,
        lecture_id: i64,
        user_id: i64,
        question: AskQuestionRequest,
    ) -> Result<Question>;
    // 通过ID获取提问
    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>>;
    // 列出讲座问答（含回答）
    async fn list_questions_by_lecture(&self, lecture_id: i64) -> Result<Vec<QuestionWithAnswers>>;
    // 创建回答
    async fn create_answer(&self, question_id: i64, user_id: i64, body: &str) -> Result<Answer>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
