pub mod analytics;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod lectures;
pub mod progress;
pub mod questions;
pub mod quizzes;
pub mod reviews;
pub mod teachers;
pub mod users;

pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use lectures::LectureService;
pub use progress::ProgressService;
pub use questions::QuestionService;
pub use quizzes::QuizService;
pub use reviews::ReviewService;
pub use teachers::TeacherService;
pub use users::UserService;
