pub mod analytics;

pub mod auth;

pub mod courses;

pub mod enrollments;

pub mod lectures;

pub mod progress;

pub mod public_files;

pub mod questions;

pub mod quizzes;

pub mod reviews;

pub mod teachers;

pub mod users;

pub use analytics::configure_analytics_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use enrollments::configure_enrollment_routes;
pub use lectures::configure_lecture_routes;
pub use progress::configure_progress_routes;
pub use public_files::configure_public_file_routes;
pub use questions::configure_question_routes;
pub use quizzes::configure_quiz_routes;
pub use reviews::configure_review_routes;
pub use teachers::configure_instructor_routes;
pub use users::configure_user_routes;
