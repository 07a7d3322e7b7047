pub mod extractor;
pub mod file_magic;
pub mod jwt;
pub mod media;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeCourseIdI64, SafeLectureIdI64, SafeQuestionIdI64, SafeQuizIdI64, SafeResourceIdI64,
    SafeReviewIdI64, SafeTeacherIdI64, SafeUserIdI64,
};
pub use file_magic::validate_magic_bytes;
pub use parameter_error_handler::{json_error_handler, query_error_handler};
pub use sql::escape_like_pattern;
