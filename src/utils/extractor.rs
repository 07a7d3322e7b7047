//! 路径参数安全提取器
//!
//! 对路径中的数字 ID 做解析与正数校验，非法值直接返回 400，
//! 处理程序拿到的始终是合法 ID。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let raw = req.match_info().query($param);
                    match raw.parse::<i64>() {
                        Ok(id) if id > 0 => ready(Ok($name(id))),
                        _ => {
                            let response = HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(
                                    ErrorCode::BadRequest,
                                    format!("Invalid {}: '{}'", $param, raw),
                                ),
                            );
                            ready(Err(actix_web::error::InternalError::from_response(
                                format!("Invalid {}", $param),
                                response,
                            )
                            .into()))
                        }
                    }
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeUserIdI64("user_id"),
    SafeTeacherIdI64("teacher_id"),
    SafeCourseIdI64("course_id"),
    SafeLectureIdI64("lecture_id"),
    SafeResourceIdI64("resource_id"),
    SafeQuizIdI64("quiz_id"),
    SafeReviewIdI64("review_id"),
    SafeQuestionIdI64("question_id"),
}
