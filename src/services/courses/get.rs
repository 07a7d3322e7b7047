use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::CourseService;
use crate::models::courses::responses::CourseDetailResponse;
use crate::models::lectures::responses::LectureResponse;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

/// 课程详情是公开路由，不经过 RequireJWT。
/// 带了有效 Bearer token 时仍解析出用户，以便区分报名学员与课程讲师。
pub(crate) async fn optional_user(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
) -> Option<User> {
    let token = request
        .headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;

    let claims = JwtUtils::verify_access_token(token).ok()?;
    let user_id = claims.sub.parse::<i64>().ok()?;

    storage.get_user_by_id(user_id).await.ok().flatten()
}

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    };

    let user = optional_user(&storage, request).await;

    // 判断调用者是否课程讲师本人或管理员
    let mut is_owner = false;
    if let Some(ref user) = user {
        if user.role == UserRole::Admin {
            is_owner = true;
        } else if let Ok(Some(teacher)) = storage.get_teacher_by_user_id(user.id).await {
            is_owner = teacher.id == course.teacher_id;
        }
    }

    // 未发布课程只有讲师本人和管理员可见
    if !course.published && !is_owner {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        )));
    }

    let enrolled = match user {
        Some(ref user) => storage
            .is_enrolled(course_id, user.id)
            .await
            .unwrap_or(false),
        None => false,
    };

    let lectures = match storage.list_lectures_by_course(course_id).await {
        Ok(lectures) => lectures,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询讲座列表失败: {e}"),
                )),
            );
        }
    };

    // 报名学员、讲师本人与管理员看到完整视图，其余只看预览
    let lectures = if enrolled || is_owner {
        lectures.into_iter().map(LectureResponse::full).collect()
    } else {
        lectures.into_iter().map(LectureResponse::preview).collect()
    };

    let response = CourseDetailResponse {
        course,
        lectures,
        enrolled,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
