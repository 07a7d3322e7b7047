use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::common::PaginationQuery;
use crate::models::enrollments::responses::{EnrolledCourse, MyCoursesResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_my_courses(
    service: &EnrollmentService,
    request: &HttpRequest,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let (enrollments, pagination) = match storage
        .list_user_enrollments(user_id, query.page, query.size)
        .await
    {
        Ok(result) => result,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询报名列表失败: {e}"),
                )),
            );
        }
    };

    let mut items = Vec::with_capacity(enrollments.len());
    for enrollment in enrollments {
        let course = match storage.get_course_by_id(enrollment.course_id).await {
            Ok(Some(course)) => course,
            // 课程已被删除时跳过这条报名记录
            Ok(None) => continue,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询课程失败: {e}"),
                    )),
                );
            }
        };

        let total_lectures = storage
            .count_lectures_by_course(course.id)
            .await
            .unwrap_or(0) as i64;
        let completed_lectures = storage
            .count_completed_lectures(user_id, course.id)
            .await
            .unwrap_or(0);

        let percentage = if total_lectures > 0 {
            (completed_lectures as f64 / total_lectures as f64 * 100.0 * 100.0).round() / 100.0
        } else {
            0.0
        };

        items.push(EnrolledCourse {
            course,
            enrolled_at: enrollment.created_at,
            completed_lectures,
            total_lectures,
            percentage,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MyCoursesResponse { items, pagination },
        "查询成功",
    )))
}
