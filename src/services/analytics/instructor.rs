use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use std::collections::HashMap;

use super::AnalyticsService;
use crate::middlewares::RequireJWT;
use crate::models::analytics::requests::AnalyticsQueryParams;
use crate::models::analytics::responses::{
    InstructorAnalyticsResponse, RatingBucket, RevenuePoint, TrendPoint,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

// 支持的时间窗口（天）
const ALLOWED_WINDOWS: [i64; 4] = [7, 30, 90, 365];
const DEFAULT_WINDOW: i64 = 30;

/// 构建报名趋势：窗口内每天一个桶（含今天共 days+1 个），外加累计值
///
/// 桶按日期升序排列，窗口外的时间戳被忽略。
pub(crate) fn build_enrollment_trend(
    today: NaiveDate,
    days: i64,
    timestamps: &[chrono::DateTime<Utc>],
) -> Vec<TrendPoint> {
    let start = today - Duration::days(days);

    // 零初始化所有日期桶
    let mut buckets: HashMap<NaiveDate, i64> = HashMap::new();
    for offset in 0..=days {
        buckets.insert(start + Duration::days(offset), 0);
    }

    // 扫描报名时间戳，落在窗口内的计入对应日期
    for ts in timestamps {
        let date = ts.date_naive();
        if let Some(count) = buckets.get_mut(&date) {
            *count += 1;
        }
    }

    // 从最早一天向今天累加
    let mut points = Vec::with_capacity(days as usize + 1);
    let mut cumulative = 0;
    for offset in 0..=days {
        let date = start + Duration::days(offset);
        let count = buckets[&date];
        cumulative += count;
        points.push(TrendPoint {
            date: date.format("%Y-%m-%d").to_string(),
            count,
            cumulative,
        });
    }

    points
}

/// 构建收入曲线：总收入均摊到每天并加 ±20–30% 抖动，再累计
///
/// 模拟数据——按天的真实收入没有留存，只有总额可信。
pub(crate) fn build_revenue_history<R: Rng>(
    today: NaiveDate,
    days: i64,
    total_revenue: i64,
    rng: &mut R,
) -> Vec<RevenuePoint> {
    let start = today - Duration::days(days);
    let bucket_count = days + 1;
    let daily_base = total_revenue as f64 / bucket_count as f64;

    let mut points = Vec::with_capacity(bucket_count as usize);
    let mut cumulative = 0.0;
    for offset in 0..=days {
        let date = start + Duration::days(offset);

        let amount = if total_revenue > 0 {
            let magnitude = rng.random_range(0.2..0.3);
            let jitter = if rng.random_bool(0.5) {
                1.0 + magnitude
            } else {
                1.0 - magnitude
            };
            (daily_base * jitter * 100.0).round() / 100.0
        } else {
            0.0
        };

        cumulative = ((cumulative + amount) * 100.0).round() / 100.0;
        points.push(RevenuePoint {
            date: date.format("%Y-%m-%d").to_string(),
            amount,
            cumulative,
        });
    }

    points
}

/// 按星级分桶（1..=5），越界评分按就近星级归档
pub(crate) fn build_rating_distribution(ratings: &[i64]) -> Vec<RatingBucket> {
    let mut counts = [0i64; 5];
    for &rating in ratings {
        let stars = rating.clamp(1, 5);
        counts[(stars - 1) as usize] += 1;
    }

    (1..=5)
        .map(|stars| RatingBucket {
            stars,
            count: counts[(stars - 1) as usize],
        })
        .collect()
}

/// 完成率 = 完成记录数 / (报名数 × 讲座数)，百分比保留两位小数
pub(crate) fn completion_rate(completions: i64, enrollments: i64, lectures: i64) -> f64 {
    let denominator = enrollments * lectures;
    if denominator <= 0 {
        return 0.0;
    }
    let rate = completions as f64 / denominator as f64 * 100.0;
    (rate.min(100.0) * 100.0).round() / 100.0
}

pub async fn instructor_analytics(
    service: &AnalyticsService,
    request: &HttpRequest,
    query: AnalyticsQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user",
            )));
        }
    };

    let days = query.days.unwrap_or(DEFAULT_WINDOW);
    if !ALLOWED_WINDOWS.contains(&days) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "days must be one of 7, 30, 90, 365",
        )));
    }

    // 确定统计范围内的课程
    let course_ids: Vec<i64> = match query.course_id {
        Some(course_id) => {
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

            // 非管理员只能看自己的课程
            if user.role != UserRole::Admin {
                match storage.get_teacher_by_user_id(user.id).await {
                    Ok(Some(teacher)) if teacher.id == course.teacher_id => {}
                    Ok(_) => {
                        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                            ErrorCode::CoursePermissionDenied,
                            "You do not have permission to view analytics for this course",
                        )));
                    }
                    Err(e) => {
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                format!("查询讲师失败: {e}"),
                            ),
                        ));
                    }
                }
            }

            vec![course_id]
        }
        None => {
            // 全部课程视角要求调用者本人是讲师
            let teacher = match storage.get_teacher_by_user_id(user.id).await {
                Ok(Some(teacher)) => teacher,
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::InstructorNotFound,
                        "Instructor profile not found",
                    )));
                }
                Err(e) => {
                    return Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询讲师失败: {e}"),
                        )),
                    );
                }
            };

            match storage.list_course_ids_by_teacher(teacher.id).await {
                Ok(ids) => ids,
                Err(e) => {
                    return Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询课程列表失败: {e}"),
                        )),
                    );
                }
            }
        }
    };

    let today = Utc::now().date_naive();
    let window_start = (today - Duration::days(days))
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now);

    // 各项聚合依次查询；单项失败返回 500
    let enrollments_in_window = match storage
        .list_enrollments_since(&course_ids, window_start)
        .await
    {
        Ok(items) => items,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询报名记录失败: {e}"),
                )),
            );
        }
    };

    let total_enrollments = storage.count_enrollments(&course_ids).await.unwrap_or(0);
    let total_revenue = storage.sum_revenue(&course_ids).await.unwrap_or(0);
    let completions = storage
        .count_lecture_completions(&course_ids)
        .await
        .unwrap_or(0);
    let lecture_count = storage.count_lectures(&course_ids).await.unwrap_or(0);
    let ratings = storage
        .list_review_ratings(&course_ids)
        .await
        .unwrap_or_default();

    let timestamps: Vec<_> = enrollments_in_window.iter().map(|e| e.created_at).collect();
    let enrollment_trend = build_enrollment_trend(today, days, &timestamps);

    let mut rng = rand::rng();
    let revenue_history = build_revenue_history(today, days, total_revenue, &mut rng);

    let rating_distribution = build_rating_distribution(&ratings);

    let average_rating = if ratings.is_empty() {
        0.0
    } else {
        let avg = ratings.iter().sum::<i64>() as f64 / ratings.len() as f64;
        (avg * 100.0).round() / 100.0
    };

    let response = InstructorAnalyticsResponse {
        days,
        course_id: query.course_id,
        total_courses: course_ids.len() as i64,
        total_enrollments,
        total_revenue,
        average_rating,
        completion_rate: completion_rate(completions, total_enrollments, lecture_count),
        enrollment_trend,
        revenue_history,
        rating_distribution,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts(y: i32, m: u32, d: u32, h: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_seven_day_window_has_eight_buckets() {
        let today = date(2025, 3, 10);
        let trend = build_enrollment_trend(today, 7, &[]);
        assert_eq!(trend.len(), 8);
        assert_eq!(trend.first().unwrap().date, "2025-03-03");
        assert_eq!(trend.last().unwrap().date, "2025-03-10");
    }

    #[test]
    fn test_trend_counts_sum_to_in_window_enrollments() {
        let today = date(2025, 3, 10);
        let timestamps = vec![
            ts(2025, 3, 3, 8),   // 窗口第一天
            ts(2025, 3, 7, 12),
            ts(2025, 3, 7, 23),
            ts(2025, 3, 10, 1),  // 今天
            ts(2025, 2, 20, 10), // 窗口外，忽略
        ];
        let trend = build_enrollment_trend(today, 7, &timestamps);
        let total: i64 = trend.iter().map(|p| p.count).sum();
        assert_eq!(total, 4);
        assert_eq!(trend.last().unwrap().cumulative, 4);
    }

    #[test]
    fn test_trend_cumulative_is_monotonic() {
        let today = date(2025, 3, 10);
        let timestamps = vec![ts(2025, 3, 4, 9), ts(2025, 3, 8, 9), ts(2025, 3, 9, 9)];
        let trend = build_enrollment_trend(today, 7, &timestamps);
        let mut last = 0;
        for point in &trend {
            assert!(point.cumulative >= last);
            last = point.cumulative;
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn test_trend_empty_input_yields_zeroes() {
        let today = date(2025, 6, 1);
        let trend = build_enrollment_trend(today, 30, &[]);
        assert_eq!(trend.len(), 31);
        assert!(trend.iter().all(|p| p.count == 0 && p.cumulative == 0));
    }

    #[test]
    fn test_revenue_history_jitter_bounds() {
        let today = date(2025, 3, 10);
        let mut rng = StdRng::seed_from_u64(42);
        let history = build_revenue_history(today, 7, 80_000, &mut rng);
        assert_eq!(history.len(), 8);

        let daily_base = 80_000.0 / 8.0;
        for point in &history {
            // 每天的金额落在 ±30% 抖动范围内
            assert!(point.amount >= daily_base * 0.7 - 0.01);
            assert!(point.amount <= daily_base * 1.3 + 0.01);
        }
    }

    #[test]
    fn test_revenue_history_zero_revenue() {
        let today = date(2025, 3, 10);
        let mut rng = StdRng::seed_from_u64(7);
        let history = build_revenue_history(today, 7, 0, &mut rng);
        assert!(history.iter().all(|p| p.amount == 0.0 && p.cumulative == 0.0));
    }

    #[test]
    fn test_rating_distribution_buckets() {
        let distribution = build_rating_distribution(&[5, 5, 4, 1, 3, 5]);
        assert_eq!(distribution.len(), 5);
        assert_eq!(distribution[0], RatingBucket { stars: 1, count: 1 });
        assert_eq!(distribution[2], RatingBucket { stars: 3, count: 1 });
        assert_eq!(distribution[3], RatingBucket { stars: 4, count: 1 });
        assert_eq!(distribution[4], RatingBucket { stars: 5, count: 3 });
    }

    #[test]
    fn test_rating_distribution_empty() {
        let distribution = build_rating_distribution(&[]);
        assert!(distribution.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_completion_rate() {
        // 10 条完成记录，5 个学员 × 4 讲讲座
        assert_eq!(completion_rate(10, 5, 4), 50.0);
        assert_eq!(completion_rate(0, 5, 4), 0.0);
        // 空输入为 0
        assert_eq!(completion_rate(0, 0, 0), 0.0);
        // 不超过 100%
        assert_eq!(completion_rate(999, 5, 4), 100.0);
    }
}
