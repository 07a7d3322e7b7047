use serde::Serialize;

// 报名趋势数据点，按日分桶
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    // ISO 日期 (YYYY-MM-DD)
    pub date: String,
    pub count: i64,
    pub cumulative: i64,
}

// 收入曲线数据点
//
// 模拟数据：总收入均摊到每天并加入抖动，见 analytics 服务。
#[derive(Debug, Clone, Serialize)]
pub struct RevenuePoint {
    pub date: String,
    pub amount: f64,
    pub cumulative: f64,
}

// 评分分布桶（1..=5 星）
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RatingBucket {
    pub stars: i64,
    pub count: i64,
}

// 讲师分析响应
#[derive(Debug, Serialize)]
pub struct InstructorAnalyticsResponse {
    pub days: i64,
    pub course_id: Option<i64>,
    pub total_courses: i64,
    pub total_enrollments: i64,
    // 已知总收入（price_paid 之和），最小货币单位
    pub total_revenue: i64,
    pub average_rating: f64,
    // 完成率，百分比，保留两位小数
    pub completion_rate: f64,
    pub enrollment_trend: Vec<TrendPoint>,
    pub revenue_history: Vec<RevenuePoint>,
    pub rating_distribution: Vec<RatingBucket>,
}
