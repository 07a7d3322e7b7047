use serde::Deserialize;

// 讲师分析查询参数
#[derive(Debug, Deserialize)]
pub struct AnalyticsQueryParams {
    // 不指定时聚合讲师的全部课程
    pub course_id: Option<i64>,
    // 时间窗口（天），仅支持 7/30/90/365，默认 30
    pub days: Option<i64>,
}
