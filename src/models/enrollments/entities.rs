use serde::{Deserialize, Serialize};

// 报名记录实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub course_id: i64,
    pub user_id: i64,
    // 报名时课程的价格快照，最小货币单位
    pub price_paid: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
