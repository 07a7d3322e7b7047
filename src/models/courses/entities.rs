use serde::{Deserialize, Serialize};

// 课程难度级别
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    All,
}

impl CourseLevel {
    pub const BEGINNER: &'static str = "beginner";
    pub const INTERMEDIATE: &'static str = "intermediate";
    pub const ADVANCED: &'static str = "advanced";
    pub const ALL: &'static str = "all";
}

impl<'de> Deserialize<'de> for CourseLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| {
                serde::de::Error::custom(format!(
                    "无效的课程级别: '{s}'. 支持的级别: beginner, intermediate, advanced, all"
                ))
            })
    }
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseLevel::Beginner => write!(f, "{}", CourseLevel::BEGINNER),
            CourseLevel::Intermediate => write!(f, "{}", CourseLevel::INTERMEDIATE),
            CourseLevel::Advanced => write!(f, "{}", CourseLevel::ADVANCED),
            CourseLevel::All => write!(f, "{}", CourseLevel::ALL),
        }
    }
}

impl std::str::FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(CourseLevel::Beginner),
            "intermediate" => Ok(CourseLevel::Intermediate),
            "advanced" => Ok(CourseLevel::Advanced),
            "all" => Ok(CourseLevel::All),
            _ => Err(format!("Invalid course level: {s}")),
        }
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub teacher_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    // 价格，最小货币单位（如分）
    pub price: i64,
    pub level: CourseLevel,
    pub duration_minutes: i64,
    pub thumbnail_url: Option<String>,
    pub rating: f64,
    pub rating_count: i64,
    pub total_enrollments: i64,
    pub published: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
