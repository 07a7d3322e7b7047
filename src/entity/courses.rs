//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    // JSON 数组
    pub tags: String,
    pub price: i64,
    pub level: String,
    pub duration_minutes: i64,
    pub thumbnail_url: Option<String>,
    pub rating: f64,
    pub rating_count: i64,
    pub total_enrollments: i64,
    pub published: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teachers,
    #[sea_orm(has_many = "super::lectures::Entity")]
    Lectures,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::quizzes::Entity")]
    Quizzes,
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teachers.def()
    }
}

impl Related<super::lectures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lectures.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::{Course, CourseLevel};
        use chrono::{DateTime, Utc};

        Course {
            id: self.id,
            teacher_id: self.teacher_id,
            title: self.title,
            description: self.description,
            category: self.category,
            tags: serde_json::from_str(&self.tags).unwrap_or_default(),
            price: self.price,
            level: self.level.parse::<CourseLevel>().unwrap_or(CourseLevel::All),
            duration_minutes: self.duration_minutes,
            thumbnail_url: self.thumbnail_url,
            rating: self.rating,
            rating_count: self.rating_count,
            total_enrollments: self.total_enrollments,
            published: self.published,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
