//! 讲座实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lectures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub position: i64,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    pub duration_seconds: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Courses,
    #[sea_orm(has_many = "super::resources::Entity")]
    Resources,
    #[sea_orm(has_many = "super::questions::Entity")]
    Questions,
    #[sea_orm(has_many = "super::lecture_progress::Entity")]
    LectureProgress,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::resources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resources.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_lecture(self) -> crate::models::lectures::entities::Lecture {
        use chrono::{DateTime, Utc};

        crate::models::lectures::entities::Lecture {
            id: self.id,
            course_id: self.course_id,
            title: self.title,
            position: self.position,
            video_url: self.video_url,
            thumbnail_url: self.thumbnail_url,
            transcript: self.transcript,
            summary: self.summary,
            duration_seconds: self.duration_seconds,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
