//! 测验题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quiz_id: i64,
    pub position: i64,
    pub text: String,
    // JSON 数组
    pub options: String,
    pub correct_index: i64,
    pub explanation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quizzes::Entity",
        from = "Column::QuizId",
        to = "super::quizzes::Column::Id"
    )]
    Quizzes,
}

impl Related<super::quizzes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quizzes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> crate::models::quizzes::entities::QuizQuestion {
        crate::models::quizzes::entities::QuizQuestion {
            id: self.id,
            position: self.position,
            text: self.text,
            options: serde_json::from_str(&self.options).unwrap_or_default(),
            correct_index: self.correct_index,
            explanation: self.explanation,
        }
    }
}
