//! Posts table entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique, column_type = "Text")]
    pub url: String,
    pub points: i32,
    pub submitted_by_id: Uuid,
    pub submitted_by_name: String,
    pub submitted_at: DateTimeWithTimeZone,
    pub votes: Vec<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Post.
impl From<Model> for linkboard_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            url: model.url,
            points: model.points,
            submitted_by_id: model.submitted_by_id,
            submitted_by_name: model.submitted_by_name,
            submitted_at: model.submitted_at.into(),
            votes: model.votes,
        }
    }
}

/// Conversion from the domain Post to a SeaORM ActiveModel.
impl From<linkboard_core::domain::Post> for ActiveModel {
    fn from(post: linkboard_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            url: Set(post.url),
            points: Set(post.points),
            submitted_by_id: Set(post.submitted_by_id),
            submitted_by_name: Set(post.submitted_by_name),
            submitted_at: Set(post.submitted_at.into()),
            votes: Set(post.votes),
        }
    }
}
