//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub author: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for postboard_core::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author: model.author,
            title: model.title,
            content: model.content,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<postboard_core::Post> for ActiveModel {
    fn from(post: postboard_core::Post) -> Self {
        Self {
            id: Set(post.id),
            author: Set(post.author),
            title: Set(post.title),
            content: Set(post.content),
            created_at: Set(post.created_at.into()),
        }
    }
}
