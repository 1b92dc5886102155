use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::comments::application::domain::entities::Comment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub media_id: Uuid,

    pub user_id: Uuid,

    pub author_name: String,

    #[sea_orm(column_type = "Text")]
    pub text: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_comment(&self) -> Comment {
        Comment {
            id: self.id,
            media_id: self.media_id,
            user_id: self.user_id,
            author_name: self.author_name.clone(),
            text: self.text.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
