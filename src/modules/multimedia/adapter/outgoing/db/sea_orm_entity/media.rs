use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::multimedia::application::domain::entities::{MediaItem, MediaType, PublishStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(column_name = "type")]
    pub media_type: MediaKind,

    pub storage_path: Option<String>,
    pub storage_url: Option<String>,
    pub external_url: Option<String>,
    pub thumbnail_url: Option<String>,

    pub description: Option<String>,
    pub date: Date,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub photographer: String,

    pub status: MediaStatus,
    pub is_featured: bool,

    pub views: i64,
    pub likes: i64,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MediaKind {
    #[sea_orm(string_value = "photo")]
    Photo,

    #[sea_orm(string_value = "video")]
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MediaStatus {
    #[sea_orm(string_value = "draft")]
    Draft,

    #[sea_orm(string_value = "published")]
    Published,
}

impl From<MediaType> for MediaKind {
    fn from(value: MediaType) -> Self {
        match value {
            MediaType::Photo => MediaKind::Photo,
            MediaType::Video => MediaKind::Video,
        }
    }
}

impl From<MediaKind> for MediaType {
    fn from(value: MediaKind) -> Self {
        match value {
            MediaKind::Photo => MediaType::Photo,
            MediaKind::Video => MediaType::Video,
        }
    }
}

impl From<PublishStatus> for MediaStatus {
    fn from(value: PublishStatus) -> Self {
        match value {
            PublishStatus::Draft => MediaStatus::Draft,
            PublishStatus::Published => MediaStatus::Published,
        }
    }
}

impl From<MediaStatus> for PublishStatus {
    fn from(value: MediaStatus) -> Self {
        match value {
            MediaStatus::Draft => PublishStatus::Draft,
            MediaStatus::Published => PublishStatus::Published,
        }
    }
}

impl Model {
    pub fn to_domain(self) -> MediaItem {
        MediaItem {
            id: self.id,
            title: self.title,
            media_type: self.media_type.into(),
            storage_path: self.storage_path,
            storage_url: self.storage_url,
            external_url: self.external_url,
            thumbnail_url: self.thumbnail_url,
            description: self.description,
            date: self.date,
            location: self.location,
            tags: self.tags,
            status: self.status.into(),
            is_featured: self.is_featured,
            views: self.views,
            likes: self.likes,
            photographer: self.photographer,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
