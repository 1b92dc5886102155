use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::tags::application::{
    domain::entities::Tag,
    ports::outgoing::{TagQuery, TagQueryError},
};

use super::sea_orm_entity::{Column as TagColumn, Entity as TagEntity, Model as TagModel};

#[derive(Debug, Clone)]
pub struct TagQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagQuery for TagQueryPostgres {
    async fn list_tags(&self) -> Result<Vec<Tag>, TagQueryError> {
        let models: Vec<TagModel> = TagEntity::find()
            .order_by_asc(TagColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| TagQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(TagModel::to_tag).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
    use uuid::Uuid;

    fn tag_model(name: &str) -> TagModel {
        TagModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_tags_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![tag_model("aarti"), tag_model("kirtan")]])
            .into_connection();

        let query = TagQueryPostgres::new(Arc::new(db));
        let tags = query.list_tags().await.unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "aarti");
        assert_eq!(tags[1].name, "kirtan");
    }

    #[tokio::test]
    async fn test_list_tags_orders_by_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TagModel>::new()])
            .into_connection();
        let db = Arc::new(db);

        let query = TagQueryPostgres::new(Arc::clone(&db));
        assert!(query.list_tags().await.unwrap().is_empty());

        drop(query);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let sql = format!("{:?}", log);
        assert!(sql.contains("ORDER BY"));
        assert!(sql.contains("ASC"));
    }

    #[tokio::test]
    async fn test_list_tags_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let query = TagQueryPostgres::new(Arc::new(db));
        let result = query.list_tags().await;

        assert!(matches!(result, Err(TagQueryError::DatabaseError(_))));
    }
}
