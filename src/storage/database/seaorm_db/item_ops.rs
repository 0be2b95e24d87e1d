use crate::core::models::{Item, ItemId, NewItem, Page};
use crate::storage::{ItemStore, duplicate_name_error, item_not_found_error};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, item};
use super::types::{DatabaseBackendType, SeaOrmDatabase};

/// Translate a write failure, surfacing the unique name index as a conflict
fn map_write_error(err: DbErr, name: &str) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_name_error(name),
        _ => ServiceError::Database(err),
    }
}

#[async_trait]
impl ItemStore for SeaOrmDatabase {
    async fn list_all(&self) -> Result<Vec<Item>> {
        debug!("Listing all items");

        let models = entities::Items::find()
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(models.into_iter().map(item::Model::to_domain_item).collect())
    }

    async fn list_page(&self, page: u64, size: u64) -> Result<Page<Item>> {
        debug!("Listing items page {} (size {})", page, size);

        let paginator = entities::Items::find()
            .order_by_asc(item::Column::Id)
            .paginate(&self.db, size.max(1));

        let total = paginator.num_items().await.map_err(ServiceError::Database)?;
        let models = paginator
            .fetch_page(page)
            .await
            .map_err(ServiceError::Database)?;

        let items = models.into_iter().map(item::Model::to_domain_item).collect();
        Ok(Page::new(items, page, size, total))
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        debug!("Finding item by ID: {}", id);

        let model = entities::Items::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model.map(item::Model::to_domain_item))
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Item>> {
        debug!("Finding item by name: {}", name);

        let model = entities::Items::find()
            .filter(item::Column::NameKey.eq(crate::core::models::item::name_key(name)))
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model.map(item::Model::to_domain_item))
    }

    async fn create(&self, new_item: NewItem) -> Result<Item> {
        debug!("Creating item: {}", new_item.name);

        let model = item::ActiveModel::from_new_item(&new_item)
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, &new_item.name))?;

        Ok(model.to_domain_item())
    }

    async fn save(&self, domain_item: Item) -> Result<Item> {
        debug!("Saving item: {}", domain_item.id);

        let existing = entities::Items::find_by_id(domain_item.id.value())
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        let model = match existing {
            Some(model) => {
                let mut active: item::ActiveModel = model.into();
                active.apply_domain_item(&domain_item);
                active.update(&self.db).await
            }
            None => {
                item::ActiveModel::from_domain_item(&domain_item)
                    .insert(&self.db)
                    .await
            }
        }
        .map_err(|e| map_write_error(e, &domain_item.name))?;

        Ok(model.to_domain_item())
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        debug!("Deleting item: {}", id);

        let result = entities::Items::delete_by_id(id.value())
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        if result.rows_affected == 0 {
            return Err(item_not_found_error(id));
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        self.ping().await
    }

    fn backend(&self) -> &'static str {
        match self.backend_type {
            DatabaseBackendType::SQLite => "sqlite",
            DatabaseBackendType::PostgreSQL => "postgres",
        }
    }
}
