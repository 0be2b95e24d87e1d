use crate::core::models::{self, ItemId};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Item ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Display name
    pub name: String,

    /// Lower-cased name, unique across all items
    #[sea_orm(unique)]
    pub name_key: String,

    pub description: String,

    pub status: String,

    pub email: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain item
    pub fn to_domain_item(self) -> models::Item {
        models::Item {
            id: ItemId(self.id),
            name: self.name,
            description: self.description,
            status: self.status,
            email: self.email,
        }
    }
}

impl ActiveModel {
    /// Active model for inserting a new item; the identity is assigned by the database
    pub fn from_new_item(item: &models::NewItem) -> Self {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        Self {
            id: sea_orm::NotSet,
            name: Set(item.name.clone()),
            name_key: Set(item.name_key()),
            description: Set(item.description.clone()),
            status: Set(item.status.clone()),
            email: Set(item.email.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Active model for inserting an item under an explicit identity
    pub fn from_domain_item(item: &models::Item) -> Self {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        Self {
            id: Set(item.id.value()),
            name: Set(item.name.clone()),
            name_key: Set(item.name_key()),
            description: Set(item.description.clone()),
            status: Set(item.status.clone()),
            email: Set(item.email.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Copy every mutable field of the domain item onto this active model
    pub fn apply_domain_item(&mut self, item: &models::Item) {
        self.name = Set(item.name.clone());
        self.name_key = Set(item.name_key());
        self.description = Set(item.description.clone());
        self.status = Set(item.status.clone());
        self.email = Set(item.email.clone());
        self.updated_at = Set(chrono::Utc::now().into());
    }
}
