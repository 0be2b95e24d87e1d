//! Item records, their inbound payload and public representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status written to an item once batch processing has completed it
pub const PROCESSED_STATUS: &str = "PROCESSED";

/// Opaque unique identity of a stored item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ItemId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A stored item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Unique across all items, compared case-insensitively
    pub name: String,
    pub description: String,
    /// Free-form status; [`PROCESSED_STATUS`] marks a processed item
    pub status: String,
    pub email: String,
}

impl Item {
    /// Key used for case-insensitive name uniqueness
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Overwrite every mutable field from a validated request
    pub fn apply(&mut self, request: ItemRequest) {
        self.name = request.name;
        self.description = request.description;
        self.status = request.status;
        self.email = request.email;
    }
}

/// Normalized form of a name for uniqueness checks
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// An item that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub status: String,
    pub email: String,
}

impl NewItem {
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Attach an identity, producing the stored form
    pub fn with_id(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
            email: self.email,
        }
    }
}

impl From<ItemRequest> for NewItem {
    fn from(request: ItemRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            status: request.status,
            email: request.email,
        }
    }
}

/// Inbound create/update payload
///
/// Missing fields deserialize as empty strings so that validation reports
/// them as required instead of failing the whole body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub email: String,
}

/// Public representation of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub status: String,
    pub email: String,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            status: item.status.clone(),
            email: item.email.clone(),
        }
    }
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            status: item.status,
            email: item.email,
        }
    }
}
