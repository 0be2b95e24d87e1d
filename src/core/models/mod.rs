//! Domain models for the item service

pub mod item;
pub mod page;

pub use item::{Item, ItemId, ItemRequest, ItemResponse, NewItem, PROCESSED_STATUS};
pub use page::Page;
