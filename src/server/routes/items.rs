//! Item endpoints
//!
//! `/api/v1/items` CRUD plus `/api/v1/items/process`, which runs every stored
//! item through the processing pool and answers once the batch has finished.

use crate::core::models::{ItemId, ItemRequest};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::services::DEFAULT_PAGE_SIZE;
use crate::utils::error::Result;
use actix_web::{HttpResponse, http::header, web};
use serde::Deserialize;
use tracing::{debug, info};

/// Base path of the item resource
pub const ITEMS_PATH: &str = "/api/v1/items";

/// Configure item routes
///
/// `/process` is registered ahead of `/{id}` so it is not taken for an identity.
pub fn configure_item_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(ITEMS_PATH)
            .route("", web::get().to(list_items))
            .route("", web::post().to(create_item))
            .route("/process", web::get().to(process_items))
            .route("/{id}", web::get().to(get_item))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}

/// Query parameters for listing
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// Zero-based page number
    #[serde(default)]
    pub page: u64,
    /// Items per page
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// GET /api/v1/items
pub async fn list_items(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    debug!(page = query.page, size = query.size, "List items requested");
    let page = state.items.find_page(query.page, query.size).await?;
    Ok(ApiResponse::success("Items found", page).to_http_response())
}

/// GET /api/v1/items/{id}
pub async fn get_item(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let item = state.items.find_by_id(ItemId(path.into_inner())).await?;
    Ok(ApiResponse::success("Item found", item).to_http_response())
}

/// POST /api/v1/items
pub async fn create_item(
    state: web::Data<AppState>,
    payload: web::Json<ItemRequest>,
) -> Result<HttpResponse> {
    let item = state.items.create(payload.into_inner()).await?;
    let location = format!("{}/{}", ITEMS_PATH, item.id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(ApiResponse::success("Item created", item)))
}

/// PUT /api/v1/items/{id}
pub async fn update_item(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<ItemRequest>,
) -> Result<HttpResponse> {
    let item = state
        .items
        .update(ItemId(path.into_inner()), payload.into_inner())
        .await?;
    Ok(ApiResponse::success("Item updated", item).to_http_response())
}

/// DELETE /api/v1/items/{id}
pub async fn delete_item(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    state.items.delete(ItemId(path.into_inner())).await?;
    Ok(ApiResponse::message("Item deleted").to_http_response())
}

/// GET /api/v1/items/process
pub async fn process_items(state: web::Data<AppState>) -> Result<HttpResponse> {
    info!("Batch processing requested");
    let processed = state.items.process_all().await?;
    Ok(HttpResponse::Accepted().json(ApiResponse::success("Items processed", processed)))
}
