//! Menu item API handlers

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use shared::error::{AppError, AppResult};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::db::menu_items;
use crate::state::AppState;

use super::extract::{PathParam, ValidatedJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// POST /items - create a menu item
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let mut conn = state.acquire().await?;
    let item = menu_items::create(&mut conn, &data).await?;

    tracing::info!(id = item.id, name = %item.name, "Menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items - list all menu items
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<MenuItem>>> {
    let mut conn = state.acquire().await?;
    let items = menu_items::list(&mut conn).await?;
    Ok(Json(items))
}

/// GET /items/{id} - fetch one menu item
pub async fn get_item(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<Json<MenuItem>> {
    let mut conn = state.acquire().await?;
    let item = menu_items::get(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::item_not_found(id))?;
    Ok(Json(item))
}

/// PUT /items/{id} - partially update a menu item
pub async fn update_item(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    ValidatedJson(data): ValidatedJson<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let mut conn = state.acquire().await?;
    let item = menu_items::update(&mut conn, id, &data)
        .await?
        .ok_or_else(|| AppError::item_not_found(id))?;

    tracing::info!(id = item.id, "Menu item updated");
    Ok(Json(item))
}

/// DELETE /items/{id} - remove a menu item
pub async fn delete_item(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<StatusCode> {
    let mut conn = state.acquire().await?;
    if !menu_items::delete(&mut conn, id).await? {
        return Err(AppError::item_not_found(id));
    }

    tracing::info!(id, "Menu item deleted");
    Ok(StatusCode::NO_CONTENT)
}
