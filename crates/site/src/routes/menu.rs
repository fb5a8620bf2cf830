//! Category and menu-item routes.

use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use hearth_core::{CategoryId, MenuItemId};

use super::api::{ApiJson, ApiPath, ApiQuery, ApiResponse, ApiResult};
use crate::db::{CategoryRepository, MenuItemRepository};
use crate::error::add_breadcrumb;
use crate::middleware::RequireAdmin;
use crate::models::{Category, CategoryInput, MenuItem, MenuItemInput};
use crate::state::AppState;

/// Query parameters for listing menu items.
#[derive(Debug, Deserialize)]
pub struct MenuItemQuery {
    pub category_id: Option<CategoryId>,
}

// =============================================================================
// Categories
// =============================================================================

/// `GET /api/categories`
#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(ApiResponse::ok(categories))
}

/// `POST /api/admin/categories`
#[instrument(skip_all)]
pub async fn create_category(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiJson(input): ApiJson<CategoryInput>,
) -> ApiResult<Category> {
    let input = input.normalize()?;
    let category = CategoryRepository::new(state.pool()).create(&input).await?;

    add_breadcrumb("content", "Category created");
    tracing::info!(category_id = %category.id, "Category created");
    Ok(ApiResponse::ok(category))
}

/// `PUT /api/admin/categories/{id}`
#[instrument(skip_all, fields(category_id = %id))]
pub async fn update_category(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiPath(id): ApiPath<CategoryId>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> ApiResult<Category> {
    let input = input.normalize()?;
    let category = CategoryRepository::new(state.pool())
        .update(id, &input)
        .await?;

    add_breadcrumb("content", "Category updated");
    Ok(ApiResponse::ok(category))
}

/// `DELETE /api/admin/categories/{id}`
///
/// Menu items in the category are removed with it.
#[instrument(skip_all, fields(category_id = %id))]
pub async fn delete_category(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiPath(id): ApiPath<CategoryId>,
) -> ApiResult<()> {
    CategoryRepository::new(state.pool()).delete(id).await?;

    add_breadcrumb("content", "Category deleted");
    tracing::info!("Category deleted");
    Ok(ApiResponse::ok(()))
}

// =============================================================================
// Menu Items
// =============================================================================

/// `GET /api/menu-items[?category_id=]`
#[instrument(skip(state))]
pub async fn list_menu_items(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MenuItemQuery>,
) -> ApiResult<Vec<MenuItem>> {
    let items = MenuItemRepository::new(state.pool())
        .list(query.category_id)
        .await?;
    Ok(ApiResponse::ok(items))
}

/// `POST /api/admin/menu-items`
#[instrument(skip_all)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiJson(input): ApiJson<MenuItemInput>,
) -> ApiResult<MenuItem> {
    let input = input.normalize()?;
    let item = MenuItemRepository::new(state.pool()).create(&input).await?;

    add_breadcrumb("content", "Menu item created");
    tracing::info!(menu_item_id = %item.id, "Menu item created");
    Ok(ApiResponse::ok(item))
}

/// `PUT /api/admin/menu-items/{id}`
#[instrument(skip_all, fields(menu_item_id = %id))]
pub async fn update_menu_item(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiPath(id): ApiPath<MenuItemId>,
    ApiJson(input): ApiJson<MenuItemInput>,
) -> ApiResult<MenuItem> {
    let input = input.normalize()?;
    let item = MenuItemRepository::new(state.pool())
        .update(id, &input)
        .await?;

    add_breadcrumb("content", "Menu item updated");
    Ok(ApiResponse::ok(item))
}

/// `DELETE /api/admin/menu-items/{id}`
#[instrument(skip_all, fields(menu_item_id = %id))]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiPath(id): ApiPath<MenuItemId>,
) -> ApiResult<()> {
    MenuItemRepository::new(state.pool()).delete(id).await?;

    add_breadcrumb("content", "Menu item deleted");
    Ok(ApiResponse::ok(()))
}
