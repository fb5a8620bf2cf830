//! Gift-shop routes.

use axum::extract::State;
use tracing::instrument;

use hearth_core::GiftShopItemId;

use super::api::{ApiJson, ApiPath, ApiResponse, ApiResult};
use crate::db::GiftShopRepository;
use crate::error::add_breadcrumb;
use crate::middleware::RequireAdmin;
use crate::models::{GiftShopItem, GiftShopItemInput};
use crate::state::AppState;

/// `GET /api/gift-shop`
///
/// Lists every item, hidden ones included; the public page filters on
/// `is_available`.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<GiftShopItem>> {
    let items = GiftShopRepository::new(state.pool()).list(false).await?;
    Ok(ApiResponse::ok(items))
}

/// `POST /api/admin/gift-shop`
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiJson(input): ApiJson<GiftShopItemInput>,
) -> ApiResult<GiftShopItem> {
    let input = input.normalize()?;
    let item = GiftShopRepository::new(state.pool()).create(&input).await?;

    add_breadcrumb("content", "Gift-shop item created");
    tracing::info!(gift_shop_item_id = %item.id, "Gift-shop item created");
    Ok(ApiResponse::ok(item))
}

/// `PUT /api/admin/gift-shop/{id}`
#[instrument(skip_all, fields(gift_shop_item_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiPath(id): ApiPath<GiftShopItemId>,
    ApiJson(input): ApiJson<GiftShopItemInput>,
) -> ApiResult<GiftShopItem> {
    let input = input.normalize()?;
    let item = GiftShopRepository::new(state.pool())
        .update(id, &input)
        .await?;

    add_breadcrumb("content", "Gift-shop item updated");
    Ok(ApiResponse::ok(item))
}

/// `DELETE /api/admin/gift-shop/{id}`
#[instrument(skip_all, fields(gift_shop_item_id = %id))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiPath(id): ApiPath<GiftShopItemId>,
) -> ApiResult<()> {
    GiftShopRepository::new(state.pool()).delete(id).await?;

    add_breadcrumb("content", "Gift-shop item deleted");
    Ok(ApiResponse::ok(()))
}
