//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! # Pages
//! GET  /                       - Home (name, contact, opening hours)
//! GET  /menu                   - Menu grouped by category
//! GET  /gift-shop              - Gift shop
//! GET  /gallery                - Photo gallery
//! GET  /admin/login            - Admin login page
//!
//! # Public API
//! GET  /api/business-info
//! GET  /api/business-info/hours
//! GET  /api/categories
//! GET  /api/menu-items[?category_id=]
//! GET  /api/photos
//! GET  /api/gift-shop
//! GET  /api/settings
//!
//! # Admin API (session required)
//! POST   /api/admin/login
//! POST   /api/admin/logout
//! GET    /api/admin/session
//! PUT    /api/admin/business-info
//! POST   /api/admin/categories        PUT/DELETE /api/admin/categories/{id}
//! POST   /api/admin/menu-items        PUT/DELETE /api/admin/menu-items/{id}
//! POST   /api/admin/photos            PUT/DELETE /api/admin/photos/{id}
//! POST   /api/admin/gift-shop         PUT/DELETE /api/admin/gift-shop/{id}
//! PUT    /api/admin/settings/{key}    DELETE     /api/admin/settings/{key}
//! POST   /api/admin/upload
//! ```

pub mod api;
pub mod auth;
pub mod business_info;
pub mod gift_shop;
pub mod media;
pub mod menu;
pub mod pages;
pub mod photos;
pub mod settings;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Multipart framing allowance on top of the upload size limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the public page routes.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/menu", get(pages::menu))
        .route("/gift-shop", get(pages::gift_shop))
        .route("/gallery", get(pages::gallery))
        .route("/admin/login", get(pages::admin_login))
}

/// Create the public JSON API routes.
pub fn public_api_routes() -> Router<AppState> {
    Router::new()
        .route("/business-info", get(business_info::show))
        .route("/business-info/hours", get(business_info::hours))
        .route("/categories", get(menu::list_categories))
        .route("/menu-items", get(menu::list_menu_items))
        .route("/photos", get(photos::list))
        .route("/gift-shop", get(gift_shop::list))
        .route("/settings", get(settings::list))
}

/// Create the admin JSON API routes.
///
/// `max_upload_bytes` sizes the body limit on the upload route; every other
/// route keeps axum's default.
pub fn admin_api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::status))
        .route("/business-info", put(business_info::update))
        .route("/categories", post(menu::create_category))
        .route(
            "/categories/{id}",
            put(menu::update_category).delete(menu::delete_category),
        )
        .route("/menu-items", post(menu::create_menu_item))
        .route(
            "/menu-items/{id}",
            put(menu::update_menu_item).delete(menu::delete_menu_item),
        )
        .route("/photos", post(photos::create))
        .route("/photos/{id}", put(photos::update).delete(photos::delete))
        .route("/gift-shop", post(gift_shop::create))
        .route(
            "/gift-shop/{id}",
            put(gift_shop::update).delete(gift_shop::delete),
        )
        .route(
            "/settings/{key}",
            put(settings::set).delete(settings::delete),
        )
        .route(
            "/upload",
            post(media::upload).layer(DefaultBodyLimit::max(
                max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
            )),
        )
}

/// Create all routes for the site.
pub fn routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .nest(
            "/api",
            public_api_routes().nest("/admin", admin_api_routes(max_upload_bytes)),
        )
}
