//! Server-rendered public pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use tower_sessions::Session;
use tracing::instrument;

use super::business_info::{HoursDisplay, load_info};
use crate::db::{
    CategoryRepository, GiftShopRepository, MenuItemRepository, PhotoRepository, RepositoryError,
};
use crate::filters;
use crate::middleware::current_admin;
use crate::models::menu::MenuSection;
use crate::models::{BusinessInfo, GiftShopItem, Photo};
use crate::state::AppState;

/// Name shown until the business-info record has been saved.
const DEFAULT_SITE_NAME: &str = "Hearth";

/// Header and footer details shared by every page.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub name: String,
    pub tagline: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl SiteContext {
    fn from_info(info: Option<&BusinessInfo>) -> Self {
        info.map_or_else(
            || Self {
                name: DEFAULT_SITE_NAME.to_string(),
                tagline: None,
                phone: None,
                email: None,
                address: None,
            },
            |info| Self {
                name: info.name.clone(),
                tagline: info.tagline.clone(),
                phone: info.phone.clone(),
                email: info.email.clone(),
                address: info.address.clone(),
            },
        )
    }

    /// Load the header details, degrading to defaults if the query fails.
    async fn load(pool: &PgPool) -> Self {
        Self::from_info(load_info(pool).await.as_ref())
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub site: SiteContext,
    pub hours: HoursDisplay,
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub site: SiteContext,
    pub sections: Vec<MenuSection>,
}

/// Gift shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "gift_shop.html")]
pub struct GiftShopTemplate {
    pub site: SiteContext,
    pub items: Vec<GiftShopItem>,
}

/// Gallery page template.
#[derive(Template, WebTemplate)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub site: SiteContext,
    pub photos: Vec<Photo>,
}

/// Admin login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub site: SiteContext,
    pub signed_in_as: Option<String>,
}

/// Log a failed content query and turn it into a 500 page.
fn page_error(err: &RepositoryError) -> StatusCode {
    let event_id = sentry::capture_error(err);
    tracing::error!(error = %err, sentry_event_id = %event_id, "Failed to load page content");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Display the home page: name, tagline, contact details and opening hours.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let info = load_info(state.pool()).await;

    HomeTemplate {
        site: SiteContext::from_info(info.as_ref()),
        hours: HoursDisplay::new(info.as_ref().map(|info| &info.hours)),
    }
}

/// Display the menu, grouped by category. Unavailable items are hidden.
///
/// # Errors
///
/// Returns 500 if the menu cannot be loaded.
#[instrument(skip(state))]
pub async fn menu(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let pool = state.pool();
    let categories = CategoryRepository::new(pool);
    let items = MenuItemRepository::new(pool);
    let (site, categories, items) = tokio::join!(
        SiteContext::load(pool),
        categories.list(),
        items.list_available(),
    );
    let categories = categories.map_err(|e| page_error(&e))?;
    let items = items.map_err(|e| page_error(&e))?;

    Ok(MenuTemplate {
        site,
        sections: MenuSection::group(categories, &items),
    })
}

/// Display available gift-shop items.
///
/// # Errors
///
/// Returns 500 if the items cannot be loaded.
#[instrument(skip(state))]
pub async fn gift_shop(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let pool = state.pool();
    let items = GiftShopRepository::new(pool);
    let (site, items) = tokio::join!(SiteContext::load(pool), items.list(true));
    let items = items.map_err(|e| page_error(&e))?;

    Ok(GiftShopTemplate { site, items })
}

/// Display the photo gallery.
///
/// # Errors
///
/// Returns 500 if the photos cannot be loaded.
#[instrument(skip(state))]
pub async fn gallery(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let pool = state.pool();
    let photos = PhotoRepository::new(pool);
    let (site, photos) = tokio::join!(SiteContext::load(pool), photos.list());
    let photos = photos.map_err(|e| page_error(&e))?;

    Ok(GalleryTemplate { site, photos })
}

/// Display the admin login page.
#[instrument(skip_all)]
pub async fn admin_login(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let site = SiteContext::load(state.pool()).await;
    let signed_in_as = current_admin(&session).await.map(|admin| admin.username);

    AdminLoginTemplate { site, signed_in_as }
}
