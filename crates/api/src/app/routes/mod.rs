use axum::Router;

pub mod categories;
pub mod system;

/// Router for all admin endpoints.
pub fn router() -> Router {
    Router::new().nest("/admin/categories", categories::router())
}
