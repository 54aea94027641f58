use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};

use shopdesk_admin::models::{
    AddProductToCategorySearchModel, CategoryProductSearchModel, CategorySearchModel,
};
use shopdesk_catalog::Category;
use shopdesk_core::{CategoryId, DomainError, DomainResult};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/search-model", post(category_search_model))
        .route("/list", post(category_list))
        .route("/new", get(new_category))
        .route("/add-product/search-model", post(add_product_search_model))
        .route("/add-product/list", post(add_product_list))
        .route("/:id", get(edit_category))
        .route("/:id/products", post(category_products))
}

fn respond<T: Serialize>(result: DomainResult<T>) -> axum::response::Response {
    match result {
        Ok(model) => (StatusCode::OK, Json(model)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// An empty body is an absent argument; anything else must parse as `T`.
fn optional_body<T: DeserializeOwned>(body: &Bytes) -> DomainResult<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Json::<T>::from_bytes(body)
        .map(|Json(model)| Some(model))
        .map_err(|rejection| DomainError::validation(rejection.body_text()))
}

fn find_category(services: &AppServices, id: &str) -> Result<Category, axum::response::Response> {
    let id: CategoryId = id.parse().map_err(errors::domain_error_to_response)?;
    services.category(id).ok_or_else(|| {
        tracing::debug!(category_id = %id, "category not found");
        errors::domain_error_to_response(DomainError::not_found())
    })
}

pub async fn category_search_model(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let model = match optional_body::<CategorySearchModel>(&body) {
        Ok(model) => model,
        Err(e) => return errors::domain_error_to_response(e),
    };
    respond(services.category_models.prepare_category_search_model(model))
}

pub async fn category_list(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let search = match optional_body::<CategorySearchModel>(&body) {
        Ok(search) => search,
        Err(e) => return errors::domain_error_to_response(e),
    };
    respond(services.category_models.prepare_category_list_model(search.as_ref()))
}

pub async fn new_category(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    respond(
        services
            .category_models
            .prepare_category_model(Some(Default::default()), None, false),
    )
}

pub async fn edit_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let category = match find_category(&services, &id) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    respond(
        services
            .category_models
            .prepare_category_model(None, Some(&category), false),
    )
}

pub async fn category_products(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let category = match find_category(&services, &id) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let search = match optional_body::<CategoryProductSearchModel>(&body) {
        Ok(search) => search,
        Err(e) => return errors::domain_error_to_response(e),
    };
    respond(
        services
            .category_models
            .prepare_category_product_list_model(search.as_ref(), Some(&category)),
    )
}

pub async fn add_product_search_model(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let model = match optional_body::<AddProductToCategorySearchModel>(&body) {
        Ok(model) => model,
        Err(e) => return errors::domain_error_to_response(e),
    };
    respond(
        services
            .category_models
            .prepare_add_product_to_category_search_model(model),
    )
}

pub async fn add_product_list(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let search = match optional_body::<AddProductToCategorySearchModel>(&body) {
        Ok(search) => search,
        Err(e) => return errors::domain_error_to_response(e),
    };
    respond(
        services
            .category_models
            .prepare_add_product_to_category_list_model(search.as_ref()),
    )
}
