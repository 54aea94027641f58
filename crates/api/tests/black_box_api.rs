use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use shopdesk_api::app::services::AppServices;
use shopdesk_api::config::AppConfig;
use shopdesk_catalog::{Category, Language, Product, ProductCategory, Store};
use shopdesk_core::{CategoryId, CategoryTemplateId, LanguageId, ProductCategoryId, ProductId, StoreId};
use shopdesk_infra::read_model::LocaleStringResource;
use shopdesk_infra::{CatalogSnapshot, InMemoryCatalog};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(snapshot: CatalogSnapshot) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let catalog = Arc::new(InMemoryCatalog::from_snapshot(snapshot));
        let app = shopdesk_api::app::build_app(AppServices::from_catalog(catalog, &AppConfig::default()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn seed() -> CatalogSnapshot {
    let template = CategoryTemplateId::new(1);
    let mut deleted = Category::new(CategoryId::new(9), "Old stuff", template);
    deleted.deleted = true;

    let mapping = |id: u32, product: u32, order: i32| ProductCategory {
        id: ProductCategoryId::new(id),
        product_id: ProductId::new(product),
        category_id: CategoryId::new(2),
        is_featured_product: false,
        display_order: order,
    };

    let products: Vec<Product> = (1..=5)
        .map(|i| Product::new(ProductId::new(i), format!("Notebook {i}")))
        .collect();

    CatalogSnapshot {
        categories: vec![
            Category::new(CategoryId::new(1), "Computers", template),
            Category::new(CategoryId::new(2), "Notebooks", template).with_parent(CategoryId::new(1)),
            deleted,
        ],
        products,
        product_categories: (1..=5).map(|i| mapping(i, i, i as i32)).collect(),
        stores: vec![Store { id: StoreId::new(1), name: "Main".to_string(), display_order: 0 }],
        languages: vec![Language {
            id: LanguageId::new(1),
            name: "English".to_string(),
            language_culture: "en-US".to_string(),
            published: true,
            display_order: 0,
        }],
        locale_string_resources: vec![
            LocaleStringResource {
                language_id: LanguageId::new(1),
                name: "Admin.Common.All".to_string(),
                value: "All".to_string(),
            },
            LocaleStringResource {
                language_id: LanguageId::new(1),
                name: "Admin.Catalog.Categories.Fields.Parent.None".to_string(),
                value: "[None]".to_string(),
            },
        ],
        ..CatalogSnapshot::default()
    }
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn(CatalogSnapshot::default()).await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_model_lists_stores_with_all_item() {
    let srv = TestServer::spawn(seed()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/admin/categories/search-model"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    let stores = body["available_stores"].as_array().unwrap();
    assert_eq!(stores[0]["text"], "All");
    assert_eq!(stores[0]["value"], "0");
    assert_eq!(stores[1]["text"], "Main");
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], 15);
}

#[tokio::test]
async fn missing_body_is_a_missing_argument() {
    let srv = TestServer::spawn(seed()).await;
    let client = reqwest::Client::new();

    let res = client.post(srv.url("/admin/categories/list")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "missing_argument");
    assert_eq!(body["message"], "missing required argument: searchModel");
}

#[tokio::test]
async fn unparsable_body_is_a_validation_error() {
    let srv = TestServer::spawn(seed()).await;
    let client = reqwest::Client::new();

    let wrong_type = client
        .post(srv.url("/admin/categories/list"))
        .json(&json!({ "page": "two" }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_type.status(), StatusCode::BAD_REQUEST);
    let body: Value = wrong_type.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    let broken = client
        .post(srv.url("/admin/categories/add-product/list"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(broken.status(), StatusCode::BAD_REQUEST);
    let body: Value = broken.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn category_list_returns_rows_with_breadcrumbs_and_total() {
    let srv = TestServer::spawn(seed()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/admin/categories/list"))
        .json(&json!({ "page": 1, "page_size": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["total"], 2);
    let crumbs: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["breadcrumb"].as_str().unwrap())
        .collect();
    assert_eq!(crumbs, vec!["Computers", "Computers >> Notebooks"]);
}

#[tokio::test]
async fn new_category_form_has_defaults() {
    let srv = TestServer::spawn(seed()).await;

    let body: Value = reqwest::get(srv.url("/admin/categories/new"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["id"], Value::Null);
    assert_eq!(body["page_size"], 6);
    assert_eq!(body["page_size_options"], "6, 3, 9");
    assert_eq!(body["published"], true);
    assert_eq!(body["include_in_top_menu"], true);
    assert_eq!(body["allow_customers_to_select_page_size"], true);
    assert_eq!(body["available_categories"][0]["text"], "[None]");
    assert_eq!(body["locales"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn edit_form_for_unknown_or_deleted_category_is_not_found() {
    let srv = TestServer::spawn(seed()).await;

    let missing = reqwest::get(srv.url("/admin/categories/404")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let deleted = reqwest::get(srv.url("/admin/categories/9")).await.unwrap();
    assert_eq!(deleted.status(), StatusCode::NOT_FOUND);

    let garbage = reqwest::get(srv.url("/admin/categories/abc")).await.unwrap();
    assert_eq!(garbage.status(), StatusCode::BAD_REQUEST);
    let body: Value = garbage.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn edit_form_maps_the_category() {
    let srv = TestServer::spawn(seed()).await;

    let res = reqwest::get(srv.url("/admin/categories/2")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "Notebooks");
    assert_eq!(body["parent_category_id"], 1);
    assert_eq!(body["category_product_search_model"]["category_id"], 2);
}

#[tokio::test]
async fn category_products_are_paged() {
    let srv = TestServer::spawn(seed()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/admin/categories/2/products"))
        .json(&json!({ "page": 2, "page_size": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["total"], 5);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["product_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Notebook 3", "Notebook 4"]);
}

#[tokio::test]
async fn add_product_popup_round_trip() {
    let srv = TestServer::spawn(seed()).await;
    let client = reqwest::Client::new();

    let search: Value = client
        .post(srv.url("/admin/categories/add-product/search-model"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(search["available_product_types"].as_array().unwrap().len(), 3);
    assert_eq!(search["available_categories"][2]["text"], "Computers >> Notebooks");

    let res = client
        .post(srv.url("/admin/categories/add-product/list"))
        .json(&json!({ "search_product_name": "notebook 5", "search_category_id": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["id"], 5);
    assert_eq!(body["data"][0]["product_type_id"], 5);
}
