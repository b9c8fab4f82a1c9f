//! Fixtures and scenarios shared by the live and stubbed suites.
#![allow(dead_code)]

use fakestore_client::{ApiClient, ClientConfig, NewProduct, Product};
use fakestore_e2e::fixtures::{self, INVALID_LOGIN_MESSAGE};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Token the stub hands out and accepts
pub const STUB_TOKEN: &str = "stub.jwt.token";

/// Id the stub assigns to created products
pub const STUB_CREATED_ID: u64 = 21;

/// One client per test.
pub fn api_client(config: &ClientConfig) -> ApiClient {
    fixtures::api_client(config).expect("build api client")
}

/// Log in with the known-good account; the dependent test fails if this does.
pub async fn auth_token(client: &ApiClient) -> String {
    fixtures::auth_token(client, &fixtures::valid_credentials())
        .await
        .unwrap_or_else(|e| panic!("{e}"))
}

pub fn new_product() -> NewProduct {
    NewProduct::new("A new product", 100.0, "An awesome new gadget.", "electronics")
}

pub async fn assert_login_succeeds(client: &ApiClient) {
    let response = client
        .login(fixtures::VALID_USERNAME, fixtures::VALID_PASSWORD)
        .await
        .expect("login request");

    assert!(response.is_ok(), "expected 2xx, got {}", response.status());
    assert_eq!(response.status(), 201);

    let body = response.json_value().expect("login body is JSON");
    let token = body["token"].as_str().expect("Response JSON is missing the 'token' field");
    assert!(!token.is_empty(), "token must not be empty");
}

pub async fn assert_invalid_login_rejected(client: &ApiClient) {
    let response = client
        .login(fixtures::INVALID_USERNAME, fixtures::INVALID_PASSWORD)
        .await
        .expect("login request");

    assert_eq!(
        response.status(),
        401,
        "Expected 401 Unauthorized, but got {}",
        response.status()
    );
    assert_eq!(response.text(), INVALID_LOGIN_MESSAGE, "Unexpected error message");
}

pub async fn assert_single_product(client: &ApiClient) {
    let product_id = 1;
    let response = client.get_single_product(product_id).await.expect("product request");

    assert_eq!(response.status(), 200);

    let product: Product = response.json().expect("product body");
    assert_eq!(product.id, product_id, "Product ID in response does not match request");
    assert!(!product.title.is_empty(), "Product is missing a 'title' field");
}

pub async fn assert_all_products(client: &ApiClient) {
    let response = client.get_all_products().await.expect("products request");

    assert_eq!(response.status(), 200);

    let body = response.json_value().expect("products body is JSON");
    let products = body.as_array().expect("Response is not a list");
    assert_eq!(products.len(), 20, "Expected 20 products in the list");
}

pub async fn assert_create_product(client: &ApiClient, token: &str) {
    let product = new_product();
    let response = client.create_product(&product, token).await.expect("create request");

    assert!(response.is_ok(), "expected 2xx, got {}", response.status());

    let body = response.json_value().expect("created product body is JSON");
    assert!(body.get("id").is_some(), "New product response is missing an 'id'");
    assert_eq!(body["title"], json!(product.title), "New product title mismatch");
}

/// Echoes the submitted product back with an assigned id
struct EchoCreatedProduct;

impl Respond for EchoCreatedProduct {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match serde_json::from_slice::<Value>(&request.body) {
            Ok(Value::Object(mut fields)) => {
                fields.insert("id".to_string(), json!(STUB_CREATED_ID));
                ResponseTemplate::new(201).set_body_json(Value::Object(fields))
            }
            _ => ResponseTemplate::new(400).set_body_string("invalid product"),
        }
    }
}

fn catalog_product(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Catalog product {id}"),
        "price": 9.95 + id as f64,
        "description": "Stub catalog entry",
        "category": "electronics",
        "image": format!("https://fakestoreapi.com/img/{id}.jpg"),
        "rating": { "rate": 3.9, "count": 120 }
    })
}

/// Start a stub that answers like the public service for the known scenarios
pub async fn stub_oracle() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "username": fixtures::VALID_USERNAME,
            "password": fixtures::VALID_PASSWORD
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": STUB_TOKEN })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string(INVALID_LOGIN_MESSAGE))
        .with_priority(10)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_product(1)))
        .mount(&server)
        .await;

    let catalog: Vec<Value> = (1..=20).map(catalog_product).collect();
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(header("authorization", format!("Bearer {STUB_TOKEN}").as_str()))
        .respond_with(EchoCreatedProduct)
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .with_priority(10)
        .mount(&server)
        .await;

    server
}

pub fn stub_config(server: &MockServer) -> ClientConfig {
    ClientConfig::with_base_url(server.uri())
}
