//! End-to-end storefront flows through the HTTP router

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use shared::models::Product;
use shop_server::api::build_app;
use shop_server::db::seed::initial_products;
use shop_server::db::{Storage, keys};
use shop_server::services::DisabledGenerator;
use shop_server::{Config, ServerState};

const ADMIN_PHONE: &str = "9999999999";
const CUSTOMER_PHONE: &str = "9876543210";

fn config() -> Config {
    let mut config = Config::with_overrides("./target/test-data", 0);
    config.admin_phone = ADMIN_PHONE.into();
    config.otp_code = "1234".into();
    config.jwt.secret = "integration-test-secret-long-enough-for-hs256".into();
    config
}

fn state_with(storage: Storage) -> ServerState {
    ServerState::with_storage(config(), storage, Arc::new(DisabledGenerator)).unwrap()
}

fn app(state: &ServerState) -> Router {
    build_app().with_state(state.clone())
}

struct Call<'a> {
    method: Method,
    uri: &'a str,
    session: Option<&'a str>,
    token: Option<&'a str>,
    body: Option<Value>,
}

impl<'a> Call<'a> {
    fn new(method: Method, uri: &'a str) -> Self {
        Self {
            method,
            uri,
            session: None,
            token: None,
            body: None,
        }
    }

    fn session(mut self, id: &'a str) -> Self {
        self.session = Some(id);
        self
    }

    fn token(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }

    fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    async fn send(self, app: &Router) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if let Some(id) = self.session {
            builder = builder.header("x-session-id", id);
        }
        if let Some(token) = self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match self.body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}

async fn login(app: &Router, phone: &str) -> String {
    let (status, body) = Call::new(Method::POST, "/api/auth/verify")
        .json(json!({ "phone": phone, "otp": "1234" }))
        .send(app)
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["token"].as_str().unwrap().to_string()
}

fn delivery() -> Value {
    json!({
        "name": "Ravi Kumar",
        "phone": CUSTOMER_PHONE,
        "address": "Gandhi Chowk, Khammam",
        "deliverySlot": "Evening (4PM - 8PM)",
        "paymentMethod": "UPI"
    })
}

#[tokio::test]
async fn health_reports_seeded_catalog() {
    let state = state_with(Storage::in_memory());
    let (status, body) = Call::new(Method::GET, "/health").send(&app(&state)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["products"], 12);
}

#[tokio::test]
async fn mango_dozen_merges_to_one_line() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    let (status, _) = Call::new(Method::POST, "/api/cart/items")
        .session("s1")
        .json(json!({ "productId": "p1" }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, cart) = Call::new(Method::POST, "/api/cart/items")
        .session("s1")
        .json(json!({ "productId": "p1", "variantIndex": 0, "quantity": 2 }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["count"], 1);
    assert_eq!(cart["items"][0]["quantity"], 3);
    assert_eq!(cart["items"][0]["unit"], "Dozen");
    assert_eq!(cart["total"], 3600);
}

#[tokio::test]
async fn checkout_freezes_order_and_clears_cart() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    for body in [
        json!({ "productId": "p2" }),
        json!({ "productId": "p2", "variantIndex": 1 }),
        json!({ "productId": "p11", "variantIndex": 1 }),
    ] {
        let (status, _) = Call::new(Method::POST, "/api/cart/items")
            .session("s1")
            .json(body)
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, cart) = Call::new(Method::GET, "/api/cart").session("s1").send(&app).await;
    // 220 + 4000 + 15 x 10
    assert_eq!(cart["total"], 4370);

    let (status, order) = Call::new(Method::POST, "/api/checkout")
        .session("s1")
        .json(delivery())
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK, "{order}");
    assert_eq!(order["totalAmount"], 4370);
    assert_eq!(order["status"], "Pending");
    assert_eq!(order["items"].as_array().unwrap().len(), 3);
    assert_eq!(order["deliverySlot"], "Evening (4PM - 8PM)");

    let (_, cart) = Call::new(Method::GET, "/api/cart").session("s1").send(&app).await;
    assert_eq!(cart["count"], 0);
    assert_eq!(cart["total"], 0);

    // Later cart activity does not touch the stored order
    Call::new(Method::POST, "/api/cart/items")
        .session("s1")
        .json(json!({ "productId": "p5" }))
        .send(&app)
        .await;

    let admin = login(&app, ADMIN_PHONE).await;
    let (status, orders) = Call::new(Method::GET, "/api/orders").token(&admin).send(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["totalAmount"], 4370);
    assert_eq!(orders[0]["items"].as_array().unwrap().len(), 3);

    let uri = format!("/api/orders/{}", order["id"].as_str().unwrap());
    let (status, fetched) = Call::new(Method::GET, &uri).token(&admin).send(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["customerName"], "Ravi Kumar");
}

#[tokio::test]
async fn empty_cart_checkout_persists_nothing() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    let (status, body) = Call::new(Method::POST, "/api/checkout")
        .session("nobody")
        .json(delivery())
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4007);
    assert!(state.orders.list().is_empty());
}

#[tokio::test]
async fn checkout_releases_session_cart() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    for session in ["s1", "s2"] {
        Call::new(Method::POST, "/api/cart/items")
            .session(session)
            .json(json!({ "productId": "p10" }))
            .send(&app)
            .await;
    }
    // Looking at or pruning an unknown cart allocates nothing
    Call::new(Method::GET, "/api/cart").session("s3").send(&app).await;
    Call::new(Method::DELETE, "/api/cart/items/p10/Kg")
        .session("s4")
        .send(&app)
        .await;
    assert_eq!(state.carts.len(), 2);

    let (status, _) = Call::new(Method::POST, "/api/checkout")
        .session("s1")
        .json(delivery())
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.carts.len(), 1);

    Call::new(Method::DELETE, "/api/cart").session("s2").send(&app).await;
    assert!(state.carts.is_empty());
}

#[tokio::test]
async fn oversized_quantity_is_rejected_without_overflow() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    let (status, body) = Call::new(Method::POST, "/api/cart/items")
        .session("s1")
        .json(json!({ "productId": "p1", "quantity": u32::MAX }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);

    let (status, _) = Call::new(Method::POST, "/api/cart/items")
        .session("s1")
        .json(json!({ "productId": "p1", "quantity": 99_999 }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = Call::new(Method::POST, "/api/cart/items")
        .session("s1")
        .json(json!({ "productId": "p1", "quantity": 2 }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, cart) = Call::new(Method::GET, "/api/cart").session("s1").send(&app).await;
    assert_eq!(cart["items"][0]["quantity"], 99_999);
    assert_eq!(cart["total"], 99_999 * 1200);
}

#[tokio::test]
async fn checkout_requires_address() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    Call::new(Method::POST, "/api/cart/items")
        .session("s1")
        .json(json!({ "productId": "p9" }))
        .send(&app)
        .await;

    let mut form = delivery();
    form["address"] = json!("");
    let (status, body) = Call::new(Method::POST, "/api/checkout")
        .session("s1")
        .json(form)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "address");

    // Cart is kept for another try
    let (_, cart) = Call::new(Method::GET, "/api/cart").session("s1").send(&app).await;
    assert_eq!(cart["count"], 1);
}

#[tokio::test]
async fn cart_requires_session_header() {
    let state = state_with(Storage::in_memory());
    let (status, body) = Call::new(Method::GET, "/api/cart").send(&app(&state)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4102);
}

#[tokio::test]
async fn remove_line_then_re_add_is_fresh() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    Call::new(Method::POST, "/api/cart/items")
        .session("s1")
        .json(json!({ "productId": "p4", "quantity": 4 }))
        .send(&app)
        .await;
    let (status, cart) = Call::new(Method::DELETE, "/api/cart/items/p4/Kg")
        .session("s1")
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["count"], 0);

    let (_, cart) = Call::new(Method::POST, "/api/cart/items")
        .session("s1")
        .json(json!({ "productId": "p4" }))
        .send(&app)
        .await;
    assert_eq!(cart["items"][0]["quantity"], 1);
    assert_eq!(cart["total"], 180);
}

#[tokio::test]
async fn out_of_stock_product_cannot_be_added() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);
    let admin = login(&app, ADMIN_PHONE).await;

    let mut banana = serde_json::to_value(state.catalog.get("p3").unwrap()).unwrap();
    banana["inStock"] = json!(false);
    let (status, _) = Call::new(Method::PUT, "/api/products/p3")
        .token(&admin)
        .json(banana)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = Call::new(Method::POST, "/api/cart/items")
        .session("s1")
        .json(json!({ "productId": "p3" }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 6003);

    let (_, prices) = Call::new(Method::GET, "/api/prices").send(&app).await;
    let row = prices["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["productId"] == "p3")
        .unwrap();
    assert_eq!(row["status"], "Sold Out");
}

#[tokio::test]
async fn admin_endpoints_require_admin_token() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);
    let product = json!({
        "name": "Sapota (Chikoo)",
        "category": "Regular",
        "image": "https://example.com/sapota.jpg",
        "description": "Soft and sweet.",
        "variants": [{ "unit": "Kg", "price": 90, "minQty": 1, "isWholesale": false }]
    });

    let (status, _) = Call::new(Method::POST, "/api/products")
        .json(product.clone())
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let customer = login(&app, CUSTOMER_PHONE).await;
    let (status, body) = Call::new(Method::POST, "/api/products")
        .token(&customer)
        .json(product.clone())
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2003);

    let admin = login(&app, ADMIN_PHONE).await;
    let (status, created) = Call::new(Method::POST, "/api/products")
        .token(&admin)
        .json(product)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK, "{created}");
    assert_eq!(created["inStock"], true);
    assert_eq!(created["isPopular"], false);
    assert_eq!(state.catalog.list_all().len(), 13);

    let (status, _) = Call::new(Method::GET, "/api/inquiries")
        .token(&customer)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn deleted_seed_product_is_not_resurrected() {
    let storage = Storage::in_memory();
    let state = state_with(storage.clone());
    let app = app(&state);
    let admin = login(&app, ADMIN_PHONE).await;

    let (status, removed) = Call::new(Method::DELETE, "/api/products/p3")
        .token(&admin)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, true);

    // Deleting again is a no-op
    let (_, removed) = Call::new(Method::DELETE, "/api/products/p3")
        .token(&admin)
        .send(&app)
        .await;
    assert_eq!(removed, false);

    // Restart over the same store
    let restarted = state_with(storage);
    assert!(restarted.catalog.find("p3").is_none());
    assert_eq!(restarted.catalog.list_all().len(), 11);
}

#[tokio::test]
async fn startup_reconciles_stale_catalog() {
    let storage = Storage::in_memory();
    let seed = initial_products();
    let mut stored: Vec<Product> = seed.iter().filter(|p| p.id != "p7").cloned().collect();
    stored[0].image = "https://old.example/mango.jpg".into();
    stored[0].description = "Edited by the shop owner".into();
    storage.write(keys::PRODUCTS, &stored).unwrap();

    let state = state_with(storage);
    let products = state.catalog.list_all();

    assert_eq!(products.len(), 12);
    assert_eq!(products.last().unwrap().id, "p7");
    assert_eq!(products[0].image, seed[0].image);
    assert_eq!(products[0].description, "Edited by the shop owner");
}

#[tokio::test]
async fn catalog_queries() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    let (_, dry) = Call::new(Method::GET, "/api/products?category=Dry%20Fruits")
        .send(&app)
        .await;
    assert_eq!(dry.as_array().unwrap().len(), 4);

    let (_, found) = Call::new(Method::GET, "/api/products?category=All&q=apple")
        .send(&app)
        .await;
    assert_eq!(found[0]["id"], "p2");

    let (_, popular) = Call::new(Method::GET, "/api/products/popular").send(&app).await;
    assert_eq!(popular.as_array().unwrap().len(), 5);

    let (status, body) = Call::new(Method::GET, "/api/products/nope").send(&app).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
}

#[tokio::test]
async fn generated_copy_falls_back_without_key() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    let (_, prices) = Call::new(Method::GET, "/api/prices").send(&app).await;
    assert_eq!(
        prices["marketUpdate"],
        "Welcome to Triveni Renuka Fruit Shop! Check out our fresh arrivals today."
    );
    assert_eq!(prices["rows"].as_array().unwrap().len(), 12);

    let admin = login(&app, ADMIN_PHONE).await;
    let (status, body) = Call::new(Method::POST, "/api/products/describe")
        .token(&admin)
        .json(json!({ "name": "Kiwi (Green)" }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Fresh Kiwi (Green) available now.");
}

#[tokio::test]
async fn login_me_and_logout() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    let (status, body) = Call::new(Method::POST, "/api/auth/otp")
        .json(json!({ "phone": "12345" }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1010);

    let (status, body) = Call::new(Method::POST, "/api/auth/verify")
        .json(json!({ "phone": CUSTOMER_PHONE, "otp": "9999" }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1011);

    let token = login(&app, CUSTOMER_PHONE).await;
    let (_, me) = Call::new(Method::GET, "/api/auth/me").token(&token).send(&app).await;
    assert_eq!(me["name"], "Customer");
    assert_eq!(me["role"], "customer");
    assert!(state.identity.current_user().is_some());

    let (status, _) = Call::new(Method::POST, "/api/auth/logout").send(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert!(state.identity.current_user().is_none());
}

#[tokio::test]
async fn inquiries_are_listed_most_recent_first() {
    let state = state_with(Storage::in_memory());
    let app = app(&state);

    for message in ["Do you deliver to Wyra?", "Wholesale mango rates?"] {
        let (status, _) = Call::new(Method::POST, "/api/inquiries")
            .json(json!({ "name": "Suresh", "phone": "9000000001", "message": message }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let admin = login(&app, ADMIN_PHONE).await;
    let (_, list) = Call::new(Method::GET, "/api/inquiries").token(&admin).send(&app).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["message"], "Wholesale mango rates?");
}
