//! Integration tests for the generic resource client.
//!
//! These tests run the client against wiremock servers, some of which hold
//! state, and verify the operation contracts: validation before sending,
//! failure classification, refetch-on-write and refresh hooks.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use backoffice_client::rest::resources::{
    CartItem, Customer, CustomerDetails, InventoryItem, NewProduct, Product,
};
use backoffice_client::rest::{BoxFuture, Consent, Resource, Snapshot};
use backoffice_client::{BaseUrl, ClientConfig, FailureKind, ResourceClient, ResourceError};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn client_for(server: &MockServer) -> ResourceClient {
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new(format!("{}/api", server.uri())).unwrap())
        .build()
        .unwrap();
    ResourceClient::new(&config).unwrap()
}

fn always_yes() -> impl Fn(&str) -> bool {
    |_: &str| true
}

fn hook<F>(handler: F) -> F
where
    F: for<'c> Fn(&'c ResourceClient) -> BoxFuture<'c, ()> + Send + Sync + 'static,
{
    handler
}

fn counter(
    hits: &Arc<AtomicUsize>,
) -> impl for<'c> Fn(&'c ResourceClient) -> BoxFuture<'c, ()> + Send + Sync + 'static {
    let hits = Arc::clone(hits);
    hook(move |_| {
        hits.fetch_add(1, Ordering::SeqCst);
        Box::pin(std::future::ready(()))
    })
}

// ============================================================================
// In-memory product catalog
// ============================================================================

#[derive(Clone, Default)]
struct Catalog {
    products: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<AtomicU64>,
}

struct ListProducts(Catalog);

impl Respond for ListProducts {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let products = self.0.products.lock().unwrap().clone();
        ResponseTemplate::new(200).set_body_json(Value::Array(products))
    }
}

struct CreateProduct(Catalog);

impl Respond for CreateProduct {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let id = self.0.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        // Prices come back as DECIMAL strings.
        let price = format!("{:.2}", body["price"].as_f64().unwrap());
        self.0.products.lock().unwrap().push(json!({
            "id": id,
            "name": body["name"],
            "price": price,
            "description": body["description"],
        }));
        ResponseTemplate::new(201)
            .set_body_json(json!({"message": "Product added successfully", "product_id": id}))
    }
}

struct DeleteProduct(Catalog);

impl Respond for DeleteProduct {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id: u64 = request
            .url
            .path()
            .rsplit('/')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        let mut products = self.0.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p["id"].as_u64() != Some(id));
        if products.len() == before {
            return ResponseTemplate::new(404).set_body_json(json!({"error": "Product not found"}));
        }
        ResponseTemplate::new(200).set_body_json(json!({"message": "Product deleted successfully"}))
    }
}

async fn mount_catalog(server: &MockServer, catalog: &Catalog) {
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ListProducts(catalog.clone()))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(CreateProduct(catalog.clone()))
        .mount(server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/products/\d+$"))
        .respond_with(DeleteProduct(catalog.clone()))
        .mount(server)
        .await;
}

// ============================================================================
// Create / list round trip
// ============================================================================

#[tokio::test]
async fn test_create_then_list_round_trips_fields_with_assigned_id() {
    let server = MockServer::start().await;
    let catalog = Catalog::default();
    mount_catalog(&server, &catalog).await;
    let client = client_for(&server);

    let receipt = assert_ok!(
        client
            .create::<Product, _>(&NewProduct::new("Desk Lamp", 24.5, "Brass"))
            .await
    );
    assert_eq!(receipt.message(), "Product added successfully");
    let id = receipt.assigned_id().unwrap();

    let products = assert_ok!(client.list::<Product>(None).await);
    let product = products.iter().find(|p| p.id == id).unwrap();
    assert_eq!(product.name, "Desk Lamp");
    assert!((product.price - 24.5).abs() < f64::EPSILON);
    assert_eq!(product.description.as_deref(), Some("Brass"));
}

#[tokio::test]
async fn test_list_after_remove_excludes_removed_id() {
    let server = MockServer::start().await;
    let catalog = Catalog::default();
    mount_catalog(&server, &catalog).await;
    let client = client_for(&server);

    for name in ["Mug", "Lamp", "Tea"] {
        assert_ok!(
            client
                .create::<Product, _>(&NewProduct::new(name, 3.0, "Stock item"))
                .await
        );
    }
    let mut products = assert_ok!(client.list::<Product>(None).await);
    assert_eq!(products.len(), 3);
    let removed = products[1].id;

    let consent = Consent::<Product>::request(&always_yes()).unwrap();
    assert_ok!(client.remove::<Product>(&removed, consent).await);

    products.replace_with(assert_ok!(client.list::<Product>(None).await));
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.id() != removed));
}

#[tokio::test]
async fn test_remove_twice_yields_success_then_not_found() {
    let server = MockServer::start().await;
    let deleted = Arc::new(AtomicBool::new(false));

    struct DeleteOnce(Arc<AtomicBool>);
    impl Respond for DeleteOnce {
        fn respond(&self, _request: &Request) -> ResponseTemplate {
            if self.0.swap(true, Ordering::SeqCst) {
                ResponseTemplate::new(404).set_body_json(json!({"error": "Customer not found"}))
            } else {
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Customer deleted successfully"}))
            }
        }
    }

    Mock::given(method("DELETE"))
        .and(path("/api/customers/5"))
        .respond_with(DeleteOnce(Arc::clone(&deleted)))
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let consent = Consent::<Customer>::request(&always_yes()).unwrap();
    assert_ok!(client.remove::<Customer>(&5, consent).await);

    let consent = Consent::<Customer>::request(&always_yes()).unwrap();
    let error = assert_err!(client.remove::<Customer>(&5, consent).await);
    assert_eq!(error.kind(), FailureKind::Rejected);
    assert!(error.is_not_found());
    assert_eq!(error.server_message(), Some("Customer not found"));
}

// ============================================================================
// Validation never reaches the network
// ============================================================================

#[tokio::test]
async fn test_invalid_product_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = assert_err!(
        client
            .create::<Product, _>(&NewProduct::new("Mug", -2.0, "Ceramic"))
            .await
    );
    assert_eq!(error.kind(), FailureKind::Validation);

    let error = assert_err!(
        client
            .create::<Product, _>(&NewProduct::new("", 2.0, "Ceramic"))
            .await
    );
    assert!(matches!(error, ResourceError::Validation { field: "name", .. }));
}

#[tokio::test]
async fn test_negative_stock_update_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path_regex(r"^/api/inventory/\d+$"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = assert_err!(client.set_stock(3, -1).await);
    assert!(matches!(
        error,
        ResourceError::Validation {
            resource: "InventoryItem",
            field: "stock_level",
            ..
        }
    ));
}

#[tokio::test]
async fn test_stock_update_sends_put_with_level() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/inventory/3"))
        .and(wiremock::matchers::body_json(json!({"stock_level": 12})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Stock updated successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let receipt = assert_ok!(client.set_stock(3, 12).await);
    assert_eq!(receipt.message(), "Stock updated successfully");
    assert!(receipt.assigned_id().is_none());
}

// ============================================================================
// Failure classification
// ============================================================================

#[tokio::test]
async fn test_duplicate_email_yields_conflict_with_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"error": "Email 'dup@x.com' is already in use"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = assert_err!(
        client
            .create::<Customer, _>(&CustomerDetails::new("Dup", "dup@x.com"))
            .await
    );
    assert!(matches!(
        &error,
        ResourceError::Conflict { message, .. } if message == "Email 'dup@x.com' is already in use"
    ));
}

#[tokio::test]
async fn test_customer_update_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/customers/8"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"error": "Email 'ada@example.com' is already in use"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = assert_err!(
        client
            .update::<Customer, _>(&8, &CustomerDetails::new("Ada", "ada@example.com"))
            .await
    );
    assert_eq!(error.kind(), FailureKind::Conflict);
    assert_eq!(error.status(), Some(409));
}

#[tokio::test]
async fn test_server_error_is_rejected_with_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = assert_err!(client.list::<Customer>(None).await);
    assert_eq!(error.kind(), FailureKind::Rejected);
    assert_eq!(error.status(), Some(500));
    assert_eq!(error.server_message(), Some("database unavailable"));
}

#[tokio::test]
async fn test_not_found_without_body_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = assert_err!(client.list::<InventoryItem>(None).await);
    assert_eq!(error.server_message(), Some("Not Found"));
}

#[tokio::test]
async fn test_unexpected_body_shape_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = assert_err!(client.list::<Product>(None).await);
    assert_eq!(error.kind(), FailureKind::Malformed);
}

#[tokio::test]
async fn test_connection_refused_is_network_failure_without_refresh() {
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new("http://127.0.0.1:1/api").unwrap())
        .build()
        .unwrap();
    let mut client = ResourceClient::new(&config).unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    client.on_refresh::<Product>(counter(&hits));

    let error = assert_err!(
        client
            .create::<Product, _>(&NewProduct::new("Mug", 3.0, "Ceramic"))
            .await
    );
    assert_eq!(error.kind(), FailureKind::Network);
    assert!(error.status().is_none());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Refresh hooks
// ============================================================================

#[tokio::test]
async fn test_product_create_refreshes_products_inventory_and_cart() {
    let server = MockServer::start().await;
    mount_catalog(&server, &Catalog::default()).await;
    let mut client = client_for(&server);

    let products = Arc::new(AtomicUsize::new(0));
    let inventory = Arc::new(AtomicUsize::new(0));
    let customers = Arc::new(AtomicUsize::new(0));
    client.on_refresh::<Product>(counter(&products));
    client.on_refresh::<InventoryItem>(counter(&inventory));
    client.on_refresh::<Customer>(counter(&customers));

    assert_ok!(
        client
            .create::<Product, _>(&NewProduct::new("Mug", 3.0, "Ceramic"))
            .await
    );

    assert_eq!(products.load(Ordering::SeqCst), 1);
    assert_eq!(inventory.load(Ordering::SeqCst), 1);
    assert_eq!(customers.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_refresh_relists_through_the_mutating_client() {
    let server = MockServer::start().await;
    let catalog = Catalog::default();
    mount_catalog(&server, &catalog).await;
    let mut client = client_for(&server);

    let rendered = Arc::new(Mutex::new(Snapshot::<Product>::new(Vec::new())));
    let view = Arc::clone(&rendered);
    client.on_refresh::<Product>(move |client| {
        let view = Arc::clone(&view);
        Box::pin(async move {
            if let Ok(snapshot) = client.list::<Product>(None).await {
                view.lock().unwrap().replace_with(snapshot);
            }
        })
    });

    for name in ["Mug", "Lamp"] {
        assert_ok!(
            client
                .create::<Product, _>(&NewProduct::new(name, 3.0, "Stock item"))
                .await
        );
    }
    let ids: Vec<u64> = rendered.lock().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 2);

    let consent = Consent::<Product>::request(&always_yes()).unwrap();
    assert_ok!(client.remove::<Product>(&ids[0], consent).await);

    let rendered = rendered.lock().unwrap();
    assert_eq!(rendered.len(), 1);
    assert!(rendered.iter().all(|p| p.id != ids[0]));
}

#[tokio::test]
async fn test_customer_remove_refreshes_cart() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/customers/5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Customer deleted successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let mut client = client_for(&server);

    let customers = Arc::new(AtomicUsize::new(0));
    let cart = Arc::new(AtomicUsize::new(0));
    client.on_refresh::<Customer>(counter(&customers));
    client.on_refresh::<CartItem>(counter(&cart));

    let consent = Consent::<Customer>::request(&always_yes()).unwrap();
    assert_ok!(client.remove::<Customer>(&5, consent).await);

    assert_eq!(customers.load(Ordering::SeqCst), 1);
    assert_eq!(cart.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_mutation_and_list_do_not_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "taken"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let mut client = client_for(&server);
    let hits = Arc::new(AtomicUsize::new(0));
    client.on_refresh::<Customer>(counter(&hits));

    assert_err!(
        client
            .create::<Customer, _>(&CustomerDetails::new("Ada", "ada@example.com"))
            .await
    );
    assert_ok!(client.list::<Customer>(None).await);

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_declined_consent_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let prompts = Arc::new(Mutex::new(Vec::new()));
    let recorder = {
        let prompts = Arc::clone(&prompts);
        move |prompt: &str| {
            prompts.lock().unwrap().push(prompt.to_string());
            false
        }
    };

    if let Some(consent) = Consent::<Product>::request(&recorder) {
        let _ = client.remove::<Product>(&7, consent).await;
    }

    assert_eq!(
        *prompts.lock().unwrap(),
        vec![Product::DELETE_PROMPT.to_string()]
    );
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_independent_lists_run_concurrently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Ada", "email": "ada@example.com"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"product_id": 1, "name": "Mug", "price": "3.00", "stock_level": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let client = Arc::new(client_for(&server));

    let (customers, inventory) = tokio::join!(
        client.list::<Customer>(None),
        client.list::<InventoryItem>(None)
    );

    assert_eq!(assert_ok!(customers).len(), 1);
    assert_eq!(assert_ok!(inventory)[0].stock_level, None);
}
