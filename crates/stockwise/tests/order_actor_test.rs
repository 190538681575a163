use chrono::Days;
use resource_actor::mock::MockClient;
use resource_actor::{ActorClient, FrameworkError};
use stockwise::catalog_actor::{CatalogActionResult, CatalogError};
use stockwise::clients::{CatalogClient, OrderClient, SuggestionClient};
use stockwise::model::{
    CatalogItem, Category, DemandSignal, OrderSource, OrderStatus, Product, Sku, StockLevel,
    Suggestion, SuggestionStatus, Urgency,
};
use stockwise::order_actor::OrderError;
use stockwise::suggestion_actor::SuggestionActionResult;

fn bananas() -> CatalogItem {
    CatalogItem::new(
        Product::new(
            "BAN-001",
            "Organic Bananas",
            Category::Produce,
            0.89,
            "Fresh Farms Inc.",
        )
        .with_lead_time(2),
        StockLevel::new(45, 30, 50, 200),
        DemandSignal::new(120.0, 33.0),
    )
}

fn accepted_bananas() -> Suggestion {
    Suggestion {
        sku: Sku::new("BAN-001"),
        product_name: "Organic Bananas".to_string(),
        category: Category::Produce,
        supplier: "Fresh Farms Inc.".to_string(),
        current_stock: 45,
        predicted_demand: 120.0,
        suggested_quantity: 60,
        confidence: 85,
        urgency: Urgency::Medium,
        contributing_factors: Vec::new(),
        capacity: 155,
        status: SuggestionStatus::Accepted,
    }
}

/// Real Order actor with mocked Suggestion and Catalog dependencies.
struct Harness {
    orders: OrderClient,
    handle: tokio::task::JoinHandle<()>,
}

fn start(suggestions: &MockClient<Suggestion>, catalog: &MockClient<CatalogItem>) -> Harness {
    let (order_actor, order_generic_client) = stockwise::order_actor::new();
    let context = (
        SuggestionClient::new(suggestions.client()),
        CatalogClient::new(catalog.client()),
    );
    Harness {
        orders: OrderClient::new(order_generic_client),
        handle: tokio::spawn(order_actor.run(context)),
    }
}

impl Harness {
    async fn stop(self) {
        drop(self.orders);
        self.handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_accepting_a_suggestion_copies_quantity_and_urgency() {
    let mut suggestion_mock = MockClient::<Suggestion>::new();
    let mut catalog_mock = MockClient::<CatalogItem>::new();

    // on_create reads the catalog first, then accepts the suggestion
    catalog_mock
        .expect_get(Sku::new("BAN-001"))
        .return_ok(Some(bananas()));
    suggestion_mock
        .expect_action(Sku::new("BAN-001"))
        .return_ok(SuggestionActionResult::Accept(accepted_bananas()));

    let harness = start(&suggestion_mock, &catalog_mock);

    let id = harness
        .orders
        .accept_suggestion("BAN-001".into())
        .await
        .expect("order should be created");
    let order = harness.orders.get_order(id).await.unwrap();

    assert_eq!(order.quantity, 60);
    assert_eq!(order.priority, Urgency::Medium);
    assert_eq!(order.source, OrderSource::Suggestion);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.product_name, "Organic Bananas");
    assert_eq!(order.supplier, "Fresh Farms Inc.");
    assert_eq!(order.total_cost, 53.4);
    assert_eq!(
        order.expected_delivery,
        order.order_date.checked_add_days(Days::new(2)).unwrap()
    );

    suggestion_mock.verify();
    catalog_mock.verify();
    harness.stop().await;
}

#[tokio::test]
async fn test_missing_product_leaves_suggestion_open() {
    let suggestion_mock = MockClient::<Suggestion>::new();
    let mut catalog_mock = MockClient::<CatalogItem>::new();

    catalog_mock.expect_get(Sku::new("BAN-001")).return_ok(None);

    let harness = start(&suggestion_mock, &catalog_mock);

    let result = harness.orders.accept_suggestion("BAN-001".into()).await;
    assert_eq!(result, Err(OrderError::ProductNotFound("BAN-001".to_string())));
    assert!(harness.orders.list().await.unwrap().is_empty());

    // No accept was sent to the suggestion actor
    suggestion_mock.verify();
    catalog_mock.verify();
    harness.stop().await;
}

#[tokio::test]
async fn test_resolved_suggestion_rejects_the_order() {
    let mut suggestion_mock = MockClient::<Suggestion>::new();
    let mut catalog_mock = MockClient::<CatalogItem>::new();

    catalog_mock
        .expect_get(Sku::new("BAN-001"))
        .return_ok(Some(bananas()));
    suggestion_mock
        .expect_action(Sku::new("BAN-001"))
        .return_err(FrameworkError::EntityError(Box::new(
            stockwise::suggestion_actor::SuggestionError::NotFound("BAN-001".to_string()),
        )));

    let harness = start(&suggestion_mock, &catalog_mock);

    let result = harness.orders.accept_suggestion("BAN-001".into()).await;
    assert!(matches!(result, Err(OrderError::Suggestion(_))));
    assert!(harness.orders.list_orders().await.unwrap().is_empty());

    suggestion_mock.verify();
    catalog_mock.verify();
    harness.stop().await;
}

#[tokio::test]
async fn test_delivery_restocks_then_becomes_terminal() {
    let suggestion_mock = MockClient::<Suggestion>::new();
    let mut catalog_mock = MockClient::<CatalogItem>::new();

    catalog_mock
        .expect_get(Sku::new("BAN-001"))
        .return_ok(Some(bananas()));
    catalog_mock
        .expect_action(Sku::new("BAN-001"))
        .return_ok(CatalogActionResult::ReceiveStock(65));

    let harness = start(&suggestion_mock, &catalog_mock);

    let id = harness
        .orders
        .place_order("BAN-001".into(), 20, Urgency::High)
        .await
        .unwrap();
    let order = harness.orders.get_order(id).await.unwrap();
    assert_eq!(order.source, OrderSource::Manual);
    assert_eq!(order.total_cost, 17.8);

    let confirmed = harness
        .orders
        .update_status(id, OrderStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(confirmed.status, OrderStatus::Confirmed);

    let delivered = harness
        .orders
        .update_status(id, OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);

    // Same status again is a no-op: no second restock
    let again = harness
        .orders
        .update_status(id, OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(again.status, OrderStatus::Delivered);

    assert_eq!(
        harness.orders.update_status(id, OrderStatus::Cancelled).await,
        Err(OrderError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Cancelled,
        })
    );

    catalog_mock.verify();
    harness.stop().await;
}

#[tokio::test]
async fn test_failed_restock_keeps_order_confirmed() {
    let suggestion_mock = MockClient::<Suggestion>::new();
    let mut catalog_mock = MockClient::<CatalogItem>::new();

    catalog_mock
        .expect_get(Sku::new("BAN-001"))
        .return_ok(Some(bananas()));
    catalog_mock
        .expect_action(Sku::new("BAN-001"))
        .return_err(FrameworkError::NotFound("BAN-001".to_string()));

    let harness = start(&suggestion_mock, &catalog_mock);

    let id = harness
        .orders
        .place_order("BAN-001".into(), 20, Urgency::Low)
        .await
        .unwrap();
    harness
        .orders
        .update_status(id, OrderStatus::Confirmed)
        .await
        .unwrap();

    let result = harness.orders.update_status(id, OrderStatus::Delivered).await;
    assert_eq!(
        result,
        Err(OrderError::Catalog(CatalogError::NotFound("BAN-001".to_string())))
    );
    assert_eq!(
        harness.orders.get_order(id).await.unwrap().status,
        OrderStatus::Confirmed
    );

    catalog_mock.verify();
    harness.stop().await;
}

#[tokio::test]
async fn test_manual_order_needs_a_quantity() {
    let suggestion_mock = MockClient::<Suggestion>::new();
    let catalog_mock = MockClient::<CatalogItem>::new();

    let harness = start(&suggestion_mock, &catalog_mock);

    let result = harness
        .orders
        .place_order("BAN-001".into(), 0, Urgency::Low)
        .await;
    assert!(matches!(result, Err(OrderError::InvalidQuantity(_))));

    catalog_mock.verify();
    harness.stop().await;
}
