use std::sync::Arc;
use std::time::Duration;

use quickbite_client::backend::MockBackend;
use quickbite_client::lifecycle::Storefront;
use quickbite_client::model::{MenuItem, Restaurant, GUEST_NAME};
use quickbite_client::session::{CheckoutOutcome, SessionError};

fn scripted_backend() -> MockBackend {
    let backend = MockBackend::new();
    backend.set_restaurants(vec![
        Restaurant::new("r1", "Trattoria", "Italian", 4.6, 25),
        Restaurant::new("r2", "Taqueria", "Mexican", 4.2, 20),
    ]);
    backend.set_menu(
        "r1",
        vec![
            MenuItem::new("i1", "Margherita", 5.0),
            MenuItem::new("i2", "Tiramisu", 3.75),
        ],
    );
    backend.set_menu("r2", vec![MenuItem::new("i3", "Al Pastor", 3.5)]);
    backend
}

/// Drives the session to a 2-line cart totalling 12.50 (5.00 + 2 × 3.75).
async fn assemble_cart(storefront: &Storefront) {
    let snapshot = storefront.session.load().await.unwrap();
    let r1 = snapshot.restaurants[0].clone();
    let snapshot = storefront.session.select(r1).await.unwrap();
    let margherita = snapshot.menu[0].clone();
    let tiramisu = snapshot.menu[1].clone();
    storefront.session.add_item(margherita).await.unwrap();
    storefront.session.add_item(tiramisu.clone()).await.unwrap();
    storefront.session.add_item(tiramisu).await.unwrap();
}

#[tokio::test]
async fn test_checkout_with_empty_cart_issues_no_request() {
    let backend = scripted_backend();
    let storefront = Storefront::with_backend(Arc::new(backend.clone()));

    let snapshot = storefront.session.load().await.unwrap();
    let r1 = snapshot.restaurants[0].clone();
    storefront.session.select(r1).await.unwrap();

    let outcome = storefront.session.checkout().await.unwrap();
    assert_eq!(outcome, CheckoutOutcome::NotReady);
    assert_eq!(backend.calls().orders, 0, "no network call may be issued");

    // And no state changed.
    let snapshot = storefront.session.snapshot().await.unwrap();
    assert!(snapshot.cart.is_empty());
    assert_eq!(snapshot.active.as_ref().unwrap().id, "r1");

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_without_active_restaurant_issues_no_request() {
    let backend = scripted_backend();
    let storefront = Storefront::with_backend(Arc::new(backend.clone()));

    storefront.session.load().await.unwrap();
    // No selection: adding is ignored and checkout is unavailable.
    storefront
        .session
        .add_item(MenuItem::new("i1", "Margherita", 5.0))
        .await
        .unwrap();

    let outcome = storefront.session.checkout().await.unwrap();
    assert_eq!(outcome, CheckoutOutcome::NotReady);
    assert_eq!(backend.calls().orders, 0);

    storefront.shutdown().await.unwrap();
}

/// A successful submit clears the cart and reports the total
/// from the service response.
#[tokio::test]
async fn test_successful_checkout_clears_cart_and_reports_total() {
    let backend = scripted_backend();
    let storefront = Storefront::with_backend(Arc::new(backend.clone()));
    assemble_cart(&storefront).await;

    let outcome = storefront.session.checkout().await.unwrap();
    match outcome {
        CheckoutOutcome::Placed(receipt) => assert_eq!(receipt.total, 12.5),
        other => panic!("expected Placed, got {other:?}"),
    }

    let snapshot = storefront.session.snapshot().await.unwrap();
    assert!(snapshot.cart.is_empty(), "cart clears on success");
    assert_eq!(snapshot.cart_total, 0.0);

    // The submitted order carried the placeholder customer and the
    // flattened cart lines.
    let orders = backend.placed_orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].restaurant_id, "r1");
    assert_eq!(orders[0].customer_name, GUEST_NAME);
    assert_eq!(orders[0].items.len(), 2);
    assert_eq!(orders[0].items[1].quantity, 2);

    storefront.shutdown().await.unwrap();
}

/// The reported total is the service's figure, never recomputed locally.
#[tokio::test]
async fn test_service_total_is_authoritative() {
    let backend = scripted_backend();
    // The service applies, say, a promotion the client knows nothing about.
    backend.set_order_total(9.99);
    let storefront = Storefront::with_backend(Arc::new(backend.clone()));
    assemble_cart(&storefront).await;

    let outcome = storefront.session.checkout().await.unwrap();
    assert_eq!(
        outcome,
        CheckoutOutcome::Placed(quickbite_client::model::OrderReceipt { total: 9.99 })
    );

    storefront.shutdown().await.unwrap();
}

/// While a switch to another restaurant is still fetching, the cart holds
/// the previous restaurant's lines; checkout must not submit them under the
/// new restaurant id.
#[tokio::test]
async fn test_checkout_blocked_while_restaurant_switch_pending() {
    let backend = scripted_backend();
    backend.set_menu_delay("r2", Duration::from_millis(150));
    let storefront = Storefront::with_backend(Arc::new(backend.clone()));
    assemble_cart(&storefront).await;

    let snapshot = storefront.session.snapshot().await.unwrap();
    let r2 = snapshot.restaurants[1].clone();
    let session = storefront.session.clone();
    let pending = tokio::spawn(async move { session.select(r2).await });
    tokio::time::sleep(Duration::from_millis(30)).await;

    let outcome = storefront.session.checkout().await.unwrap();
    assert_eq!(outcome, CheckoutOutcome::NotReady);
    assert_eq!(backend.calls().orders, 0, "no order may be issued mid-switch");

    // The switch then settles normally and empties the cart.
    let settled = pending.await.unwrap().unwrap();
    assert_eq!(settled.active.as_ref().unwrap().id, "r2");
    assert!(settled.cart.is_empty());

    storefront.shutdown().await.unwrap();
}

/// A failed switch keeps the previous restaurant's cart around, but that
/// cart is not submittable under the newly active restaurant.
#[tokio::test]
async fn test_checkout_blocked_after_failed_restaurant_switch() {
    let backend = scripted_backend();
    backend.fail_menu("r2", true);
    let storefront = Storefront::with_backend(Arc::new(backend.clone()));
    assemble_cart(&storefront).await;

    let snapshot = storefront.session.snapshot().await.unwrap();
    let r2 = snapshot.restaurants[1].clone();
    let snapshot = storefront.session.select(r2).await.unwrap();
    assert_eq!(snapshot.active.as_ref().unwrap().id, "r2");
    assert_eq!(snapshot.banner.as_deref(), Some("Failed to load menu"));
    assert_eq!(snapshot.cart.len(), 2, "previous cart retained");

    let outcome = storefront.session.checkout().await.unwrap();
    assert_eq!(outcome, CheckoutOutcome::NotReady);
    assert_eq!(backend.calls().orders, 0);

    storefront.shutdown().await.unwrap();
}

/// A failed submission surfaces as an error, retains the cart, and allows a
/// retry that can then succeed.
#[tokio::test]
async fn test_failed_checkout_retains_cart_for_retry() {
    let backend = scripted_backend();
    backend.fail_orders(true);
    let storefront = Storefront::with_backend(Arc::new(backend.clone()));
    assemble_cart(&storefront).await;

    let result = storefront.session.checkout().await;
    assert!(matches!(result, Err(SessionError::OrderSubmit(_))));

    let snapshot = storefront.session.snapshot().await.unwrap();
    assert_eq!(snapshot.cart.len(), 2, "cart retained on failure");
    assert_eq!(snapshot.cart_total, 12.5);

    // The backend recovers; the same cart goes through.
    backend.fail_orders(false);
    let outcome = storefront.session.checkout().await.unwrap();
    match outcome {
        CheckoutOutcome::Placed(receipt) => assert_eq!(receipt.total, 12.5),
        other => panic!("expected Placed, got {other:?}"),
    }
    assert_eq!(backend.calls().orders, 2);

    let snapshot = storefront.session.snapshot().await.unwrap();
    assert!(snapshot.cart.is_empty());

    storefront.shutdown().await.unwrap();
}
