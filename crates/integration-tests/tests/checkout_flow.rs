//! Cart-to-order submission through a faked backend, plus the stale
//! response guard for overlapping requests.

use std::cell::RefCell;

use digital_cafe_client::cart::CartManager;
use digital_cafe_client::checkout::{CheckoutError, OrderApi, OrderDraft, place_order};
use digital_cafe_client::gateway::GatewayError;
use digital_cafe_client::gateway::types::{Order, OrderRequest};
use digital_cafe_client::sequence::RequestSequencer;
use digital_cafe_client::storage::{MemoryStore, shared};
use digital_cafe_core::{
    CafeId, CartLine, MenuItemId, OrderId, OrderStatus, OrderType, Price, TableId, UserId,
};

struct ScriptedBackend {
    responses: RefCell<Vec<Result<Order, GatewayError>>>,
    requests: RefCell<Vec<OrderRequest>>,
}

impl ScriptedBackend {
    fn new(responses: Vec<Result<Order, GatewayError>>) -> Self {
        Self {
            responses: RefCell::new(responses),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl OrderApi for ScriptedBackend {
    async fn create_order(&self, request: &OrderRequest) -> Result<Order, GatewayError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop()
            .unwrap_or(Err(GatewayError::Remote("no response scripted".into())))
    }
}

fn accepted(request: &OrderRequest) -> Order {
    Order {
        id: OrderId::new(501),
        order_number: Some("ORD-501".to_owned()),
        customer_id: request.customer_id,
        customer_name: None,
        cafe_id: request.cafe_id,
        cafe_name: None,
        order_type: request.order_type,
        status: OrderStatus::Pending,
        total_amount: Price::ZERO,
        table_id: request.table_id,
        special_instructions: None,
        items: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

fn loaded_cart() -> CartManager {
    let (mut cart, _) = CartManager::load(shared(MemoryStore::new()));
    cart.add_line(CartLine::new(
        MenuItemId::new(31),
        "Espresso",
        Price::from_units(3),
        2,
    ))
    .expect("add");
    cart.add_line(CartLine::new(
        MenuItemId::new(32),
        "Brownie",
        Price::from_units(4),
        1,
    ))
    .expect("add");
    cart
}

fn takeaway_draft() -> OrderDraft {
    OrderDraft {
        cafe_id: CafeId::new(2),
        order_type: OrderType::Takeaway,
        table_id: None,
        special_instructions: Some("no bag".to_owned()),
    }
}

#[tokio::test]
async fn full_checkout_clears_the_cart() {
    let mut cart = loaded_cart();
    let expected = cart.order_items();
    // script the success against the exact request we expect to see
    let request = OrderRequest {
        customer_id: UserId::new(9),
        cafe_id: CafeId::new(2),
        order_type: OrderType::Takeaway,
        table_id: None,
        special_instructions: Some("no bag".to_owned()),
        items: expected.clone(),
    };
    let backend = ScriptedBackend::new(vec![Ok(accepted(&request))]);

    let order = place_order(&backend, &mut cart, UserId::new(9), takeaway_draft())
        .await
        .expect("order accepted");

    assert_eq!(order.id, OrderId::new(501));
    assert!(cart.is_empty());
    let sent = backend.requests.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent.first().expect("request").items, expected);
}

#[tokio::test]
async fn rejected_order_preserves_the_cart_for_retry() {
    let mut cart = loaded_cart();
    let backend = ScriptedBackend::new(vec![Err(GatewayError::Remote(
        "cafe not accepting orders".into(),
    ))]);

    let err = place_order(&backend, &mut cart, UserId::new(9), takeaway_draft())
        .await
        .expect_err("order rejected");

    assert!(matches!(err, CheckoutError::Gateway(_)));
    assert_eq!(cart.line_count(), 3);

    // retry with the untouched cart succeeds
    let expected = cart.order_items();
    let request = OrderRequest {
        customer_id: UserId::new(9),
        cafe_id: CafeId::new(2),
        order_type: OrderType::Takeaway,
        table_id: None,
        special_instructions: Some("no bag".to_owned()),
        items: expected,
    };
    let backend = ScriptedBackend::new(vec![Ok(accepted(&request))]);
    place_order(&backend, &mut cart, UserId::new(9), takeaway_draft())
        .await
        .expect("retry accepted");
    assert!(cart.is_empty());
}

#[tokio::test]
async fn dine_in_checkout_carries_the_table() {
    let mut cart = loaded_cart();
    let draft = OrderDraft {
        cafe_id: CafeId::new(2),
        order_type: OrderType::DineIn,
        table_id: Some(TableId::new(7)),
        special_instructions: None,
    };
    let request = OrderRequest {
        customer_id: UserId::new(9),
        cafe_id: CafeId::new(2),
        order_type: OrderType::DineIn,
        table_id: Some(TableId::new(7)),
        special_instructions: None,
        items: cart.order_items(),
    };
    let backend = ScriptedBackend::new(vec![Ok(accepted(&request))]);

    place_order(&backend, &mut cart, UserId::new(9), draft)
        .await
        .expect("order accepted");

    let sent = backend.requests.borrow();
    assert_eq!(sent.first().expect("request").table_id, Some(TableId::new(7)));
}

#[tokio::test]
async fn dine_in_without_table_never_reaches_the_backend() {
    let mut cart = loaded_cart();
    let backend = ScriptedBackend::new(vec![]);
    let draft = OrderDraft {
        cafe_id: CafeId::new(2),
        order_type: OrderType::DineIn,
        table_id: None,
        special_instructions: None,
    };

    let err = place_order(&backend, &mut cart, UserId::new(9), draft)
        .await
        .expect_err("rejected locally");

    assert!(matches!(err, CheckoutError::TableRequired));
    assert!(backend.requests.borrow().is_empty());
    assert_eq!(cart.line_count(), 3);
}

#[test]
fn overlapping_menu_requests_apply_only_the_newest() {
    // simulate two list requests racing: the first response arrives last
    let sequencer = RequestSequencer::new();
    let mut displayed: Vec<&str> = Vec::new();

    let first = sequencer.issue();
    let second = sequencer.issue();

    // second (newest) response arrives first and is applied
    if sequencer.accept(&second) {
        displayed.push("fresh menu");
    }
    // first response straggles in and is discarded
    if sequencer.accept(&first) {
        displayed.push("stale menu");
    }

    assert_eq!(displayed, vec!["fresh menu"]);
}
