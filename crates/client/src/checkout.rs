//! Checkout coordination.
//!
//! Validates the draft locally, submits the order, and clears the cart only
//! after the backend confirms. A failed submission leaves the cart exactly as
//! it was, so the customer can retry.

use digital_cafe_core::{CafeId, OrderType, TableId, UserId};
use tracing::{info, instrument};

use crate::cart::{CartError, CartManager};
use crate::gateway::types::{Order, OrderRequest};
use crate::gateway::{CafeApi, GatewayError};

/// What the customer chose on the checkout page, before it becomes a payload.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub cafe_id: CafeId,
    pub order_type: OrderType,
    pub table_id: Option<TableId>,
    pub special_instructions: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
    #[error("dine-in orders require a table selection")]
    TableRequired,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// The one gateway call checkout needs, behind a seam so tests can fake it.
pub trait OrderApi {
    async fn create_order(&self, request: &OrderRequest) -> Result<Order, GatewayError>;
}

impl OrderApi for CafeApi {
    async fn create_order(&self, request: &OrderRequest) -> Result<Order, GatewayError> {
        Self::create_order(self, request).await
    }
}

/// Submit the cart as an order.
///
/// Local validation runs before any network call: an empty cart or a dine-in
/// draft without a table never reaches the backend. On success the cart is
/// cleared and subscribers see the empty state.
///
/// # Errors
///
/// [`CheckoutError::EmptyCart`] and [`CheckoutError::TableRequired`] for
/// drafts rejected locally, [`CheckoutError::Gateway`] when submission fails,
/// and [`CheckoutError::Cart`] if clearing the cart afterwards fails.
#[instrument(skip(api, cart, draft), fields(cafe = %draft.cafe_id, order_type = ?draft.order_type))]
pub async fn place_order<A: OrderApi>(
    api: &A,
    cart: &mut CartManager,
    customer_id: UserId,
    draft: OrderDraft,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    if draft.order_type == OrderType::DineIn && draft.table_id.is_none() {
        return Err(CheckoutError::TableRequired);
    }

    let request = OrderRequest {
        customer_id,
        cafe_id: draft.cafe_id,
        order_type: draft.order_type,
        table_id: draft.table_id,
        special_instructions: draft.special_instructions,
        items: cart.order_items(),
    };

    let order = api.create_order(&request).await?;
    info!(order = %order.id, "order placed");
    cart.clear()?;
    Ok(order)
}
