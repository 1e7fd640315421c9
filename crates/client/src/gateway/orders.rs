//! Order endpoints.
//!
//! `create_order` only submits; clearing the cart after a successful
//! submission is coordinated by [`crate::checkout`], never here.

use digital_cafe_core::{CafeId, OrderId, OrderStatus, UserId};
use serde_json::json;
use tracing::instrument;

use super::types::{Order, OrderRequest};
use super::{CafeApi, GatewayError};

impl CafeApi {
    /// `POST orders`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, request), fields(cafe = %request.cafe_id, items = request.items.len()))]
    pub async fn create_order(&self, request: &OrderRequest) -> Result<Order, GatewayError> {
        self.post_json("orders", request).await
    }

    /// `GET orders`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, GatewayError> {
        self.get_json("orders").await
    }

    /// `GET orders/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Order, GatewayError> {
        self.get_json(&format!("orders/{id}")).await
    }

    /// `GET orders/customer/{customerId}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn customer_orders(&self, customer_id: UserId) -> Result<Vec<Order>, GatewayError> {
        self.get_json(&format!("orders/customer/{customer_id}"))
            .await
    }

    /// `GET orders/cafe/{cafeId}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn cafe_orders(&self, cafe_id: CafeId) -> Result<Vec<Order>, GatewayError> {
        self.get_json(&format!("orders/cafe/{cafe_id}")).await
    }

    /// `GET orders/status/{status}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, GatewayError> {
        self.get_json(&format!("orders/status/{}", status.as_str()))
            .await
    }

    /// `PATCH orders/{id}/status`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, GatewayError> {
        self.patch_json(&format!("orders/{id}/status"), &json!({ "status": status }))
            .await
    }

    /// Cancel an order (a status transition, not a deletion).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    pub async fn cancel_order(&self, id: OrderId) -> Result<Order, GatewayError> {
        self.update_order_status(id, OrderStatus::Cancelled).await
    }

    /// `DELETE orders/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), GatewayError> {
        self.delete(&format!("orders/{id}")).await
    }
}
