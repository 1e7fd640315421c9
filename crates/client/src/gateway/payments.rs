//! Payment endpoints.
//!
//! The payment gateway itself lives behind the backend; the client only
//! records and queries payment state.

use digital_cafe_core::{OrderId, PaymentId, PaymentStatus};
use serde_json::json;
use tracing::instrument;

use super::types::{MessageResponse, Payment, PaymentRequest};
use super::{CafeApi, GatewayError};

impl CafeApi {
    /// `POST payments`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, request), fields(order = %request.order_id))]
    pub async fn create_payment(&self, request: &PaymentRequest) -> Result<Payment, GatewayError> {
        self.post_json("payments", request).await
    }

    /// `GET payments/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn payment(&self, id: PaymentId) -> Result<Payment, GatewayError> {
        self.get_json(&format!("payments/{id}")).await
    }

    /// `GET payments/order/{orderId}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn payment_by_order(&self, order_id: OrderId) -> Result<Payment, GatewayError> {
        self.get_json(&format!("payments/order/{order_id}")).await
    }

    /// `GET payments/transaction/{transactionId}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn payment_by_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<Payment, GatewayError> {
        self.get_json(&format!("payments/transaction/{transaction_id}"))
            .await
    }

    /// `PATCH payments/{id}/status`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn update_payment_status(
        &self,
        id: PaymentId,
        status: PaymentStatus,
    ) -> Result<Payment, GatewayError> {
        self.patch_json(&format!("payments/{id}/status"), &json!({ "status": status }))
            .await
    }

    /// `POST payments/{id}/refund`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn refund_payment(&self, id: PaymentId) -> Result<MessageResponse, GatewayError> {
        self.post_json(&format!("payments/{id}/refund"), &json!({}))
            .await
    }
}
