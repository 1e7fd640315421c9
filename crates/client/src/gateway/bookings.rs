//! Table booking endpoints.

use chrono::NaiveDate;
use digital_cafe_core::{BookingId, BookingStatus, CafeId, UserId};
use serde_json::json;
use tracing::instrument;

use super::types::{Booking, BookingRequest};
use super::{CafeApi, Credential, GatewayError};

impl CafeApi {
    /// `POST bookings`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, request), fields(cafe = %request.cafe_id, table = %request.table_id))]
    pub async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, GatewayError> {
        self.post_json("bookings", request).await
    }

    /// `GET bookings/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn booking(&self, id: BookingId) -> Result<Booking, GatewayError> {
        self.get_json(&format!("bookings/{id}")).await
    }

    /// `GET bookings/customer/{customerId}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn customer_bookings(
        &self,
        customer_id: UserId,
    ) -> Result<Vec<Booking>, GatewayError> {
        self.get_json(&format!("bookings/customer/{customer_id}"))
            .await
    }

    /// `GET bookings/cafe/{cafeId}`, optionally filtered to one date.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn cafe_bookings(
        &self,
        cafe_id: CafeId,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Booking>, GatewayError> {
        let mut builder =
            self.builder(reqwest::Method::GET, &format!("bookings/cafe/{cafe_id}"))?;
        if let Some(date) = date {
            builder = builder.query(&[("date", date.to_string())]);
        }
        self.execute(builder, Credential::Bearer).await
    }

    /// `PATCH bookings/{id}/status`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn update_booking_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, GatewayError> {
        self.patch_json(&format!("bookings/{id}/status"), &json!({ "status": status }))
            .await
    }

    /// Cancel a booking (a status transition, not a deletion).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    pub async fn cancel_booking(&self, id: BookingId) -> Result<Booking, GatewayError> {
        self.update_booking_status(id, BookingStatus::Cancelled)
            .await
    }

    /// `DELETE bookings/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn delete_booking(&self, id: BookingId) -> Result<(), GatewayError> {
        self.delete(&format!("bookings/{id}")).await
    }
}
