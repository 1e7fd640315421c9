//! Café and table endpoints.

use chrono::{NaiveDate, NaiveTime};
use digital_cafe_core::{CafeId, TableId, TableStatus, UserId};
use serde_json::json;
use tracing::instrument;

use super::types::{Cafe, CafeTable};
use super::{CafeApi, GatewayError};

impl CafeApi {
    /// `GET cafes`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn cafes(&self) -> Result<Vec<Cafe>, GatewayError> {
        self.get_json("cafes").await
    }

    /// `GET cafes/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn cafe(&self, id: CafeId) -> Result<Cafe, GatewayError> {
        self.get_json(&format!("cafes/{id}")).await
    }

    /// `GET cafes/owner/{ownerId}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn cafes_by_owner(&self, owner_id: UserId) -> Result<Vec<Cafe>, GatewayError> {
        self.get_json(&format!("cafes/owner/{owner_id}")).await
    }

    /// `POST cafes`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, cafe), fields(name = %cafe.name))]
    pub async fn create_cafe(&self, cafe: &Cafe) -> Result<Cafe, GatewayError> {
        self.post_json("cafes", cafe).await
    }

    /// `PUT cafes/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, cafe))]
    pub async fn update_cafe(&self, id: CafeId, cafe: &Cafe) -> Result<Cafe, GatewayError> {
        self.put_json(&format!("cafes/{id}"), cafe).await
    }

    /// `DELETE cafes/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn delete_cafe(&self, id: CafeId) -> Result<(), GatewayError> {
        self.delete(&format!("cafes/{id}")).await
    }

    // -------------------------------------------------------------------------
    // Tables
    // -------------------------------------------------------------------------

    /// `GET cafes/{cafeId}/tables`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn tables(&self, cafe_id: CafeId) -> Result<Vec<CafeTable>, GatewayError> {
        self.get_json(&format!("cafes/{cafe_id}/tables")).await
    }

    /// `GET cafes/{cafeId}/tables/available?date=...&time=...` - tables
    /// free for a booking slot.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn available_tables(
        &self,
        cafe_id: CafeId,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Vec<CafeTable>, GatewayError> {
        let builder = self
            .builder(
                reqwest::Method::GET,
                &format!("cafes/{cafe_id}/tables/available"),
            )?
            .query(&[("date", date.to_string()), ("time", time.to_string())]);
        self.execute(builder, super::Credential::Bearer).await
    }

    /// `POST cafes/{cafeId}/tables`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, table), fields(table = %table.table_number))]
    pub async fn create_table(
        &self,
        cafe_id: CafeId,
        table: &CafeTable,
    ) -> Result<CafeTable, GatewayError> {
        self.post_json(&format!("cafes/{cafe_id}/tables"), table)
            .await
    }

    /// `PATCH tables/{tableId}/status`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn set_table_status(
        &self,
        table_id: TableId,
        status: TableStatus,
    ) -> Result<CafeTable, GatewayError> {
        self.patch_json(
            &format!("tables/{table_id}/status"),
            &json!({ "status": status }),
        )
        .await
    }
}
