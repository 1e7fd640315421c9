//! Role-specific dashboard endpoints.
//!
//! Each staff role gets its own aggregate view; the backend enforces
//! authorization, the client only routes to the right one.

use digital_cafe_core::CafeId;
use tracing::instrument;

use super::types::{AdminDashboard, ChefDashboard, OwnerDashboard, WaiterDashboard};
use super::{CafeApi, GatewayError};

impl CafeApi {
    /// `GET dashboard/admin`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn admin_dashboard(&self) -> Result<AdminDashboard, GatewayError> {
        self.get_json("dashboard/admin").await
    }

    /// `GET dashboard/owner`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn owner_dashboard(&self) -> Result<OwnerDashboard, GatewayError> {
        self.get_json("dashboard/owner").await
    }

    /// `GET dashboard/chef/{cafeId}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn chef_dashboard(&self, cafe_id: CafeId) -> Result<ChefDashboard, GatewayError> {
        self.get_json(&format!("dashboard/chef/{cafe_id}")).await
    }

    /// `GET dashboard/waiter/{cafeId}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn waiter_dashboard(&self, cafe_id: CafeId) -> Result<WaiterDashboard, GatewayError> {
        self.get_json(&format!("dashboard/waiter/{cafe_id}")).await
    }
}
