//! User administration and staff creation endpoints.

use digital_cafe_core::{Role, UserId};
use serde_json::json;
use tracing::instrument;

use super::types::{StaffCreationRequest, StaffCreationResponse, UserSummary};
use super::{CafeApi, GatewayError};

impl CafeApi {
    /// `GET users`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn users(&self) -> Result<Vec<UserSummary>, GatewayError> {
        self.get_json("users").await
    }

    /// `GET users/role/{role}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn users_by_role(&self, role: Role) -> Result<Vec<UserSummary>, GatewayError> {
        self.get_json(&format!("users/role/{}", role.as_str())).await
    }

    /// `PATCH users/{id}/deactivate`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn deactivate_user(&self, id: UserId) -> Result<UserSummary, GatewayError> {
        self.patch_json(&format!("users/{id}/deactivate"), &json!({}))
            .await
    }

    /// `POST users/create-cafe-owner`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_cafe_owner(
        &self,
        request: &StaffCreationRequest,
    ) -> Result<StaffCreationResponse, GatewayError> {
        self.post_json("users/create-cafe-owner", request).await
    }

    /// `POST users/create-chef`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_chef(
        &self,
        request: &StaffCreationRequest,
    ) -> Result<StaffCreationResponse, GatewayError> {
        self.post_json("users/create-chef", request).await
    }

    /// `POST users/create-waiter`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_waiter(
        &self,
        request: &StaffCreationRequest,
    ) -> Result<StaffCreationResponse, GatewayError> {
        self.post_json("users/create-waiter", request).await
    }
}
