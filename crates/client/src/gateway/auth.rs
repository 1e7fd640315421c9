//! Authentication endpoints.
//!
//! Login and registration are the only calls that never carry a
//! credential. On success both adopt the returned identity into the
//! session holder, so the rest of the client sees the new principal
//! immediately.

use digital_cafe_core::{AuthToken, Email};
use reqwest::Method;
use tracing::instrument;

use crate::session::Principal;

use super::types::{
    AuthResponse, LoginRequest, MessageResponse, PasswordResetRequest, RegisterRequest,
};
use super::{CafeApi, Credential, GatewayError};

impl CafeApi {
    /// `POST auth/login`. On success the returned principal has been
    /// stored in the session holder.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call, or
    /// [`GatewayError::Remote`] if the response lacks a usable token or
    /// user id.
    #[instrument(skip(self, request), fields(user = %request.username_or_email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<Principal, GatewayError> {
        let builder = self.builder(Method::POST, "auth/login")?.json(request);
        let response: AuthResponse = self.execute(builder, Credential::Skip).await?;
        self.adopt(response)
    }

    /// `POST auth/register`. The backend logs the new account in
    /// directly, so this also adopts the principal.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call or unusable response.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<Principal, GatewayError> {
        let builder = self.builder(Method::POST, "auth/register")?.json(request);
        let response: AuthResponse = self.execute(builder, Credential::Skip).await?;
        self.adopt(response)
    }

    /// Log out. Purely local: removes the persisted credential and
    /// identity and publishes the unauthenticated state.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Store`] if the persisted records cannot be
    /// removed.
    pub fn logout(&self) -> Result<(), GatewayError> {
        self.session.borrow_mut().clear()?;
        Ok(())
    }

    /// `GET auth/verify-email?token=...`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, token))]
    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, GatewayError> {
        let builder = self
            .builder(Method::POST, "auth/verify-email")?
            .query(&[("token", token)]);
        self.execute(builder, Credential::Bearer).await
    }

    /// `POST auth/resend-verification?email=...`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn resend_verification(&self, email: &str) -> Result<MessageResponse, GatewayError> {
        let builder = self
            .builder(Method::POST, "auth/resend-verification")?
            .query(&[("email", email)]);
        self.execute(builder, Credential::Bearer).await
    }

    /// `POST auth/reset-password`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip_all)]
    pub async fn reset_password(
        &self,
        request: &PasswordResetRequest,
    ) -> Result<MessageResponse, GatewayError> {
        self.post_json("auth/reset-password", request).await
    }

    /// Turn an auth response into a principal and store it.
    fn adopt(&self, response: AuthResponse) -> Result<Principal, GatewayError> {
        let token = AuthToken::parse(response.token)
            .map_err(|_| GatewayError::Remote("auth response carried no token".to_owned()))?;
        let id = response
            .id
            .ok_or_else(|| GatewayError::Remote("auth response carried no user id".to_owned()))?;
        let email = Email::parse(&response.email)
            .map_err(|err| GatewayError::Remote(format!("auth response email invalid: {err}")))?;

        let principal = Principal {
            id,
            display_name: response.username,
            email,
            role: response.role,
            email_verified: response.email_verified,
            profile_completed: response.profile_completed,
            token,
        };

        self.session.borrow_mut().set_principal(principal.clone())?;
        Ok(principal)
    }
}
