//! Profile endpoints. All operate on the logged-in user (`profiles/me`).

use serde::Deserialize;
use tracing::instrument;

use super::types::Profile;
use super::{CafeApi, GatewayError};

/// Response of the profile completion check.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProfileCompletion {
    /// Percentage of profile fields filled in, 0-100.
    pub percentage: f64,
}

impl CafeApi {
    /// `GET profiles/me`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn my_profile(&self) -> Result<Profile, GatewayError> {
        self.get_json("profiles/me").await
    }

    /// `PUT profiles/me`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, profile))]
    pub async fn update_my_profile(&self, profile: &Profile) -> Result<Profile, GatewayError> {
        self.put_json("profiles/me", profile).await
    }

    /// `GET profiles/me/completion`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn profile_completion(&self) -> Result<ProfileCompletion, GatewayError> {
        self.get_json("profiles/me/completion").await
    }
}
