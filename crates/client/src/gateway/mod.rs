//! Typed facade over the café backend REST API.
//!
//! [`CafeApi`] translates domain calls into HTTP requests. Cross-cutting
//! behavior lives here, not in per-call logic: the bearer credential is
//! attached to every request except login/registration, a 401 clears the
//! session holder and maps to a login redirect, and a 403 maps to the
//! unauthorized page. Other failures surface as [`GatewayError::Remote`]
//! with the backend's message when one is present. No call is retried
//! automatically; every retry is a user resubmitting the action.

pub mod types;

mod auth;
mod bookings;
mod cafes;
mod dashboard;
mod menu;
mod orders;
mod payments;
mod profiles;
mod users;

use std::cell::RefCell;
use std::rc::Rc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::access::RedirectTarget;
use crate::config::ClientConfig;
use crate::session::SessionHolder;
use crate::storage::StoreError;

use types::MessageResponse;

/// Errors raised by backend calls.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// 401: the credential was missing or rejected. The session has
    /// already been cleared; the host should redirect to login.
    #[error("not authenticated")]
    Unauthorized,

    /// 403: the principal lacks permission. The session is retained; the
    /// host should redirect to the unauthorized page.
    #[error("not permitted")]
    Forbidden,

    /// Any other failed call, carrying the backend's message when one was
    /// present. Shown to the user as a transient notice.
    #[error("remote call failed: {0}")]
    Remote(String),

    /// The request never completed (connection, timeout, decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Clearing the session after a 401 could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A path could not be joined onto the configured base URL.
    #[error("invalid request path: {0}")]
    InvalidPath(String),
}

impl GatewayError {
    /// Where the host should navigate in response to this error, if
    /// anywhere.
    #[must_use]
    pub const fn redirect_target(&self) -> Option<RedirectTarget> {
        match self {
            Self::Unauthorized => Some(RedirectTarget::Login),
            Self::Forbidden => Some(RedirectTarget::Unauthorized),
            _ => None,
        }
    }
}

/// Whether a request carries the bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Credential {
    /// Attach the current token if one exists.
    Bearer,
    /// Never attach a credential (login and registration).
    Skip,
}

/// Client for the café backend.
///
/// Cheap to clone; shares the HTTP connection pool and the session holder.
#[derive(Clone)]
pub struct CafeApi {
    client: reqwest::Client,
    base_url: Url,
    session: Rc<RefCell<SessionHolder>>,
}

impl CafeApi {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(
        config: &ClientConfig,
        session: Rc<RefCell<SessionHolder>>,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            session,
        })
    }

    /// The session holder this client reports authorization failures to.
    #[must_use]
    pub fn session(&self) -> &Rc<RefCell<SessionHolder>> {
        &self.session
    }

    /// Join a relative endpoint path onto the configured base URL.
    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|err| GatewayError::InvalidPath(format!("{path}: {err}")))
    }

    fn builder(&self, method: Method, path: &str) -> Result<RequestBuilder, GatewayError> {
        Ok(self.client.request(method, self.endpoint(path)?))
    }

    // -------------------------------------------------------------------------
    // Request execution
    // -------------------------------------------------------------------------

    /// Send a request and decode a JSON response body.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        credential: Credential,
    ) -> Result<T, GatewayError> {
        let response = self.dispatch(builder, credential).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send a request, discarding any response body.
    async fn execute_no_content(
        &self,
        builder: RequestBuilder,
        credential: Credential,
    ) -> Result<(), GatewayError> {
        self.dispatch(builder, credential).await.map(drop)
    }

    /// Attach the credential, send, and translate failure statuses.
    async fn dispatch(
        &self,
        builder: RequestBuilder,
        credential: Credential,
    ) -> Result<reqwest::Response, GatewayError> {
        let builder = match credential {
            Credential::Bearer => {
                // copy the token out so no borrow is held across the await
                let token = self
                    .session
                    .borrow()
                    .token()
                    .map(|token| token.expose().to_owned());
                match token {
                    Some(token) => builder.bearer_auth(token),
                    None => builder,
                }
            }
            Credential::Skip => builder,
        };

        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("backend rejected credential, clearing session");
            self.session.borrow_mut().clear()?;
            return Err(GatewayError::Unauthorized);
        }

        if status == StatusCode::FORBIDDEN {
            return Err(GatewayError::Forbidden);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<MessageResponse>(&body)
                .map(|m| m.message)
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("backend returned {status}"));
            debug!(%status, %message, "remote call failed");
            return Err(GatewayError::Remote(message));
        }

        Ok(response)
    }

    // -------------------------------------------------------------------------
    // Method helpers used by the endpoint modules
    // -------------------------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let builder = self.builder(Method::GET, path)?;
        self.execute(builder, Credential::Bearer).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let builder = self.builder(Method::POST, path)?.json(body);
        self.execute(builder, Credential::Bearer).await
    }

    async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let builder = self.builder(Method::PUT, path)?.json(body);
        self.execute(builder, Credential::Bearer).await
    }

    async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let builder = self.builder(Method::PATCH, path)?.json(body);
        self.execute(builder, Credential::Bearer).await
    }

    async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let builder = self.builder(Method::DELETE, path)?;
        self.execute_no_content(builder, Credential::Bearer).await
    }
}

impl std::fmt::Debug for CafeApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CafeApi")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
