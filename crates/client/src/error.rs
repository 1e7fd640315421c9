//! Application-level error type for host callers.
//!
//! The gateway, storage, and state managers each have their own error
//! enums; [`AppError`] is the single type a UI host matches on when it
//! does not care which layer failed.

use crate::access::RedirectTarget;
use crate::cart::CartError;
use crate::checkout::CheckoutError;
use crate::gateway::GatewayError;
use crate::storage::StoreError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input rejected before any network or storage call.
    #[error("{0}")]
    Validation(String),

    /// The session is missing or was rejected by the backend.
    #[error("not authenticated")]
    Unauthorized,

    /// The current user lacks permission for the action.
    #[error("not permitted")]
    Forbidden,

    /// The backend failed the call; carries its message when available.
    #[error("{0}")]
    Remote(String),

    /// A persisted record could not be read back and was discarded.
    #[error("stored record under {key:?} was corrupt and has been reset")]
    CorruptedState { key: &'static str },

    /// The persistent store itself failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<GatewayError> for AppError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Unauthorized => Self::Unauthorized,
            GatewayError::Forbidden => Self::Forbidden,
            GatewayError::Store(store) => Self::Store(store),
            GatewayError::Remote(message) => Self::Remote(message),
            GatewayError::Transport(transport) => Self::Remote(transport.to_string()),
            GatewayError::InvalidPath(path) => Self::Remote(format!("invalid request: {path}")),
        }
    }
}

impl From<CartError> for AppError {
    fn from(error: CartError) -> Self {
        match error {
            CartError::InvalidQuantity { .. } => Self::Validation(error.to_string()),
            CartError::Store(store) => Self::Store(store),
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(error: CheckoutError) -> Self {
        match error {
            CheckoutError::EmptyCart | CheckoutError::TableRequired => {
                Self::Validation(error.to_string())
            }
            CheckoutError::Gateway(gateway) => gateway.into(),
            CheckoutError::Cart(cart) => cart.into(),
        }
    }
}

impl AppError {
    /// A message suitable for showing directly to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Remote(message) => message.clone(),
            Self::Unauthorized => "Please log in to continue.".to_owned(),
            Self::Forbidden => "You do not have access to that page.".to_owned(),
            Self::CorruptedState { .. } => {
                "Saved data could not be read and was reset.".to_owned()
            }
            Self::Store(_) => "Saved data could not be written.".to_owned(),
        }
    }

    /// Where the host should navigate in response, if anywhere.
    #[must_use]
    pub const fn redirect_target(&self) -> Option<RedirectTarget> {
        match self {
            Self::Unauthorized => Some(RedirectTarget::Login),
            Self::Forbidden => Some(RedirectTarget::Unauthorized),
            _ => None,
        }
    }
}
