use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderName, request::Parts},
};
use secrecy::{ExposeSecret, SecretString};

use crate::{error::AppError, state::AppState};

pub const ADMIN_HEADER: HeaderName = HeaderName::from_static("admin_session");

/// Shared-secret check guarding every admin route.
#[derive(Debug, Clone)]
pub struct AdminGate {
    secret: SecretString,
}

/// Proof that the admin gate accepted the caller's credential.
///
/// Only [`AdminGate`] can build one, so service functions that take it cannot be
/// reached without passing the gate first.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    _private: (),
}

impl AdminGate {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    pub fn authenticate(&self, supplied: Option<&[u8]>) -> Result<AdminSession, AppError> {
        match supplied {
            Some(candidate) if candidate == self.secret.expose_secret().as_bytes() => {
                Ok(AdminSession { _private: () })
            }
            _ => Err(AppError::Forbidden),
        }
    }

    pub fn authenticate_headers(&self, headers: &HeaderMap) -> Result<AdminSession, AppError> {
        self.authenticate(headers.get(&ADMIN_HEADER).map(|value| value.as_bytes()))
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state.admin_gate.authenticate_headers(&parts.headers).inspect_err(|_| {
            tracing::warn!(uri = %parts.uri, "admin credential rejected");
        })
    }
}
