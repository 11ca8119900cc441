use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use tokio::sync::watch;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::WebError;

/// The authenticated admin identity behind a valid session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminIdentity {
    pub email: String,
}

/// A freshly issued admin session.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: Uuid,
    pub email: String,
}

/// Session registry for the single configured admin account.
///
/// Wrong credentials are an expected outcome (`None`), never an error.
/// Login-state changes are pushed to watchers so interested parties never
/// have to poll.
#[derive(Clone)]
pub struct Sessions {
    inner: Arc<SessionsInner>,
}

struct SessionsInner {
    admin_email: String,
    admin_password: String,
    tokens: RwLock<HashSet<Uuid>>,
    tx: watch::Sender<Option<AdminIdentity>>,
}

impl Sessions {
    pub fn new(admin_email: impl Into<String>, admin_password: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(None);

        Self {
            inner: Arc::new(SessionsInner {
                admin_email: admin_email.into(),
                admin_password: admin_password.into(),
                tokens: RwLock::new(HashSet::new()),
                tx,
            }),
        }
    }

    /// Issue a bearer token when the credentials match the configured
    /// admin account.
    pub fn login(&self, email: &str, password: &str) -> Option<AdminSession> {
        if email != self.inner.admin_email || password != self.inner.admin_password {
            tracing::warn!("Rejected login attempt");
            return None;
        }

        let token = Uuid::new_v4();
        self.inner
            .tokens
            .write()
            .expect("sessions lock poisoned")
            .insert(token);
        self.inner.tx.send_replace(Some(AdminIdentity {
            email: email.to_string(),
        }));

        Some(AdminSession {
            token,
            email: email.to_string(),
        })
    }

    /// Revoke a token. Revoking an unknown token is a no-op.
    pub fn logout(&self, token: Uuid) {
        let mut tokens = self.inner.tokens.write().expect("sessions lock poisoned");
        let removed = tokens.remove(&token);

        if removed && tokens.is_empty() {
            self.inner.tx.send_replace(None);
        }
    }

    pub fn identity(&self, token: Uuid) -> Option<AdminIdentity> {
        let tokens = self.inner.tokens.read().expect("sessions lock poisoned");
        tokens.contains(&token).then(|| AdminIdentity {
            email: self.inner.admin_email.clone(),
        })
    }

    /// Watch login-state changes. The receiver sees the latest state
    /// immediately and every change after it.
    pub fn subscribe(&self) -> watch::Receiver<Option<AdminIdentity>> {
        self.inner.tx.subscribe()
    }
}

/// Extract the bearer token from an `Authorization` header, if present
/// and well formed.
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    Uuid::parse_str(token.trim()).ok()
}

/// Reject requests on protected routes that do not carry a valid session
/// token.
pub async fn require_auth(
    State(sessions): State<Sessions>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = bearer_token(req.headers()).ok_or(WebError::Unauthorized)?;

    if sessions.identity(token).is_none() {
        tracing::warn!("Invalid session token");
        return Err(WebError::Unauthorized);
    }

    Ok(next.run(req).await)
}
