//! Credential submission
//!
//! [`LoginSubmitter`] runs one login attempt at a time: it calls the
//! authentication API, stores the token on success and turns failures into
//! display text through [`client_error_message`].

use super::error_messages::client_error_message;
use super::token_store::{TokenStore, end_session};
use async_trait::async_trait;
use portal_http::{ClientError, LoginRequest, LoginResponse, PortalClient};
use std::cell::{Cell, RefCell};

/// Authentication API seam
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a session token
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;
}

#[async_trait(?Send)]
impl AuthApi for PortalClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        PortalClient::login(self, request).await
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Logged in; the token has been stored
    Success(LoginResponse),
    /// The attempt failed with a displayable message
    Failed(String),
    /// Another attempt is still outstanding; nothing was sent
    Busy,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Clears the loading flag when the attempt ends, including when the
/// in-flight future is dropped
struct LoadingGuard<'a>(&'a Cell<bool>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Submits credentials, one attempt at a time
pub struct LoginSubmitter<A, S> {
    api: A,
    store: S,
    loading: Cell<bool>,
    error: RefCell<Option<String>>,
}

impl<A: AuthApi, S: TokenStore> LoginSubmitter<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            loading: Cell::new(false),
            error: RefCell::new(None),
        }
    }

    /// Whether a request is outstanding
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Message of the last failed attempt
    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn clear_error(&self) {
        self.error.borrow_mut().take();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Clear the stored token
    pub fn logout(&self) {
        end_session(&self.store);
    }

    /// Submit credentials. Returns [`SubmitOutcome::Busy`] without calling
    /// the API while a previous submission is outstanding.
    pub async fn submit(&self, request: &LoginRequest) -> SubmitOutcome {
        if self.loading.replace(true) {
            tracing::debug!("login already in progress");
            return SubmitOutcome::Busy;
        }
        let _guard = LoadingGuard(&self.loading);
        self.clear_error();

        tracing::debug!(by_email = request.email.is_some(), "submitting login");
        match self.api.login(request).await {
            Ok(response) => {
                if let Err(e) = self.store.set_token(&response.token) {
                    tracing::warn!(%e, "logged in but the token could not be stored");
                }
                tracing::info!("login succeeded");
                SubmitOutcome::Success(response)
            }
            Err(error) => {
                let message = client_error_message(&error);
                tracing::warn!(status = ?error.status(), "login failed");
                *self.error.borrow_mut() = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}
