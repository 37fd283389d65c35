//! Authentication API client methods

use super::{ClientError, PortalClient};
use crate::types::{LoginRequest, LoginResponse};

/// Path of the login endpoint, relative to the base URL
pub const LOGIN_PATH: &str = "/auth/login";

impl PortalClient {
    /// Exchange credentials for a session token
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, LOGIN_PATH)
            .json(request);
        self.execute(req).await
    }
}
