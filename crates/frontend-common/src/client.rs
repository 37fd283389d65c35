//! Client configuration and initialization

use crate::config::AuthConfig;
use once_cell::sync::Lazy;
pub use portal_http::ClientError;
use portal_http::PortalClient;
use std::sync::Mutex;
use web_sys::window;

/// Global client instance
static PUBLIC_CLIENT: Lazy<Mutex<Option<PortalClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
pub fn get_base_url() -> String {
    if let Some(base) = AuthConfig::API_BASE {
        return base.trim_end_matches('/').to_string();
    }

    // Only a browser has a page origin to fall back to
    if cfg!(target_arch = "wasm32")
        && let Some(window) = window()
        && let Ok(origin) = window.location().origin()
    {
        return origin;
    }

    String::new()
}

/// Get the shared client for the public authentication endpoints
pub fn create_public_client() -> Result<PortalClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .map_err(|_| ClientError::Configuration("client cache is poisoned".into()))?;

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = PortalClient::new(get_base_url())?;
    *client_lock = Some(client.clone());
    Ok(client)
}
