pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod logging;
pub mod notifications;

pub use auth::{LoginSubmitter, SubmitOutcome, TokenStore, extract_message};
pub use client::create_public_client;
pub use components::{LoginForm, NotificationProvider, Notifier, Spinner};
pub use config::{AuthConfig, NotificationConfig};
pub use notifications::{Notification, NotificationKind, NotificationQueue};
