//! Authentication module

pub mod error_messages;
pub mod submitter;
pub mod token_store;

// Re-export commonly used items
pub use error_messages::{client_error_message, extract_message, extract_optional_message};
pub use submitter::{AuthApi, LoginSubmitter, SubmitOutcome};
pub use token_store::{
    LocalTokenStore, MemoryTokenStore, StorageError, TokenStore, end_session,
};
