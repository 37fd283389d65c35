mod login_form;
mod notifications;
mod spinner;

pub use login_form::{LoginForm, LoginFormProps};
pub use notifications::{
    NotificationList, NotificationProvider, Notifier, use_notifier,
};
pub use spinner::LoadingSpinner as Spinner;
