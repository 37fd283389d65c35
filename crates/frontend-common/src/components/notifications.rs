//! Notification provider and display surface

use crate::notifications::{Notification, NotificationAction, NotificationQueue};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Handle for raising and dismissing notifications
#[derive(Clone, PartialEq)]
pub struct Notifier {
    queue: UseReducerHandle<NotificationQueue>,
}

impl Notifier {
    /// Notifications currently displayed
    pub fn queue(&self) -> &NotificationQueue {
        &self.queue
    }

    /// Show a notification and schedule its removal. Returns its id.
    pub fn notify(&self, notification: Notification) -> String {
        let id = notification.id.clone();
        let duration = notification.duration;
        self.queue.dispatch(NotificationAction::Push(notification));

        if let Some(duration_ms) = duration {
            let queue = self.queue.clone();
            let expired = id.clone();
            // Fire and forget; removal of an already dismissed id is a no-op
            Timeout::new(duration_ms, move || {
                queue.dispatch(NotificationAction::Remove(expired));
            })
            .forget();
        }

        id
    }

    pub fn dismiss(&self, id: &str) {
        self.queue.dispatch(NotificationAction::Remove(id.to_string()));
    }

    pub fn clear(&self) {
        self.queue.dispatch(NotificationAction::Clear);
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.notify(Notification::success(title, message))
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.notify(Notification::error(title, message))
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.notify(Notification::warning(title, message))
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.notify(Notification::info(title, message))
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

/// Owns the notification queue and renders it above its children
#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let queue = use_reducer(NotificationQueue::default);
    let notifier = Notifier { queue };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            {props.children.clone()}
            <NotificationList />
        </ContextProvider<Notifier>>
    }
}

/// Hook to reach the notifier, if a provider is mounted
#[hook]
pub fn use_notifier() -> Option<Notifier> {
    use_context::<Notifier>()
}

#[function_component(NotificationList)]
pub fn notification_list() -> Html {
    let Some(notifier) = use_notifier() else {
        return html! {};
    };

    let items = notifier.queue().iter().map(|notification| {
        let on_dismiss = {
            let notifier = notifier.clone();
            let id = notification.id.clone();
            Callback::from(move |_: MouseEvent| notifier.dismiss(&id))
        };
        let class = classes!(
            "notification",
            format!("notification-{}", notification.kind.as_str())
        );

        html! {
            <div key={notification.id.clone()} {class} role="status">
                <strong class="notification-title">{notification.title.clone()}</strong>
                <p class="notification-message">{notification.message.clone()}</p>
                <button type="button" class="notification-close" aria-label="Dismiss" onclick={on_dismiss}>
                    {"×"}
                </button>
            </div>
        }
    });

    html! {
        <div class="notifications" aria-live="polite">
            {for items}
        </div>
    }
}
