use portal_frontend_common::auth::{LocalTokenStore, TokenStore, end_session};
use portal_frontend_common::components::{LoginForm, NotificationProvider, use_notifier};
use portal_http::LoginResponse;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <NotificationProvider>
            <AppContent />
        </NotificationProvider>
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let is_authenticated = use_state(|| LocalTokenStore.is_authenticated());
    let user_name = use_state(|| Option::<String>::None);
    let notifier = use_notifier();

    let on_login = {
        let is_authenticated = is_authenticated.clone();
        let user_name = user_name.clone();
        let notifier = notifier.clone();
        Callback::from(move |response: LoginResponse| {
            let name = response
                .user
                .as_ref()
                .and_then(|user| user.display_name())
                .map(str::to_string);
            if let Some(notifier) = &notifier {
                let greeting = name
                    .as_deref()
                    .map_or_else(|| "Welcome back".to_string(), |n| format!("Welcome back, {n}"));
                notifier.success("Signed in", greeting);
            }
            user_name.set(name);
            is_authenticated.set(true);
        })
    };

    let on_logout = {
        let is_authenticated = is_authenticated.clone();
        let user_name = user_name.clone();
        Callback::from(move |_: MouseEvent| {
            end_session(&LocalTokenStore);
            if let Some(notifier) = &notifier {
                notifier.info("Signed out", "Your session has ended.");
            }
            user_name.set(None);
            is_authenticated.set(false);
        })
    };

    if *is_authenticated {
        let heading = (*user_name)
            .as_deref()
            .map_or_else(|| "Signed in".to_string(), |name| format!("Signed in as {name}"));
        html! {
            <main class="portal">
                <section class="session">
                    <h2>{heading}</h2>
                    <button type="button" class="logout" onclick={on_logout}>{"Sign out"}</button>
                </section>
            </main>
        }
    } else {
        html! {
            <main class="portal">
                <LoginForm on_success={on_login} />
            </main>
        }
    }
}
