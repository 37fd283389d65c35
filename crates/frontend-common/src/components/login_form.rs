//! Login form component

use super::{Spinner, use_notifier};
use crate::auth::error_messages::client_error_message;
use crate::auth::submitter::{LoginSubmitter, SubmitOutcome};
use crate::auth::token_store::LocalTokenStore;
use crate::client::create_public_client;
use portal_http::{LoginRequest, LoginResponse};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    /// Called after the token has been stored; the host navigates from here
    #[prop_or_default]
    pub on_success: Callback<LoginResponse>,
    #[prop_or(AttrValue::Static("Sign in"))]
    pub title: AttrValue,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let identifier = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let notifier = use_notifier();

    let submitter = use_memo((), |_| {
        create_public_client()
            .map(|client| LoginSubmitter::new(client, LocalTokenStore))
            .map_err(|e| client_error_message(&e))
    });

    let on_identifier_input = {
        let identifier = identifier.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            identifier.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let identifier = identifier.clone();
        let password = password.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let request = LoginRequest::from_identifier(&identifier, (*password).clone());
            let submitter = submitter.clone();
            let loading = loading.clone();
            let error = error.clone();
            let notifier = notifier.clone();
            let on_success = on_success.clone();

            loading.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match submitter.as_ref() {
                    Ok(submitter) => submitter.submit(&request).await,
                    Err(message) => SubmitOutcome::Failed(message.clone()),
                };

                match outcome {
                    SubmitOutcome::Success(response) => {
                        loading.set(false);
                        on_success.emit(response);
                    }
                    SubmitOutcome::Failed(message) => {
                        loading.set(false);
                        if let Some(notifier) = &notifier {
                            notifier.error("Login failed", message.clone());
                        }
                        error.set(Some(message));
                    }
                    // The outstanding attempt resets the flags
                    SubmitOutcome::Busy => {}
                }
            });
        })
    };

    let can_submit = !*loading && !identifier.trim().is_empty() && !password.is_empty();

    html! {
        <form class="login-form" {onsubmit}>
            <h2 class="login-title">{props.title.clone()}</h2>

            if let Some(message) = (*error).clone() {
                <div class="login-error" role="alert">{message}</div>
            }

            <label for="login-identifier">{"Email or username"}</label>
            <input
                id="login-identifier"
                type="text"
                autocomplete="username"
                required=true
                value={(*identifier).clone()}
                oninput={on_identifier_input}
                disabled={*loading}
            />

            <label for="login-password">{"Password"}</label>
            <input
                id="login-password"
                type="password"
                autocomplete="current-password"
                required=true
                value={(*password).clone()}
                oninput={on_password_input}
                disabled={*loading}
            />

            <button type="submit" class="login-submit" disabled={!can_submit}>
                {"Sign in"}
            </button>

            if *loading {
                <Spinner text="Signing in..." />
            }
        </form>
    }
}
