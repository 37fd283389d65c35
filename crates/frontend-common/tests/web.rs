//! Browser-only tests: localStorage token store and notification expiry

#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use portal_frontend_common::auth::{LocalTokenStore, TokenStore};
use portal_frontend_common::components::{NotificationProvider, use_notifier};
use portal_frontend_common::{AuthConfig, Notification};
use wasm_bindgen_test::*;
use web_sys::Element;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn local_storage() -> web_sys::Storage {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("localStorage available")
}

#[wasm_bindgen_test]
fn token_round_trips_through_local_storage() {
    let store = LocalTokenStore;
    store.clear();
    assert!(!store.is_authenticated());

    store.set_token("tok_browser").unwrap();
    assert_eq!(store.token().as_deref(), Some("tok_browser"));
    assert_eq!(
        local_storage().get_item(AuthConfig::TOKEN_KEY).unwrap().as_deref(),
        Some("tok_browser")
    );

    store.clear();
    assert_eq!(store.token(), None);
    store.clear();
}

#[wasm_bindgen_test]
fn only_the_token_key_is_touched() {
    let storage = local_storage();
    storage.set_item("unrelated", "keep").unwrap();

    let store = LocalTokenStore;
    store.set_token("tok").unwrap();
    store.clear();

    assert_eq!(storage.get_item("unrelated").unwrap().as_deref(), Some("keep"));
    storage.remove_item("unrelated").unwrap();
}

#[function_component(RaiseOnMount)]
fn raise_on_mount() -> Html {
    let notifier = use_notifier();
    use_effect_with((), move |_| {
        if let Some(notifier) = notifier {
            notifier.notify(Notification::info("Saved", "expires").with_duration(100));
            notifier.notify(Notification::error("Login failed", "stays").sticky());
        }
        || ()
    });
    html! {}
}

#[function_component(NotificationHarness)]
fn notification_harness() -> Html {
    html! {
        <NotificationProvider>
            <RaiseOnMount />
        </NotificationProvider>
    }
}

fn mount_root() -> Element {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document available");
    let root = document.create_element("div").unwrap();
    document.body().expect("body").append_child(&root).unwrap();
    root
}

fn rendered_titles(root: &Element) -> Vec<String> {
    let titles = root.get_elements_by_class_name("notification-title");
    (0..titles.length())
        .filter_map(|i| titles.item(i))
        .filter_map(|title| title.text_content())
        .collect()
}

#[wasm_bindgen_test]
async fn timed_notifications_expire_and_sticky_ones_stay() {
    let root = mount_root();
    yew::Renderer::<NotificationHarness>::with_root(root.clone()).render();

    TimeoutFuture::new(20).await;
    assert_eq!(rendered_titles(&root), vec!["Saved", "Login failed"]);

    TimeoutFuture::new(300).await;
    assert_eq!(rendered_titles(&root), vec!["Login failed"]);
}
