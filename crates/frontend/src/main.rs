mod app;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    portal_frontend_common::logging::init_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting portal front-end");
    yew::Renderer::<App>::new().render();
}
