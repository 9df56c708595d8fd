use leptos::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod utils;

#[cfg(test)]
pub mod test_support;

use pages::{AttendancePage, EmployeesPage, HomePage};

#[component]
pub fn App() -> impl IntoView {
    provide_context(api::ApiClient::new());
    components::toast::provide_toasts();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
            </Routes>
        </Router>
    }
}

#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting HRMS Lite frontend (wasm)");

    // Resolve the backend host before mounting so the first fetches do not
    // race the config lookup.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        mount_to_body(|| view! { <App/> });
    });
}
