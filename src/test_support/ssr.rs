//! Host-side rendering harness. Pages and components are string-rendered
//! under a throwaway reactive runtime so markup assertions (nav links,
//! table rows, badges, toast copy) run in plain `cargo test` without a
//! browser. Resource loading is suppressed, so panels render their
//! mount-time state and never hit the HTTP client.

use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
