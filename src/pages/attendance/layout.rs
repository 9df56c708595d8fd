use leptos::*;

use crate::components::layout::Layout;

#[component]
pub fn AttendanceFrame(children: Children) -> impl IntoView {
    view! { <Layout>{children()}</Layout> }
}
