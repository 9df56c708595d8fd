use leptos::*;

use crate::components::layout::Layout;

#[component]
pub fn EmployeesFrame(children: Children) -> impl IntoView {
    view! { <Layout>{children()}</Layout> }
}
