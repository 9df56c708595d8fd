use leptos::*;

use crate::components::layout::Layout;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{"HRMS Dashboard"}</h1>
                    <p class="text-sm text-gray-600 mt-1">
                        {"Manage employees and track attendance"}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <a href="/employees" class="block bg-white shadow rounded-lg p-6 hover:shadow-md">
                        <h2 class="text-lg font-semibold text-gray-900">{"Employee Management"}</h2>
                        <p class="text-sm text-gray-600 mt-1">
                            {"Add, view, and remove employees"}
                        </p>
                        <p class="text-sm font-medium text-blue-600 mt-4">{"View all employees →"}</p>
                    </a>
                    <a href="/attendance" class="block bg-white shadow rounded-lg p-6 hover:shadow-md">
                        <h2 class="text-lg font-semibold text-gray-900">{"Attendance Tracking"}</h2>
                        <p class="text-sm text-gray-600 mt-1">
                            {"Mark and review daily attendance"}
                        </p>
                        <p class="text-sm font-medium text-blue-600 mt-4">{"Mark attendance →"}</p>
                    </a>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_links_to_both_sections() {
        let html = render_to_string(move || view! { <HomePage /> });
        assert!(html.contains("HRMS Dashboard"));
        assert!(html.contains("Employee Management"));
        assert!(html.contains("Attendance Tracking"));
        assert!(html.contains("href=\"/employees\""));
        assert!(html.contains("href=\"/attendance\""));
    }
}
