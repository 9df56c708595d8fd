use leptos::*;

use crate::api::Employee;
use crate::components::empty_state::EmptyState;

#[component]
pub fn EmployeeListSection(
    employees: Signal<Vec<Employee>>,
    deleting: Signal<Option<String>>,
    on_request_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !employees.get().is_empty()
            fallback=|| view! {
                <EmptyState
                    title="No employees found"
                    description="Add your first employee to get started"
                />
            }
        >
            <div class="bg-white shadow rounded-lg overflow-hidden">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Employee ID"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Full Name"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Email"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Department"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || employees.get()
                            key=|employee| employee.employee_id.clone()
                            children=move |employee| {
                                let row_id = employee.employee_id.clone();
                                let delete_id = row_id.clone();
                                let is_deleting = {
                                    let row_id = row_id.clone();
                                    Signal::derive(move || deleting.get().as_deref() == Some(row_id.as_str()))
                                };
                                view! {
                                    <tr>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{employee.employee_id.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{employee.full_name.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{employee.email.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{employee.department.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm">
                                            <button
                                                type="button"
                                                class="text-red-600 hover:text-red-800 font-medium disabled:opacity-50"
                                                disabled=move || is_deleting.get()
                                                on:click=move |_| on_request_delete.call(delete_id.clone())
                                            >
                                                {move || if is_deleting.get() { "Deleting..." } else { "Delete" }}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_a_row_per_employee() {
        let html = render_to_string(move || {
            let employees = Signal::derive(|| {
                vec![employee("EMP001", "Jane Doe"), employee("EMP002", "John Roe")]
            });
            view! {
                <EmployeeListSection
                    employees=employees
                    deleting=Signal::derive(|| None)
                    on_request_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("EMP001"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("emp002@example.com"));
        assert!(html.contains("Delete"));
    }

    #[test]
    fn shows_the_empty_state_without_employees() {
        let html = render_to_string(move || {
            view! {
                <EmployeeListSection
                    employees=Signal::derive(Vec::new)
                    deleting=Signal::derive(|| None)
                    on_request_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No employees found"));
        assert!(html.contains("Add your first employee to get started"));
    }

    #[test]
    fn row_being_deleted_shows_progress_label() {
        let html = render_to_string(move || {
            let employees = Signal::derive(|| vec![employee("EMP001", "Jane Doe")]);
            view! {
                <EmployeeListSection
                    employees=employees
                    deleting=Signal::derive(|| Some("EMP001".to_string()))
                    on_request_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Deleting..."));
    }
}
