use leptos::{ev, *};

use crate::api::EmployeeCreate;
use crate::pages::employees::utils::EmployeeFormState;

#[component]
pub fn EmployeeFormSection(
    form_state: EmployeeFormState,
    submitting: Signal<bool>,
    on_submit: Callback<EmployeeCreate>,
) -> impl IntoView {
    let employee_id = form_state.employee_id_signal();
    let full_name = form_state.full_name_signal();
    let email = form_state.email_signal();
    let department = form_state.department_signal();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        on_submit.call(form_state.to_payload());
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-gray-900">{"Add New Employee"}</h2>
                <p class="text-sm text-gray-600">{"All fields are required"}</p>
            </div>

            <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=handle_submit>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Employee ID *"}</label>
                    <input
                        class="mt-1 w-full border rounded px-2 py-1"
                        placeholder="EMP001"
                        required
                        prop:value=move || employee_id.get()
                        on:input=move |ev| employee_id.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Full Name *"}</label>
                    <input
                        class="mt-1 w-full border rounded px-2 py-1"
                        placeholder="John Doe"
                        required
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Email *"}</label>
                    <input
                        type="email"
                        class="mt-1 w-full border rounded px-2 py-1"
                        placeholder="john@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Department *"}</label>
                    <input
                        class="mt-1 w-full border rounded px-2 py-1"
                        placeholder="Engineering"
                        required
                        prop:value=move || department.get()
                        on:input=move |ev| department.set(event_target_value(&ev))
                    />
                </div>
                <div class="md:col-span-2">
                    <button
                        type="submit"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Adding Employee..." } else { "Add Employee" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
