use leptos::ev::MouseEvent;
use leptos::*;

use crate::pages::attendance::utils::FilterFormState;

#[component]
pub fn FilterSection(
    filter_state: FilterFormState,
    on_apply: Callback<MouseEvent>,
    on_clear: Callback<MouseEvent>,
) -> impl IntoView {
    let employee_id = filter_state.employee_id_signal();
    let date = filter_state.date_signal();

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-gray-900">{"Filter Attendance"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end">
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Employee ID"}</label>
                    <input
                        class="mt-1 w-full border rounded px-2 py-1"
                        placeholder="e.g., EMP001"
                        prop:value=move || employee_id.get()
                        on:input=move |ev| employee_id.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Date"}</label>
                    <input
                        type="date"
                        class="mt-1 w-full border rounded px-2 py-1"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </div>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700"
                        on:click=move |ev| on_apply.call(ev)
                    >
                        {"Apply Filters"}
                    </button>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-gray-100 text-gray-900 hover:bg-gray-200"
                        on:click=move |ev| on_clear.call(ev)
                    >
                        {"Clear"}
                    </button>
                </div>
            </div>
        </div>
    }
}
