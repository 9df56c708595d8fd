use leptos::{ev, *};

use crate::api::{AttendanceCreate, AttendanceStatus, Employee};
use crate::pages::attendance::utils::AttendanceFormState;

#[component]
pub fn AttendanceFormSection(
    form_state: AttendanceFormState,
    employees: Signal<Vec<Employee>>,
    submitting: Signal<bool>,
    on_submit: Callback<AttendanceCreate>,
) -> impl IntoView {
    let employee_id = form_state.employee_id_signal();
    let date = form_state.date_signal();
    let status = form_state.status_signal();

    let no_employees = Signal::derive(move || employees.get().is_empty());
    let disabled = Signal::derive(move || submitting.get() || no_employees.get());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if disabled.get_untracked() {
            return;
        }
        if let Some(payload) = form_state.to_payload() {
            on_submit.call(payload);
        }
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-gray-900">{"Mark Attendance"}</h2>
                <p class="text-sm text-gray-600">{"Record employee attendance for today or any date"}</p>
            </div>

            <form class="grid grid-cols-1 md:grid-cols-3 gap-4" on:submit=handle_submit>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Employee *"}</label>
                    <select
                        class="mt-1 w-full border rounded px-2 py-1"
                        required
                        prop:value=move || employee_id.get()
                        on:change=move |ev| employee_id.set(event_target_value(&ev))
                    >
                        <option value="">
                            {move || if no_employees.get() { "No employees available" } else { "Select employee" }}
                        </option>
                        <For
                            each=move || employees.get()
                            key=|employee| employee.employee_id.clone()
                            children=|employee| view! {
                                <option value=employee.employee_id.clone()>
                                    {format!("{} - {}", employee.employee_id, employee.full_name)}
                                </option>
                            }
                        />
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Date *"}</label>
                    <input
                        type="date"
                        class="mt-1 w-full border rounded px-2 py-1"
                        required
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Status *"}</label>
                    <select
                        class="mt-1 w-full border rounded px-2 py-1"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        <option value=AttendanceStatus::Present.as_str()>{"Present"}</option>
                        <option value=AttendanceStatus::Absent.as_str()>{"Absent"}</option>
                    </select>
                </div>
                <div class="md:col-span-3">
                    <button
                        type="submit"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || disabled.get()
                    >
                        {move || if submitting.get() { "Marking Attendance..." } else { "Mark Attendance" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_employees_as_id_name_options() {
        let html = render_to_string(move || {
            let form_state = AttendanceFormState::new();
            let employees = Signal::derive(|| vec![employee("EMP001", "Jane Doe")]);
            view! {
                <AttendanceFormSection
                    form_state=form_state
                    employees=employees
                    submitting=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Mark Attendance"));
        assert!(html.contains("EMP001 - Jane Doe"));
        assert!(html.contains("Select employee"));
        assert!(html.contains("Present"));
        assert!(html.contains("Absent"));
    }

    #[test]
    fn empty_roster_disables_the_form() {
        let html = render_to_string(move || {
            let form_state = AttendanceFormState::new();
            view! {
                <AttendanceFormSection
                    form_state=form_state
                    employees=Signal::derive(Vec::new)
                    submitting=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No employees available"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn submit_button_reflects_pending_state() {
        let html = render_to_string(move || {
            let form_state = AttendanceFormState::new();
            let employees = Signal::derive(|| vec![employee("EMP001", "Jane Doe")]);
            view! {
                <AttendanceFormSection
                    form_state=form_state
                    employees=employees
                    submitting=Signal::derive(|| true)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Marking Attendance..."));
    }
}
