use leptos::*;

use super::{
    components::{form::EmployeeFormSection, list::EmployeeListSection},
    layout::EmployeesFrame,
    view_model::use_employees_view_model,
};
use crate::components::{confirm_dialog::ConfirmDialog, layout::LoadingIndicator};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! { <EmployeesPanel /> }
}

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();

    let loading = vm.roster_resource.loading();
    let employees = Signal::derive(move || vm.employees.get());
    let total = Signal::derive(move || vm.employees.get().len());
    let submitting = vm.submit_action.pending();
    let deleting = Signal::derive(move || vm.deleting.get());

    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let dialog_message = Signal::derive(move || {
        format!(
            "Are you sure you want to delete employee {}?",
            vm.pending_delete.get().unwrap_or_default()
        )
    });

    view! {
        <EmployeesFrame>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">{"Employee Management"}</h1>
                    <p class="text-sm text-gray-500">
                        {move || format!("Total Employees: {}", total.get())}
                    </p>
                </div>

                <EmployeeFormSection
                    form_state=vm.form_state
                    submitting={submitting.into()}
                    on_submit=Callback::new(vm.on_submit())
                />

                <div class="space-y-3">
                    <h2 class="text-lg font-medium text-gray-900">{"All Employees"}</h2>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <LoadingIndicator label="Loading employees..." /> }
                    >
                        <EmployeeListSection
                            employees=employees
                            deleting=deleting
                            on_request_delete=Callback::new(vm.on_request_delete())
                        />
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                is_open=dialog_open
                title="Delete Employee"
                message=dialog_message
                on_confirm=Callback::new(vm.on_confirm_delete())
                on_cancel=Callback::new(vm.on_cancel_delete())
                confirm_label="Delete"
                destructive=true
            />
        </EmployeesFrame>
    }
}
