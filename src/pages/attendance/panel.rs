use leptos::*;

use super::{
    components::{filter::FilterSection, form::AttendanceFormSection, table::AttendanceTableSection},
    layout::AttendanceFrame,
    view_model::use_attendance_view_model,
};
use crate::components::{confirm_dialog::ConfirmDialog, layout::LoadingIndicator};

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! { <AttendancePanel /> }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();

    let loading = vm.load_resource.loading();
    let employees = Signal::derive(move || vm.employees.get());
    let records = Signal::derive(move || vm.records.get());
    let total = Signal::derive(move || vm.records.get().len());
    let submitting = vm.submit_action.pending();
    let deleting = Signal::derive(move || vm.deleting.get());

    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());

    let apply = vm.on_apply_filters();
    let clear = vm.on_clear_filters();

    view! {
        <AttendanceFrame>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">{"Attendance Management"}</h1>
                    <p class="text-sm text-gray-500">
                        {move || format!("Total Records: {}", total.get())}
                    </p>
                </div>

                <AttendanceFormSection
                    form_state=vm.form_state
                    employees=employees
                    submitting={submitting.into()}
                    on_submit=Callback::new(vm.on_submit())
                />

                <FilterSection
                    filter_state=vm.filter_state
                    on_apply=Callback::new(move |_| apply(()))
                    on_clear=Callback::new(move |_| clear(()))
                />

                <div class="space-y-3">
                    <h2 class="text-lg font-medium text-gray-900">{"Attendance Records"}</h2>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <LoadingIndicator label="Loading attendance..." /> }
                    >
                        <AttendanceTableSection
                            records=records
                            deleting=deleting
                            on_request_delete=Callback::new(vm.on_request_delete())
                        />
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                is_open=dialog_open
                title="Delete Attendance Record"
                message="Are you sure you want to delete this attendance record?"
                on_confirm=Callback::new(vm.on_confirm_delete())
                on_cancel=Callback::new(vm.on_cancel_delete())
                confirm_label="Delete"
                destructive=true
            />
        </AttendanceFrame>
    }
}
