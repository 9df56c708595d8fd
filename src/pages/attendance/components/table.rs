use leptos::*;

use crate::api::{Attendance, AttendanceStatus};
use crate::components::empty_state::EmptyState;
use crate::utils::time::format_display_date;

#[component]
fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    let badge_class = if status.is_present() {
        "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold bg-green-600 text-white"
    } else {
        "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold bg-red-600 text-white"
    };
    view! { <span class=badge_class>{status.as_str()}</span> }
}

#[component]
pub fn AttendanceTableSection(
    records: Signal<Vec<Attendance>>,
    deleting: Signal<Option<i64>>,
    on_request_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !records.get().is_empty()
            fallback=|| view! {
                <EmptyState
                    title="No attendance records found"
                    description="Mark attendance to see records here"
                />
            }
        >
            <div class="bg-white shadow rounded-lg overflow-hidden">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Employee"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Department"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Date"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || records.get()
                            key=|record| record.id
                            children=move |record| {
                                let record_id = record.id;
                                let is_deleting =
                                    Signal::derive(move || deleting.get() == Some(record_id));
                                view! {
                                    <tr>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="text-sm font-medium text-gray-900">{record.employee_name.clone()}</div>
                                            <div class="text-sm text-gray-500">{record.employee_id.clone()}</div>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            {record.department.clone().unwrap_or_else(|| "N/A".to_string())}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            {format_display_date(record.date)}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <StatusBadge status=record.status />
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm">
                                            <button
                                                type="button"
                                                class="text-red-600 hover:text-red-800 font-medium disabled:opacity-50"
                                                disabled=move || is_deleting.get()
                                                on:click=move |_| on_request_delete.call(record_id)
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
    use crate::test_support::helpers::attendance;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_badges_and_display_dates() {
        let html = render_to_string(move || {
            let records = Signal::derive(|| {
                vec![
                    attendance(1, "EMP001", AttendanceStatus::Present),
                    attendance(2, "EMP002", AttendanceStatus::Absent),
                ]
            });
            view! {
                <AttendanceTableSection
                    records=records
                    deleting=Signal::derive(|| None)
                    on_request_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("bg-green-600"));
        assert!(html.contains("bg-red-600"));
        assert!(html.contains("Mar 01, 2024"));
        assert!(html.contains("EMP001"));
    }

    #[test]
    fn missing_department_renders_as_na() {
        let html = render_to_string(move || {
            let records = Signal::derive(|| {
                let mut record = attendance(1, "EMP001", AttendanceStatus::Present);
                record.department = None;
                vec![record]
            });
            view! {
                <AttendanceTableSection
                    records=records
                    deleting=Signal::derive(|| None)
                    on_request_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("N/A"));
    }

    #[test]
    fn shows_the_empty_state_without_records() {
        let html = render_to_string(move || {
            view! {
                <AttendanceTableSection
                    records=Signal::derive(Vec::new)
                    deleting=Signal::derive(|| None)
                    on_request_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No attendance records found"));
        assert!(html.contains("Mark attendance to see records here"));
    }

    #[test]
    fn row_being_deleted_shows_progress_label() {
        let html = render_to_string(move || {
            let records = Signal::derive(|| vec![attendance(7, "EMP001", AttendanceStatus::Present)]);
            view! {
                <AttendanceTableSection
                    records=records
                    deleting=Signal::derive(|| Some(7))
                    on_request_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Deleting..."));
    }
}
