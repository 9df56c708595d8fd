use chrono::NaiveDate;
use leptos::*;

use crate::api::{AttendanceCreate, AttendanceFilter, AttendanceStatus};
use crate::utils::time::today_local;

/// Controlled inputs for the mark-attendance form. The date defaults to
/// today and survives a successful submit so consecutive entries for the
/// same day need no re-typing.
#[derive(Clone, Copy)]
pub struct AttendanceFormState {
    employee_id: RwSignal<String>,
    date: RwSignal<String>,
    status: RwSignal<String>,
}

impl AttendanceFormState {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            date: create_rw_signal(today_local().format("%Y-%m-%d").to_string()),
            status: create_rw_signal(AttendanceStatus::Present.as_str().to_string()),
        }
    }

    pub fn employee_id_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn date_signal(&self) -> RwSignal<String> {
        self.date
    }

    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    /// `None` when no employee is selected or the date/status inputs hold
    /// values the wire format does not accept.
    pub fn to_payload(&self) -> Option<AttendanceCreate> {
        let employee_id = self.employee_id.get_untracked();
        if employee_id.is_empty() {
            return None;
        }
        let date =
            NaiveDate::parse_from_str(self.date.get_untracked().trim(), "%Y-%m-%d").ok()?;
        let status = AttendanceStatus::parse(&self.status.get_untracked())?;
        Some(AttendanceCreate {
            employee_id,
            date,
            status,
        })
    }

    pub fn reset_after_submit(&self) {
        self.employee_id.set(String::new());
        self.status.set(AttendanceStatus::Present.as_str().to_string());
    }
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Controlled inputs for the filter bar. Values are passed to the server
/// verbatim, so a partial or malformed entry simply matches nothing.
#[derive(Clone, Copy)]
pub struct FilterFormState {
    employee_id: RwSignal<String>,
    date: RwSignal<String>,
}

impl FilterFormState {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
        }
    }

    pub fn employee_id_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn date_signal(&self) -> RwSignal<String> {
        self.date
    }

    pub fn to_filter(&self) -> AttendanceFilter {
        AttendanceFilter {
            employee_id: non_empty(self.employee_id.get_untracked()),
            date: non_empty(self.date.get_untracked()),
        }
    }

    pub fn clear(&self) {
        self.employee_id.set(String::new());
        self.date.set(String::new());
    }
}

impl Default for FilterFormState {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_defaults_to_today_and_present() {
        with_runtime(|| {
            let state = AttendanceFormState::new();
            assert_eq!(
                state.date_signal().get_untracked(),
                today_local().format("%Y-%m-%d").to_string()
            );
            assert_eq!(state.status_signal().get_untracked(), "Present");
            assert!(state.to_payload().is_none());
        });
    }

    #[test]
    fn payload_requires_a_parseable_date() {
        with_runtime(|| {
            let state = AttendanceFormState::new();
            state.employee_id_signal().set("EMP001".into());
            state.date_signal().set("not-a-date".into());
            assert!(state.to_payload().is_none());

            state.date_signal().set("2024-03-01".into());
            let payload = state.to_payload().unwrap();
            assert_eq!(payload.employee_id, "EMP001");
            assert_eq!(payload.status, AttendanceStatus::Present);
        });
    }

    #[test]
    fn reset_keeps_the_date_for_the_next_entry() {
        with_runtime(|| {
            let state = AttendanceFormState::new();
            state.employee_id_signal().set("EMP001".into());
            state.date_signal().set("2024-03-01".into());
            state.status_signal().set("Absent".into());

            state.reset_after_submit();

            assert!(state.employee_id_signal().get_untracked().is_empty());
            assert_eq!(state.date_signal().get_untracked(), "2024-03-01");
            assert_eq!(state.status_signal().get_untracked(), "Present");
        });
    }

    #[test]
    fn filter_maps_empty_inputs_to_no_constraint() {
        with_runtime(|| {
            let state = FilterFormState::new();
            assert!(state.to_filter().is_empty());

            state.employee_id_signal().set("EMP001".into());
            let filter = state.to_filter();
            assert_eq!(filter.employee_id.as_deref(), Some("EMP001"));
            assert!(filter.date.is_none());

            state.clear();
            assert!(state.to_filter().is_empty());
        });
    }
}
