use std::rc::Rc;

use leptos::*;

use crate::api::{
    ApiClient, ApiError, Attendance, AttendanceCreate, AttendanceFilter, Employee,
};
use crate::components::toast::{use_toasts, Toasts};

use super::{
    repository::AttendanceRepository,
    utils::{AttendanceFormState, FilterFormState},
};

/// Resource key for the attendance list. The token forces a refetch even
/// when the filter itself is unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub filter: AttendanceFilter,
    token: u32,
}

impl AttendanceQuery {
    pub fn with_filter(&self, filter: AttendanceFilter) -> Self {
        Self {
            filter,
            token: self.token.wrapping_add(1),
        }
    }

    pub fn cleared(&self) -> Self {
        Self {
            filter: AttendanceFilter::default(),
            token: self.token.wrapping_add(1),
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.filter.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub employees: RwSignal<Vec<Employee>>,
    pub records: RwSignal<Vec<Attendance>>,
    pub form_state: AttendanceFormState,
    pub filter_state: FilterFormState,
    pub query: RwSignal<AttendanceQuery>,
    pub load_resource: Resource<AttendanceQuery, Result<(), ApiError>>,
    pub submit_action: Action<AttendanceCreate, Result<Attendance, ApiError>>,
    pub delete_action: Action<i64, Result<i64, ApiError>>,
    pub pending_delete: RwSignal<Option<i64>>,
    pub deleting: RwSignal<Option<i64>>,
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let employees = create_rw_signal(Vec::<Employee>::new());
    let records = create_rw_signal(Vec::<Attendance>::new());
    let form_state = AttendanceFormState::new();
    let filter_state = FilterFormState::new();
    let query = create_rw_signal(AttendanceQuery::default());
    let pending_delete = create_rw_signal(None::<i64>);
    let deleting = create_rw_signal(None::<i64>);

    let repo_for_resource = repository.clone();
    let load_resource = create_resource(
        move || query.get(),
        move |current| {
            let repo = repo_for_resource.clone();
            async move {
                if current.is_filtered() {
                    match repo.fetch_attendance(&current.filter).await {
                        Ok(list) => {
                            records.set(list);
                            Ok(())
                        }
                        Err(err) => {
                            toasts.error(
                                "Failed to filter attendance",
                                Some("Please try again".into()),
                            );
                            Err(err)
                        }
                    }
                } else {
                    match repo.fetch_overview().await {
                        Ok((roster, list)) => {
                            employees.set(roster);
                            records.set(list);
                            Ok(())
                        }
                        Err(err) => {
                            toasts.error(
                                "Failed to fetch data",
                                Some(err.description_or("Please try again")),
                            );
                            Err(err)
                        }
                    }
                }
            }
        },
    );

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |payload: &AttendanceCreate| {
        let repo = repo_for_submit.clone();
        let payload = payload.clone();
        async move { repo.mark_attendance(payload).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.remove_attendance(id).await.map(|_| id) }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            apply_submit_outcome(toasts, form_state, query, result);
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            deleting.set(None);
            match result {
                Ok(id) => {
                    records.update(|list| list.retain(|record| record.id != id));
                    toasts.success("Attendance record deleted successfully", None);
                }
                Err(err) => {
                    toasts.error(
                        "Failed to delete attendance record",
                        Some(err.description_or("Please try again")),
                    );
                }
            }
        }
    });

    AttendanceViewModel {
        employees,
        records,
        form_state,
        filter_state,
        query,
        load_resource,
        submit_action,
        delete_action,
        pending_delete,
        deleting,
    }
}

impl AttendanceViewModel {
    pub fn on_submit(&self) -> impl Fn(AttendanceCreate) + Copy {
        let submit_action = self.submit_action;
        move |payload| submit_action.dispatch(payload)
    }

    pub fn on_apply_filters(&self) -> impl Fn(()) + Copy {
        let query = self.query;
        let filter_state = self.filter_state;
        move |_| {
            let filter = filter_state.to_filter();
            query.update(|current| *current = current.with_filter(filter));
        }
    }

    pub fn on_clear_filters(&self) -> impl Fn(()) + Copy {
        let query = self.query;
        let filter_state = self.filter_state;
        move |_| {
            filter_state.clear();
            query.update(|current| *current = current.cleared());
        }
    }

    pub fn on_request_delete(&self) -> impl Fn(i64) + Copy {
        let pending_delete = self.pending_delete;
        move |id| pending_delete.set(Some(id))
    }

    pub fn on_confirm_delete(&self) -> impl Fn(()) + Copy {
        let view_model = *self;
        move |_| {
            if let Some(id) = view_model.pending_delete.get_untracked() {
                view_model.pending_delete.set(None);
                view_model.deleting.set(Some(id));
                view_model.delete_action.dispatch(id);
            }
        }
    }

    pub fn on_cancel_delete(&self) -> impl Fn(()) + Copy {
        let pending_delete = self.pending_delete;
        move |_| pending_delete.set(None)
    }
}

/// The draft clears either way (keeping the date for the next entry); a
/// success additionally drops any filter and refetches both lists.
fn apply_submit_outcome(
    toasts: Toasts,
    form_state: AttendanceFormState,
    query: RwSignal<AttendanceQuery>,
    result: Result<Attendance, ApiError>,
) {
    form_state.reset_after_submit();
    match result {
        Ok(record) => {
            toasts.success(
                "Attendance marked successfully",
                Some(format!("{} - {}", record.employee_id, record.status)),
            );
            query.update(|current| *current = current.cleared());
        }
        Err(err) => {
            toasts.error(
                "Failed to mark attendance",
                mark_attendance_error_description(&err),
            );
        }
    }
}

/// Duplicate-day rejections arrive as non-field errors, unknown employees
/// as field errors; either wins over the generic fallback.
fn mark_attendance_error_description(err: &ApiError) -> Option<String> {
    let body = err.body()?;
    body.first_non_field_error()
        .or_else(|| body.first_employee_id_error())
        .or_else(|| body.message())
        .map(str::to_string)
}
