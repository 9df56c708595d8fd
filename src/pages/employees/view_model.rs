use std::rc::Rc;

use leptos::*;

use crate::api::{ApiClient, ApiError, Employee, EmployeeCreate};
use crate::components::toast::{use_toasts, Toasts};

use super::{repository::EmployeesRepository, utils::EmployeeFormState};

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees: RwSignal<Vec<Employee>>,
    pub form_state: EmployeeFormState,
    pub roster_resource: Resource<(), Result<(), ApiError>>,
    pub submit_action: Action<EmployeeCreate, Result<Employee, ApiError>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub deleting: RwSignal<Option<String>>,
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let employees = create_rw_signal(Vec::<Employee>::new());
    let form_state = EmployeeFormState::new();
    let pending_delete = create_rw_signal(None::<String>);
    let deleting = create_rw_signal(None::<String>);

    // Fetched once at mount; creates and deletes patch the signal locally.
    let repo_for_resource = repository.clone();
    let roster_resource = create_resource(
        || (),
        move |_| {
            let repo = repo_for_resource.clone();
            async move {
                match repo.fetch_employees().await {
                    Ok(list) => {
                        employees.set(list);
                        Ok(())
                    }
                    Err(err) => {
                        toasts.error(
                            "Failed to fetch employees",
                            Some(err.description_or("Please try again")),
                        );
                        Err(err)
                    }
                }
            }
        },
    );

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |payload: &EmployeeCreate| {
        let repo = repo_for_submit.clone();
        let payload = payload.clone();
        async move { repo.add_employee(payload).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |employee_id: &String| {
        let repo = repo_for_delete.clone();
        let employee_id = employee_id.clone();
        async move { repo.remove_employee(&employee_id).await.map(|_| employee_id) }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            apply_submit_outcome(toasts, form_state, employees, result);
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            deleting.set(None);
            match result {
                Ok(employee_id) => {
                    employees.update(|list| {
                        list.retain(|employee| employee.employee_id != employee_id)
                    });
                    toasts.success(
                        "Employee deleted successfully",
                        Some(format!("{} has been removed", employee_id)),
                    );
                }
                Err(err) => {
                    toasts.error(
                        "Failed to delete employee",
                        Some(err.description_or("Please try again")),
                    );
                }
            }
        }
    });

    EmployeesViewModel {
        employees,
        form_state,
        roster_resource,
        submit_action,
        delete_action,
        pending_delete,
        deleting,
    }
}

impl EmployeesViewModel {
    pub fn on_submit(&self) -> impl Fn(EmployeeCreate) + Copy {
        let submit_action = self.submit_action;
        move |payload| submit_action.dispatch(payload)
    }

    pub fn on_request_delete(&self) -> impl Fn(String) + Copy {
        let pending_delete = self.pending_delete;
        move |employee_id| pending_delete.set(Some(employee_id))
    }

    pub fn on_confirm_delete(&self) -> impl Fn(()) + Copy {
        let view_model = *self;
        move |_| {
            if let Some(employee_id) = view_model.pending_delete.get_untracked() {
                view_model.pending_delete.set(None);
                view_model.deleting.set(Some(employee_id.clone()));
                view_model.delete_action.dispatch(employee_id);
            }
        }
    }

    pub fn on_cancel_delete(&self) -> impl Fn(()) + Copy {
        let pending_delete = self.pending_delete;
        move |_| pending_delete.set(None)
    }
}

/// The draft clears whether or not the server accepted it; only the
/// outcome toast and the local roster patch depend on the result.
fn apply_submit_outcome(
    toasts: Toasts,
    form_state: EmployeeFormState,
    employees: RwSignal<Vec<Employee>>,
    result: Result<Employee, ApiError>,
) {
    form_state.reset();
    match result {
        Ok(employee) => {
            toasts.success(
                "Employee added successfully",
                Some(format!("{} - {}", employee.employee_id, employee.full_name)),
            );
            employees.update(|list| list.insert(0, employee));
        }
        Err(err) => {
            toasts.error("Failed to add employee", add_employee_error_description(&err));
        }
    }
}

/// Validation messages win over the generic fallback, employee id first.
fn add_employee_error_description(err: &ApiError) -> Option<String> {
    let body = err.body()?;
    body.first_employee_id_error()
        .or_else(|| body.first_email_error())
        .or_else(|| body.message())
        .map(str::to_string)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::toast::ToastLevel;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;

    fn server_error(body: serde_json::Value) -> ApiError {
        ApiError::Server {
            status: 400,
            body: serde_json::from_value(body).unwrap(),
        }
    }

    fn filled_form() -> EmployeeFormState {
        let form_state = EmployeeFormState::new();
        form_state.employee_id_signal().set("EMP001".into());
        form_state.full_name_signal().set("Jane Doe".into());
        form_state.email_signal().set("jane@example.com".into());
        form_state.department_signal().set("Engineering".into());
        form_state
    }

    #[test]
    fn accepted_submit_clears_the_draft_and_prepends() {
        with_runtime(|| {
            let toasts = Toasts::new();
            let form_state = filled_form();
            let employees = create_rw_signal(Vec::new());

            apply_submit_outcome(toasts, form_state, employees, Ok(employee("EMP001", "Jane Doe")));

            assert!(form_state.employee_id_signal().get_untracked().is_empty());
            assert_eq!(employees.get_untracked().len(), 1);
            let items = toasts.items().get_untracked();
            assert_eq!(items[0].level, ToastLevel::Success);
        });
    }

    #[test]
    fn rejected_submit_still_clears_the_draft() {
        with_runtime(|| {
            let toasts = Toasts::new();
            let form_state = filled_form();
            let employees = create_rw_signal(Vec::new());
            let err = server_error(json!({"email": ["Enter a valid email address."]}));

            apply_submit_outcome(toasts, form_state, employees, Err(err));

            assert!(form_state.employee_id_signal().get_untracked().is_empty());
            assert!(form_state.full_name_signal().get_untracked().is_empty());
            assert!(form_state.email_signal().get_untracked().is_empty());
            assert!(form_state.department_signal().get_untracked().is_empty());
            assert!(employees.get_untracked().is_empty());
            let items = toasts.items().get_untracked();
            assert_eq!(items[0].level, ToastLevel::Error);
            assert_eq!(items[0].description.as_deref(), Some("Enter a valid email address."));
        });
    }

    #[test]
    fn duplicate_id_message_wins_over_email_message() {
        let err = server_error(json!({
            "employee_id": ["employee with this employee id already exists."],
            "email": ["Enter a valid email address."]
        }));
        assert_eq!(
            add_employee_error_description(&err).as_deref(),
            Some("employee with this employee id already exists.")
        );
    }

    #[test]
    fn email_message_used_when_no_id_message() {
        let err = server_error(json!({"email": ["Enter a valid email address."]}));
        assert_eq!(
            add_employee_error_description(&err).as_deref(),
            Some("Enter a valid email address.")
        );
    }

    #[test]
    fn transport_errors_have_no_description() {
        let err = ApiError::Transport("connection refused".into());
        assert!(add_employee_error_description(&err).is_none());
    }
}
