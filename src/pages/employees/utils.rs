use leptos::*;

use crate::api::EmployeeCreate;

/// Controlled inputs for the add-employee form. All four fields are
/// required; emptiness is enforced by the browser's `required` attribute.
#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    employee_id: RwSignal<String>,
    full_name: RwSignal<String>,
    email: RwSignal<String>,
    department: RwSignal<String>,
}

impl EmployeeFormState {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
        }
    }

    pub fn employee_id_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn full_name_signal(&self) -> RwSignal<String> {
        self.full_name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn department_signal(&self) -> RwSignal<String> {
        self.department
    }

    pub fn to_payload(&self) -> EmployeeCreate {
        EmployeeCreate {
            employee_id: self.employee_id.get_untracked(),
            full_name: self.full_name.get_untracked(),
            email: self.email.get_untracked(),
            department: self.department.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.employee_id.set(String::new());
        self.full_name.set(String::new());
        self.email.set(String::new());
        self.department.set(String::new());
    }
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self::new()
    }
}
