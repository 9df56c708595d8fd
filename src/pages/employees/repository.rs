use std::rc::Rc;

use crate::api::{ApiClient, ApiError, Employee, EmployeeCreate};

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn add_employee(&self, payload: EmployeeCreate) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn remove_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        self.client.delete_employee(employee_id).await
    }
}
