use super::client::ApiClient;
use super::types::{ApiError, Employee, EmployeeCreate};

impl ApiClient {
    /// All employees, newest first as returned by the server.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = format!("{}/employees/", self.api_root().await);
        let response = self.send(self.http_client().get(url)).await?;
        self.decode_json(response).await
    }

    pub async fn create_employee(&self, payload: &EmployeeCreate) -> Result<Employee, ApiError> {
        let url = format!("{}/employees/", self.api_root().await);
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.decode_json(response).await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/employees/{}/", self.api_root().await, employee_id);
        let response = self.send(self.http_client().delete(url)).await?;
        self.expect_empty(response).await
    }
}
