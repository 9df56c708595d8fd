use super::client::ApiClient;
use super::types::{ApiError, Attendance, AttendanceCreate, AttendanceFilter};

impl ApiClient {
    /// Attendance records matching `filter`; pass the default filter for the
    /// unconstrained list. Only set constraints become query parameters.
    pub async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<Attendance>, ApiError> {
        let url = format!("{}/attendance/", self.api_root().await);

        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(employee_id) = filter.employee_id.as_deref() {
            params.push(("employee_id", employee_id));
        }
        if let Some(date) = filter.date.as_deref() {
            params.push(("date", date));
        }

        let mut request = self.http_client().get(url);
        if !params.is_empty() {
            request = request.query(&params);
        }

        let response = self.send(request).await?;
        self.decode_json(response).await
    }

    pub async fn create_attendance(
        &self,
        payload: &AttendanceCreate,
    ) -> Result<Attendance, ApiError> {
        let url = format!("{}/attendance/", self.api_root().await);
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.decode_json(response).await
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/attendance/{}/", self.api_root().await, id);
        let response = self.send(self.http_client().delete(url)).await?;
        self.expect_empty(response).await
    }
}
