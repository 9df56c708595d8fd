use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, Attendance, AttendanceCreate, AttendanceFilter, Employee,
};

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Roster and unfiltered records together; either failure fails the load.
    pub async fn fetch_overview(&self) -> Result<(Vec<Employee>, Vec<Attendance>), ApiError> {
        let filter = AttendanceFilter::default();
        futures::try_join!(
            self.client.list_employees(),
            self.client.list_attendance(&filter),
        )
    }

    pub async fn fetch_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<Attendance>, ApiError> {
        self.client.list_attendance(filter).await
    }

    pub async fn mark_attendance(
        &self,
        payload: AttendanceCreate,
    ) -> Result<Attendance, ApiError> {
        self.client.create_attendance(&payload).await
    }

    pub async fn remove_attendance(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_attendance(id).await
    }
}
