#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::api::{Attendance, AttendanceStatus, Employee};

    pub fn employee(id: &str, name: &str) -> Employee {
        Employee {
            employee_id: id.into(),
            full_name: name.into(),
            email: format!("{}@example.com", id.to_lowercase()),
            department: "Engineering".into(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        }
    }

    pub fn attendance(id: i64, employee_id: &str, status: AttendanceStatus) -> Attendance {
        Attendance {
            id,
            employee_id: employee_id.into(),
            employee_name: "Jane Doe".into(),
            department: Some("Engineering".into()),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        }
    }
}
