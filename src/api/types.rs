use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
}

/// Creation payload. `created_at` is assigned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Closed two-value status; the wire format is exactly "Present"/"Absent".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Present" => Some(Self::Present),
            "Absent" => Some(Self::Absent),
            _ => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One per-day presence entry. `employee_name` and `department` are
/// denormalized by the API for display and never sent by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: String,
    pub employee_name: String,
    #[serde(default)]
    pub department: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Query constraints for listing attendance. Values are forwarded to the
/// server verbatim; match semantics are entirely the server's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub employee_id: Option<String>,
    pub date: Option<String>,
}

impl AttendanceFilter {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none() && self.date.is_none()
    }
}

/// Validation payload as the backend emits it: a flat `message`/`detail`
/// string and/or per-field lists of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub non_field_errors: Vec<String>,
    #[serde(default)]
    pub employee_id: Vec<String>,
    #[serde(default)]
    pub email: Vec<String>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().or(self.detail.as_deref())
    }

    pub fn first_non_field_error(&self) -> Option<&str> {
        self.non_field_errors.first().map(String::as_str)
    }

    pub fn first_employee_id_error(&self) -> Option<&str> {
        self.employee_id.first().map(String::as_str)
    }

    pub fn first_email_error(&self) -> Option<&str> {
        self.email.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("server rejected the request (HTTP {status})")]
    Server { status: u16, body: ErrorBody },
}

impl ApiError {
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        self.body().and_then(ErrorBody::message)
    }

    /// Best human-readable description, falling back to the given text.
    pub fn description_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serializes_as_bare_strings() {
        assert_eq!(serde_json::to_value(AttendanceStatus::Present).unwrap(), json!("Present"));
        assert_eq!(serde_json::to_value(AttendanceStatus::Absent).unwrap(), json!("Absent"));
        assert_eq!(AttendanceStatus::parse("Absent"), Some(AttendanceStatus::Absent));
        assert_eq!(AttendanceStatus::parse("present"), None);
    }

    #[test]
    fn attendance_create_wire_shape() {
        let payload = AttendanceCreate {
            employee_id: "EMP001".into(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: AttendanceStatus::Present,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"employee_id": "EMP001", "date": "2024-03-01", "status": "Present"})
        );
    }

    #[test]
    fn error_body_prefers_message_over_detail() {
        let body: ErrorBody =
            serde_json::from_value(json!({"message": "boom", "detail": "fallback"})).unwrap();
        assert_eq!(body.message(), Some("boom"));

        let detail_only: ErrorBody = serde_json::from_value(json!({"detail": "Not found."})).unwrap();
        assert_eq!(detail_only.message(), Some("Not found."));
    }

    #[test]
    fn error_body_exposes_first_field_errors() {
        let body: ErrorBody = serde_json::from_value(json!({
            "non_field_errors": ["Attendance already marked for this date"],
            "employee_id": ["Employee does not exist", "second"],
            "email": ["Enter a valid email address."]
        }))
        .unwrap();
        assert_eq!(body.first_non_field_error(), Some("Attendance already marked for this date"));
        assert_eq!(body.first_employee_id_error(), Some("Employee does not exist"));
        assert_eq!(body.first_email_error(), Some("Enter a valid email address."));
    }

    #[test]
    fn description_falls_back_for_transport_errors() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.description_or("Please try again"), "Please try again");

        let server = ApiError::Server {
            status: 500,
            body: serde_json::from_value(json!({"message": "boom"})).unwrap(),
        };
        assert_eq!(server.description_or("Please try again"), "boom");
    }

    #[test]
    fn unknown_error_fields_are_ignored() {
        let body: ErrorBody =
            serde_json::from_value(json!({"full_name": ["required"], "message": "bad"})).unwrap();
        assert_eq!(body.message(), Some("bad"));
        assert!(body.first_employee_id_error().is_none());
    }
}
