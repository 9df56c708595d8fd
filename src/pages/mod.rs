pub mod attendance;
pub mod employees;
pub mod home;

pub use attendance::AttendancePage;
pub use employees::EmployeesPage;
pub use home::HomePage;
