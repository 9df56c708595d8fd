mod attendance;
pub mod client;
mod employees;
pub mod types;

pub use client::ApiClient;
pub use types::*;
