pub mod approval_service;
pub mod auth_service;
pub mod reporting_service;
pub mod submission_service;

pub use approval_service::*;
pub use auth_service::*;
pub use reporting_service::*;
pub use submission_service::*;
