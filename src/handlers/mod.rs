pub mod approval;
pub mod auth;
pub mod reporting;
pub mod submission;

// Re-export all handler functions for easy importing
pub use approval::*;
pub use auth::*;
pub use reporting::*;
pub use submission::*;

use actix_web::web;

use crate::models::ServiceError;

/// Registers every API route; shared by the server and the test harness.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies get the same envelope as every other failure
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        ServiceError::ValidationError(format!("Invalid request body: {}", err)).into()
    });

    cfg.app_data(json_config)
        .route("/api/login", web::post().to(login_api))
        .route("/api/logout", web::post().to(logout_api))
        .route("/api/time-adjustments", web::post().to(submit_time_adjustment_api))
        .route("/api/shift-swaps", web::post().to(submit_shift_swap_api))
        .route("/api/approvals/{kind}/pending", web::get().to(pending_api))
        .route("/api/approvals/{kind}/approve", web::post().to(approve_api))
        .route("/api/approved/{kind}", web::get().to(approved_api));
}
