use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use shift_desk::auth::JwtManager;
use shift_desk::config::AppConfig;
use shift_desk::database::initialize_database;
use shift_desk::handlers;
use shift_desk::openapi_config::{configure_openapi, ApiDoc};
use shift_desk::repositories::{SqliteShiftSwapRepository, SqliteTimeAdjustmentRepository};
use shift_desk::services::{ApprovalService, AuthService, ReportingService, SubmissionService};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = initialize_database(&config.database_url).await?;

    // Initialize repositories
    let time_adjustments = Arc::new(SqliteTimeAdjustmentRepository::new(pool.clone()));
    let shift_swaps = Arc::new(SqliteShiftSwapRepository::new(pool.clone()));

    // Initialize services with dependency injection
    let submission_service = web::Data::new(SubmissionService::new(
        time_adjustments.clone(),
        shift_swaps.clone(),
    ));
    let approval_service = web::Data::new(ApprovalService::new(
        time_adjustments.clone(),
        shift_swaps.clone(),
    ));
    let reporting_service = web::Data::new(ReportingService::new(time_adjustments, shift_swaps));
    let auth_service = web::Data::new(AuthService::new(
        config.team_lead_password.clone(),
        config.manager_password.clone(),
    ));
    let jwt_manager = web::Data::new(JwtManager::new(&config.jwt_secret));

    let openapi_spec = configure_openapi(ApiDoc::openapi());

    tracing::info!("Shift Desk listening on http://{}", config.bind_address);
    tracing::info!("API Documentation: http://{}/swagger-ui/", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(submission_service.clone())
            .app_data(approval_service.clone())
            .app_data(reporting_service.clone())
            .app_data(auth_service.clone())
            .app_data(jwt_manager.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
            )
            .wrap(Logger::default())
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            .configure(handlers::configure)
    })
    .bind(config.bind_address)?
    .run()
    .await?;

    Ok(())
}
