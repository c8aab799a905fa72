use anyhow::Context;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub jwt_secret: String,
    pub team_lead_password: String,
    pub manager_password: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a number between 0 and 65535")?;

        let bind_address = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", host, port))?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:shift_manager.db".to_string());

        // Without a configured secret, issued tokens only survive until restart
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            use rand::Rng;
            let mut rng = rand::thread_rng();
            let bytes: [u8; 32] = rng.gen();
            use base64::Engine;
            base64::engine::general_purpose::STANDARD.encode(bytes)
        });

        let team_lead_password =
            std::env::var("TEAM_LEAD_PASSWORD").unwrap_or_else(|_| "team_lead_pass".to_string());
        let manager_password =
            std::env::var("MANAGER_PASSWORD").unwrap_or_else(|_| "manager_pass".to_string());

        Ok(Self {
            database_url,
            bind_address,
            jwt_secret,
            team_lead_password,
            manager_password,
        })
    }
}
