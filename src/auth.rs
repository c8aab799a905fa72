use actix_web::HttpRequest;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

use crate::models::{Role, ServiceError, Session};

/// Sessions expire after a working shift.
pub const TOKEN_TTL_HOURS: i64 = 12;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (role label)
    pub role: Role,
    pub team: Option<String>,
    pub exp: usize, // Expiration time
    pub iat: usize, // Issued at
}

impl From<Claims> for Session {
    fn from(claims: Claims) -> Self {
        Session {
            role: claims.role,
            team_name: claims.team,
        }
    }
}

#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    pub fn generate_token(&self, session: &Session) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let expires_in = Duration::hours(TOKEN_TTL_HOURS);

        let claims = Claims {
            sub: session.role.to_string(),
            role: session.role,
            team: session.team_name.clone(),
            exp: (now + expires_in).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    pub fn verify_token(
        &self,
        token: &str,
    ) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
    }
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let auth_header = req
        .headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;

    // Swagger UI sometimes sends the scheme twice
    if let Some(token) = auth_header.strip_prefix("bearer ") {
        Some(token.to_string())
    } else {
        Some(auth_header.to_string())
    }
}

/// Decodes the bearer token of `req` into the session it was issued for.
pub fn verify_jwt(req: &HttpRequest, jwt_manager: &JwtManager) -> Result<Session, ServiceError> {
    let token = extract_token_from_header(req).ok_or_else(|| {
        ServiceError::AuthenticationError("Missing Authorization header".to_string())
    })?;

    match jwt_manager.verify_token(&token) {
        Ok(token_data) => Ok(Session::from(token_data.claims)),
        Err(_) => Err(ServiceError::AuthenticationError(
            "Invalid token".to_string(),
        )),
    }
}
