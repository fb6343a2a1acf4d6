use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::config::AppConfig;
use crate::error::AppError;

/// Claims of an identity-provider session, resolved per request. Handlers
/// take this as an explicit argument; identity is never read from ambient
/// state.
#[derive(Clone, Debug)]
pub struct Session {
    pub external_id: String,
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let config = match req.app_data::<web::Data<AppConfig>>() {
            Some(cfg) => cfg.clone(),
            None => {
                return Box::pin(async { Err(AppError::internal().into()) });
            }
        };
        let token = token_from_request(req, &config);

        Box::pin(async move {
            let token = token.ok_or_else(AppError::unauthorized)?;
            let session = verify_session(&config, &token)?;
            Ok(session)
        })
    }
}

/// Bearer header first, then the provider's session cookie.
pub fn token_from_request(req: &HttpRequest, config: &AppConfig) -> Option<String> {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    req.cookie(&config.session_cookie)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

pub fn verify_session(config: &AppConfig, token: &str) -> Result<Session, AppError> {
    let key = DecodingKey::from_secret(config.auth_jwt_secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);
    let claims = decode::<serde_json::Value>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::unauthorized())?;

    let external_id = claims
        .get("sub")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(AppError::unauthorized)?;

    Ok(Session { external_id })
}
