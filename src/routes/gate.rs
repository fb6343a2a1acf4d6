//! Request-filtering chain in front of the routes, applied in order:
//! locale resolution first, then the auth gate.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, Error, HttpResponse,
};

use crate::auth::{token_from_request, verify_session};
use crate::config::AppConfig;
use crate::locale::{
    is_api_path, is_protected_path, redirect_target, sign_in_path, split_locale, Locale,
};

/// Pass: `/api/*`, or any path whose first segment is a supported locale.
/// Reject: everything else, with a redirect onto the default locale.
pub async fn locale_handler<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody,
{
    let path = req.path().to_string();
    if is_api_path(&path) || split_locale(&path).0.is_some() {
        return Ok(next.call(req).await?.map_into_left_body());
    }

    let default_locale = config_of(&req).map(|c| c.default_locale).unwrap_or(Locale::En);
    let target = redirect_target(default_locale, &path, req.query_string());
    let res = HttpResponse::Found()
        .append_header((header::LOCATION, target))
        .finish()
        .map_into_right_body();
    Ok(req.into_response(res))
}

/// Pass: non-protected paths, and protected paths carrying a session token
/// that verifies. Reject: protected paths without one, redirected to the
/// locale's sign-in page. API paths are exempt; their handlers answer 401.
pub async fn auth_gate_handler<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody,
{
    let path = req.path().to_string();
    if is_api_path(&path) {
        return Ok(next.call(req).await?.map_into_left_body());
    }

    let (locale, page_path) = split_locale(&path);
    if !is_protected_path(page_path) {
        return Ok(next.call(req).await?.map_into_left_body());
    }

    let authenticated = match config_of(&req) {
        Some(config) => token_from_request(req.request(), &config)
            .and_then(|token| verify_session(&config, &token).ok())
            .is_some(),
        None => false,
    };
    if authenticated {
        return Ok(next.call(req).await?.map_into_left_body());
    }

    let default_locale = config_of(&req).map(|c| c.default_locale).unwrap_or(Locale::En);
    let target = sign_in_path(locale.unwrap_or(default_locale));
    let res = HttpResponse::Found()
        .append_header((header::LOCATION, target))
        .finish()
        .map_into_right_body();
    Ok(req.into_response(res))
}

fn config_of(req: &ServiceRequest) -> Option<AppConfig> {
    req.app_data::<web::Data<AppConfig>>()
        .map(|cfg| cfg.get_ref().clone())
}
