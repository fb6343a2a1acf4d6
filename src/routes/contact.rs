use actix_web::{web, HttpResponse};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::mailer::{escape_html, Mailer};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(submit)));
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

#[derive(Deserialize)]
struct ContactRequest {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

#[derive(Serialize)]
struct ContactResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

struct ContactFields {
    name: String,
    email: String,
    subject: String,
    message: String,
}

fn validate(payload: &ContactRequest) -> Result<ContactFields, AppError> {
    let required = |v: &Option<String>| {
        v.clone()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::validation("All fields are required"))
    };
    let fields = ContactFields {
        name: required(&payload.name)?,
        email: required(&payload.email)?,
        subject: required(&payload.subject)?,
        message: required(&payload.message)?,
    };

    if !EMAIL_RE.is_match(&fields.email) {
        return Err(AppError::validation("Invalid email format"));
    }
    Ok(fields)
}

fn notification_html(config: &AppConfig, fields: &ContactFields) -> String {
    format!(
        "<div><h2>New Contact Form Submission</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Subject:</strong> {}</p>\
         <p><strong>Message:</strong></p><p>{}</p>\
         <hr><p>Contact: {} | {}</p></div>",
        escape_html(&fields.name),
        escape_html(&fields.email),
        escape_html(&fields.subject),
        escape_html(&fields.message),
        escape_html(&config.instructor_email),
        escape_html(&config.instructor_phone),
    )
}

async fn submit(
    config: web::Data<AppConfig>,
    mailer: web::Data<Mailer>,
    payload: web::Json<ContactRequest>,
) -> Result<HttpResponse, AppError> {
    let fields = validate(&payload)?;

    if !mailer.is_configured() {
        warn!("mail API key not configured, contact email not sent");
        return Ok(HttpResponse::Ok().json(ContactResponse {
            success: true,
            warning: Some("Email service not configured".to_string()),
        }));
    }

    let subject = format!("Contact Form: {}", fields.subject);
    let html = notification_html(&config, &fields);
    mailer
        .send(&config.instructor_email, &subject, &html)
        .await
        .map_err(|_| AppError::fail("Failed to send message"))?;

    Ok(HttpResponse::Ok().json(ContactResponse {
        success: true,
        warning: None,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};

    use super::*;
    use crate::test_util::{api_scope, test_config, test_db};

    #[::core::prelude::v1::test]
    fn email_pattern_matches_the_basic_shape() {
        assert!(EMAIL_RE.is_match("alice@example.com"));
        assert!(EMAIL_RE.is_match("a.b+c@mail.co.uk"));
        assert!(!EMAIL_RE.is_match("not-an-email"));
        assert!(!EMAIL_RE.is_match("missing@dot"));
        assert!(!EMAIL_RE.is_match("spaces in@example.com"));
        assert!(!EMAIL_RE.is_match("@example.com"));
    }

    #[actix_web::test]
    async fn rejects_missing_fields() {
        let db = test_db().await;
        let mailer = Mailer::from_config(&test_config());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .app_data(web::Data::new(db))
                .app_data(web::Data::new(mailer))
                .service(api_scope()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "Alice",
                "email": "alice@example.com",
                "subject": "Lessons"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "All fields are required");
    }

    #[actix_web::test]
    async fn rejects_empty_field() {
        let db = test_db().await;
        let mailer = Mailer::from_config(&test_config());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .app_data(web::Data::new(db))
                .app_data(web::Data::new(mailer))
                .service(api_scope()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "",
                "email": "alice@example.com",
                "subject": "Lessons",
                "message": "Hello"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "All fields are required");
    }

    #[actix_web::test]
    async fn rejects_malformed_email() {
        let db = test_db().await;
        let mailer = Mailer::from_config(&test_config());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .app_data(web::Data::new(db))
                .app_data(web::Data::new(mailer))
                .service(api_scope()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "Alice",
                "email": "not-an-email",
                "subject": "Lessons",
                "message": "Hello"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid email format");
    }

    #[actix_web::test]
    async fn succeeds_with_warning_when_mail_unconfigured() {
        let db = test_db().await;
        let mut config = test_config();
        config.mail_api_key = None;
        let mailer = Mailer::from_config(&config);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .app_data(web::Data::new(db))
                .app_data(web::Data::new(mailer))
                .service(api_scope()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "Alice",
                "email": "alice@example.com",
                "subject": "Lessons",
                "message": "I would like to book a lesson."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["warning"], "Email service not configured");
    }

    #[::core::prelude::v1::test]
    fn notification_escapes_user_input() {
        let config = test_config();
        let fields = ContactFields {
            name: "<script>".to_string(),
            email: "a@b.co".to_string(),
            subject: "x & y".to_string(),
            message: "hi".to_string(),
        };
        let html = notification_html(&config, &fields);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("x &amp; y"));
        assert!(!html.contains("<script>"));
    }
}
