//! Shared fixtures for the inline test modules.

use actix_web::web;
use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use serde::Serialize;

use crate::config::AppConfig;
use crate::entity::{feedback, resource, student};
use crate::locale::Locale;
use crate::seed::generate_public_id;

/// In-memory store with the production schema applied. A single pooled
/// connection keeps every query on the same sqlite memory instance.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .unwrap_or_else(|e| panic!("test db connect failed: {}", e));
    crate::db::init_schema(&db).await;
    db
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        sqlite_path: String::new(),
        database_url: Some("sqlite::memory:".to_string()),
        auth_jwt_secret: "test-secret".to_string(),
        session_cookie: "__session".to_string(),
        default_locale: Locale::En,
        instructor_email: "instructor@example.com".to_string(),
        instructor_phone: "555-0100".to_string(),
        mail_api_key: Some("re_test_key".to_string()),
        mail_api_url: "http://127.0.0.1:1/emails".to_string(),
        mail_from: "onboarding@resend.dev".to_string(),
        booking_url: String::new(),
        seed_demo: false,
    }
}

/// The `/api` surface as `main.rs` mounts it.
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .service(web::scope("/resources").configure(crate::routes::resource::config))
        .service(web::scope("/feedback").configure(crate::routes::feedback::config))
        .service(web::scope("/contact").configure(crate::routes::contact::config))
        .service(web::scope("/health").configure(crate::routes::health::config))
}

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: i64,
}

pub fn token_for(external_id: &str, secret: &str) -> String {
    token_with_exp(external_id, secret, Utc::now().timestamp() + 3600)
}

pub fn token_with_exp(external_id: &str, secret: &str, exp: i64) -> String {
    let claims = Claims {
        sub: external_id.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encode test token")
}

pub async fn insert_student(
    db: &DatabaseConnection,
    email: &str,
    external_id: Option<&str>,
) -> student::Model {
    let now = Utc::now();
    let model = student::ActiveModel {
        external_id: Set(external_id.map(|s| s.to_string())),
        email: Set(email.to_string()),
        display_name: Set(email.split('@').next().unwrap_or("student").to_string()),
        preferred_locale: Set(Some("en".to_string())),
        created: Set(Some(now)),
        updated: Set(Some(now)),
        ..Default::default()
    };
    model.insert(db).await.expect("insert student")
}

pub async fn insert_resource(
    db: &DatabaseConnection,
    student_id: i32,
    file_name: &str,
    created: DateTime<Utc>,
) -> resource::Model {
    let data = format!("contents of {}", file_name).into_bytes();
    let model = resource::ActiveModel {
        public_id: Set(generate_public_id()),
        student_id: Set(student_id),
        file_name: Set(file_name.to_string()),
        file_type: Set("application/octet-stream".to_string()),
        size: Set(data.len() as i64),
        file_data: Set(data),
        created: Set(Some(created)),
    };
    model.insert(db).await.expect("insert resource")
}

pub async fn insert_feedback(
    db: &DatabaseConnection,
    student_id: i32,
    content: &str,
    created: DateTime<Utc>,
) -> feedback::Model {
    let model = feedback::ActiveModel {
        student_id: Set(student_id),
        content: Set(content.to_string()),
        created: Set(Some(created)),
        ..Default::default()
    };
    model.insert(db).await.expect("insert feedback")
}
