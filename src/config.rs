use std::env;

use crate::locale::Locale;

#[derive(Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub sqlite_path: String,
    pub database_url: Option<String>,
    pub auth_jwt_secret: String,
    pub session_cookie: String,
    pub default_locale: Locale,
    pub instructor_email: String,
    pub instructor_phone: String,
    pub mail_api_key: Option<String>,
    pub mail_api_url: String,
    pub mail_from: String,
    pub booking_url: String,
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);

        let sqlite_path =
            env::var("SQLITE_PATH").unwrap_or_else(|_| "/opt/chesscoach/data.sqlite".to_string());
        let database_url = env::var("DATABASE_URL").ok();

        let auth_jwt_secret = env::var("AUTH_JWT_SECRET")
            .or_else(|_| env::var("JWT_SECRET"))
            .unwrap_or_else(|_| "dev-only-secret".to_string());

        let session_cookie =
            env::var("SESSION_COOKIE").unwrap_or_else(|_| "__session".to_string());

        let default_locale = env::var("DEFAULT_LOCALE")
            .ok()
            .and_then(|v| Locale::parse(&v))
            .unwrap_or(Locale::En);

        let instructor_email =
            env::var("INSTRUCTOR_EMAIL").unwrap_or_else(|_| "instructor@example.com".to_string());
        let instructor_phone = env::var("INSTRUCTOR_PHONE").unwrap_or_default();

        let mail_api_key = env::var("RESEND_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let mail_api_url = env::var("MAIL_API_URL")
            .unwrap_or_else(|_| "https://api.resend.com/emails".to_string());
        let mail_from =
            env::var("MAIL_FROM").unwrap_or_else(|_| "onboarding@resend.dev".to_string());

        let booking_url = env::var("BOOKING_URL").unwrap_or_default();

        let seed_demo = env::var("SEED_DEMO_DATA")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            server_port,
            sqlite_path,
            database_url,
            auth_jwt_secret,
            session_cookie,
            default_locale,
            instructor_email,
            instructor_phone,
            mail_api_key,
            mail_api_url,
            mail_from,
            booking_url,
            seed_demo,
        }
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        let path = self.sqlite_path.trim();
        if path.starts_with("sqlite:") || path.starts_with("file:") {
            return path.to_string();
        }
        format!("sqlite://{}", path)
    }
}
