use std::time::Instant;

use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, Utc};
use log::error;
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::repo;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(health)));
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    timestamp: String,
    response_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

async fn health(db: web::Data<DatabaseConnection>) -> HttpResponse {
    let start = Instant::now();

    match repo::ping(db.get_ref()).await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy",
            database: "connected",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            response_time: format!("{}ms", start.elapsed().as_millis()),
            error: None,
        }),
        Err(e) => {
            error!("health check failed: {}", e);
            HttpResponse::InternalServerError().json(HealthResponse {
                status: "unhealthy",
                database: "disconnected",
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                response_time: format!("{}ms", start.elapsed().as_millis()),
                error: Some(e.to_string()),
            })
        }
    }
}
