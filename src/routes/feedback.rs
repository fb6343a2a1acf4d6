use actix_web::{web, HttpResponse};
use log::error;
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::auth::Session;
use crate::error::AppError;
use crate::repo;
use crate::routes::resource::{resolve_student, to_rfc3339};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_feedback)));
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedbackDto {
    id: i32,
    content: String,
    created_at: Option<String>,
}

#[derive(Serialize)]
struct ListFeedbackResponse {
    feedback: Vec<FeedbackDto>,
}

async fn list_feedback(
    db: web::Data<DatabaseConnection>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let student = resolve_student(db.get_ref(), &session).await?;

    let feedback = repo::list_feedback_for_student(db.get_ref(), student.id)
        .await
        .map_err(|e| {
            error!("list feedback failed: {}", e);
            AppError::internal()
        })?;

    let feedback = feedback
        .into_iter()
        .map(|f| FeedbackDto {
            id: f.id,
            content: f.content,
            created_at: f.created.map(to_rfc3339),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ListFeedbackResponse { feedback }))
}
