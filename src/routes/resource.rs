use actix_web::{http::header, web, HttpResponse};
use chrono::SecondsFormat;
use log::error;
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::auth::Session;
use crate::entity::student;
use crate::error::AppError;
use crate::repo;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_resources)))
        .service(web::resource("/{id}").route(web::get().to(download_resource)));
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceDto {
    id: String,
    filename: String,
    mime_type: String,
    file_size: i64,
    created_at: Option<String>,
}

#[derive(Serialize)]
struct ListResourcesResponse {
    resources: Vec<ResourceDto>,
}

async fn list_resources(
    db: web::Data<DatabaseConnection>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let student = resolve_student(db.get_ref(), &session).await?;

    let resources = repo::list_resources_for_student(db.get_ref(), student.id)
        .await
        .map_err(|e| {
            error!("list resources failed: {}", e);
            AppError::internal()
        })?;

    let resources = resources
        .into_iter()
        .map(|r| ResourceDto {
            id: r.public_id,
            filename: r.file_name,
            mime_type: r.file_type,
            file_size: r.size,
            created_at: r.created.map(to_rfc3339),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ListResourcesResponse { resources }))
}

async fn download_resource(
    db: web::Data<DatabaseConnection>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let student = resolve_student(db.get_ref(), &session).await?;

    let public_id = path.into_inner();
    let resource = repo::find_resource(db.get_ref(), &public_id)
        .await
        .map_err(|e| {
            error!("fetch resource failed: {}", e);
            AppError::internal()
        })?
        .ok_or_else(|| AppError::not_found("Resource not found"))?;

    // A resource must never be served to a student who does not own it.
    if resource.student_id != student.id {
        return Err(AppError::forbidden());
    }

    Ok(HttpResponse::Ok()
        .content_type(resource.file_type)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", resource.file_name),
        ))
        .body(resource.file_data))
}

pub(super) async fn resolve_student(
    db: &DatabaseConnection,
    session: &Session,
) -> Result<student::Model, AppError> {
    repo::find_student_by_external_id(db, &session.external_id)
        .await
        .map_err(|e| {
            error!("student lookup failed: {}", e);
            AppError::internal()
        })?
        .ok_or_else(|| AppError::not_found("Student not found"))
}

pub(super) fn to_rfc3339(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, false)
}
