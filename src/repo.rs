//! Repository functions per entity. Ownership filters are part of the query
//! itself; nothing here returns rows that the caller still has to narrow by
//! student.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, Statement,
};

use crate::entity::{feedback, resource, student};

/// Metadata projection for resource listings. `file_data` never leaves the
/// store on this path.
#[derive(Debug, FromQueryResult)]
pub struct ResourceMeta {
    pub public_id: String,
    pub file_name: String,
    pub file_type: String,
    pub size: i64,
    pub created: Option<chrono::DateTime<chrono::Utc>>,
}

pub async fn find_student_by_external_id(
    db: &DatabaseConnection,
    external_id: &str,
) -> Result<Option<student::Model>, DbErr> {
    student::Entity::find()
        .filter(student::Column::ExternalId.eq(external_id))
        .one(db)
        .await
}

pub async fn list_resources_for_student(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<Vec<ResourceMeta>, DbErr> {
    resource::Entity::find()
        .select_only()
        .column(resource::Column::PublicId)
        .column(resource::Column::FileName)
        .column(resource::Column::FileType)
        .column(resource::Column::Size)
        .column(resource::Column::Created)
        .filter(resource::Column::StudentId.eq(student_id))
        .order_by_desc(resource::Column::Created)
        .into_model::<ResourceMeta>()
        .all(db)
        .await
}

pub async fn find_resource(
    db: &DatabaseConnection,
    public_id: &str,
) -> Result<Option<resource::Model>, DbErr> {
    resource::Entity::find_by_id(public_id.to_string()).one(db).await
}

pub async fn list_feedback_for_student(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<Vec<feedback::Model>, DbErr> {
    feedback::Entity::find()
        .filter(feedback::Column::StudentId.eq(student_id))
        .order_by_desc(feedback::Column::Created)
        .all(db)
        .await
}

/// Minimal round trip used by the health endpoint.
pub async fn ping(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    db.query_one(Statement::from_string(backend, "SELECT 1"))
        .await?;
    Ok(())
}
