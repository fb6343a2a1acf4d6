use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "t_student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Identity-provider user id; empty until the student first signs in.
    pub external_id: Option<String>,
    pub email: String,
    pub display_name: String,
    pub preferred_locale: Option<String>,
    pub created: Option<DateTimeUtc>,
    pub updated: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
