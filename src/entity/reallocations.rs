//! 学生重排课记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reallocations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub original_lesson_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    pub course_id: String,
    pub new_lesson_id: Option<String>,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
