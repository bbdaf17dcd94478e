//! 按课次购课（slot）列表关系实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_course_slot_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub unique_id: String,
    pub student_id: String,
    pub course_id: String,
    pub location_id: String,
    pub student_name: String,
    pub student_start_date: Date,
    pub student_end_date: Date,
    pub purchased_slot: Option<i32>,
    pub assigned_slot: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assigned_student(self) -> crate::models::assigned_students::entities::AssignedStudent {
        use crate::models::assigned_students::entities::AssignedStudent;

        AssignedStudent::builder()
            .student_id(self.student_id)
            .course_id(self.course_id)
            .location_id(self.location_id)
            .student_name(self.student_name)
            .duration(self.student_start_date, self.student_end_date)
            .purchased_slot(self.purchased_slot)
            .assigned_slot(self.assigned_slot)
            // slot 数据集的游标就是 unique_id 本身
            .student_subscription_id(self.unique_id)
            .build()
    }
}
