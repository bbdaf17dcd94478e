//! 周期购课（recurring）列表关系实体
//!
//! 每名学生的购课周期按周展开，一行对应一个教学周；
//! 同一个 unique_id 会出现在多个周，因此主键是 (unique_id, week_start)。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_course_recurring_slot_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub unique_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub week_start: Date,
    pub week_end: Date,
    pub student_id: String,
    pub course_id: String,
    pub location_id: String,
    pub student_name: String,
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
        use crate::utils::cursor::recurring_cursor;

        let cursor = recurring_cursor(&self.unique_id, self.week_start);
        AssignedStudent::builder()
            .student_id(self.student_id)
            .course_id(self.course_id)
            .location_id(self.location_id)
            .student_name(self.student_name)
            .duration(self.week_start, self.week_end)
            .purchased_slot(self.purchased_slot)
            .assigned_slot(self.assigned_slot)
            // recurring 数据集的游标是 unique_id 拼接周起始日
            .student_subscription_id(cursor)
            .build()
    }
}
