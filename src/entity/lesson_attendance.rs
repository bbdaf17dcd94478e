//! 课堂出席记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson_attendance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub lesson_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    pub course_id: String,
    pub location_id: String,
    pub student_name: String,
    pub lesson_date: Date,
    pub attendance_status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student_attendance(self) -> crate::models::attendance::entities::StudentAttendance {
        use crate::models::attendance::entities::{AttendanceStatus, StudentAttendance};

        StudentAttendance {
            lesson_id: self.lesson_id,
            student_id: self.student_id,
            course_id: self.course_id,
            location_id: self.location_id,
            student_name: self.student_name,
            lesson_date: self.lesson_date,
            status: AttendanceStatus::from_db_value(&self.attendance_status),
            // 重排课目标课次由 Attendance Enricher 回填
            reallocated_lesson_id: String::new(),
        }
    }
}
