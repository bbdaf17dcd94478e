//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行查询，然后转换为 models 中的业务实体。
//!
//! `student_course_slot_info` 与 `student_course_recurring_slot_info`
//! 是只读列表关系，由外部的购课导入管道维护，本服务不写入。

pub mod prelude;

pub mod academic_years;
pub mod lesson_attendance;
pub mod reallocations;
pub mod student_course_recurring_slots;
pub mod student_course_slots;
