//! 预导入模块，方便使用

pub use super::academic_years::{Entity as AcademicYears, Model as AcademicYearModel};
pub use super::lesson_attendance::{Entity as LessonAttendance, Model as LessonAttendanceModel};
pub use super::reallocations::{Entity as Reallocations, Model as ReallocationModel};
pub use super::student_course_recurring_slots::{
    Entity as StudentCourseRecurringSlots, Model as StudentCourseRecurringSlotModel,
};
pub use super::student_course_slots::{
    Entity as StudentCourseSlots, Model as StudentCourseSlotModel,
};
