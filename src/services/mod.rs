pub mod assigned_students;
pub mod attendance;

pub use assigned_students::AssignedStudentService;
pub use attendance::AttendanceService;
