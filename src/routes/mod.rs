pub mod assigned_students;

pub mod attendance;

pub use assigned_students::configure_assigned_students_routes;
pub use attendance::configure_attendance_routes;
