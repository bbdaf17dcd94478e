pub mod assigned_students;
pub mod attendance;
pub mod common;

pub use common::error_code::ErrorCode;
pub use common::pagination::{CursorPageInfo, CursorPaging, OffsetPageInfo, OffsetPaging};
pub use common::response::ApiResponse;

// 程序启动时间（用于运行时长统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
