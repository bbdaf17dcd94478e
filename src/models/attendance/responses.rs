use serde::Serialize;

use super::entities::StudentAttendance;
use crate::models::common::pagination::OffsetPageInfo;

// 出席记录列表响应
#[derive(Debug, Serialize)]
pub struct AttendanceListResponse {
    pub pagination: OffsetPageInfo,
    pub items: Vec<StudentAttendance>,
}

impl AttendanceListResponse {
    pub fn empty(limit: u64, offset: u64) -> Self {
        Self {
            pagination: OffsetPageInfo {
                limit,
                offset,
                total: 0,
            },
            items: Vec::new(),
        }
    }
}
