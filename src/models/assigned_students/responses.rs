use serde::Serialize;

use super::entities::AssignedStudent;
use crate::models::common::pagination::CursorPageInfo;

// 排课学生列表响应
#[derive(Debug, Serialize)]
pub struct AssignedStudentListResponse {
    pub pagination: CursorPageInfo,
    pub items: Vec<AssignedStudent>,
}

impl AssignedStudentListResponse {
    /// 空页响应（无匹配数据或校区过滤交集为空时）
    pub fn empty(limit: u64) -> Self {
        Self {
            pagination: CursorPageInfo {
                limit,
                total: 0,
                next_cursor: String::new(),
                previous_cursor: String::new(),
            },
            items: Vec::new(),
        }
    }
}
