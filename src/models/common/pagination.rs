use serde::{Deserialize, Serialize};

// 游标分页请求参数
//
// cursor 为空或缺省表示第一页；其内容对调用方不透明，
// 只能原样回传上一次响应中的 next_cursor / previous_cursor。
#[derive(Debug, Clone, Deserialize)]
pub struct CursorPaging {
    pub limit: u64,
    #[serde(default)]
    pub cursor: Option<String>,
}

// 游标分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPageInfo {
    pub limit: u64,
    pub total: u64,
    // 下一页游标：最后一行的订阅标识（空表示无数据）
    pub next_cursor: String,
    // 上一页游标：空表示上一页就是第一页（或没有上一页）
    pub previous_cursor: String,
}

// 偏移量分页请求参数（出席记录列表使用，量级小，无需游标）
#[derive(Debug, Clone, Deserialize)]
pub struct OffsetPaging {
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

// 偏移量分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetPageInfo {
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
}
