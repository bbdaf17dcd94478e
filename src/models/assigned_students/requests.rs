use chrono::NaiveDate;
use serde::Deserialize;

use super::entities::{AssignedStudentStatus, PurchaseMethod};
use crate::models::common::pagination::CursorPaging;

// 排课学生列表查询请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct GetAssignedStudentListRequest {
    pub purchase_method: PurchaseMethod,
    // paging 为必填块，缺失由 service 层以 400 拒绝
    pub paging: Option<CursorPaging>,
    #[serde(default)]
    pub keyword: Option<String>,
    // IANA 时区名，缺省使用配置中的默认时区
    #[serde(default)]
    pub timezone: Option<String>,
    // 全局校区过滤（通常来自调用方的可见校区范围）
    #[serde(default)]
    pub location_ids: Vec<String>,
    #[serde(default)]
    pub filter: Option<AssignedStudentFilter>,
}

// 嵌套筛选条件
#[derive(Debug, Default, Deserialize)]
pub struct AssignedStudentFilter {
    #[serde(default)]
    pub course_ids: Vec<String>,
    #[serde(default)]
    pub student_ids: Vec<String>,
    #[serde(default)]
    pub location_ids: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<AssignedStudentStatus>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

// 归一化后的列表查询参数（用于存储层）
//
// 所有可选字段都用 Option/空集合显式表达"未设置"，
// 存储层不再需要猜测零值的含义。
#[derive(Debug, Clone)]
pub struct AssignedStudentListQuery {
    pub purchase_method: PurchaseMethod,
    pub limit: u64,
    pub cursor: Option<String>,
    pub timezone: String,
    pub keyword: Option<String>,
    pub course_ids: Vec<String>,
    pub student_ids: Vec<String>,
    pub location_ids: Vec<String>,
    pub statuses: Vec<AssignedStudentStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl GetAssignedStudentListRequest {
    /// 把原始请求归一化为存储层查询参数
    ///
    /// 全局校区过滤与嵌套校区过滤同时存在时取交集；
    /// 交集为空返回 None，调用方必须直接返回空页，不得下发任何查询。
    pub fn normalize(
        self,
        limit: u64,
        cursor: Option<String>,
        default_timezone: &str,
    ) -> Option<AssignedStudentListQuery> {
        let filter = self.filter.unwrap_or_default();

        let location_ids = match (
            self.location_ids.is_empty(),
            filter.location_ids.is_empty(),
        ) {
            (true, true) => Vec::new(),
            (false, true) => self.location_ids,
            (true, false) => filter.location_ids,
            (false, false) => {
                let nested: std::collections::HashSet<&String> =
                    filter.location_ids.iter().collect();
                let intersection: Vec<String> = self
                    .location_ids
                    .iter()
                    .filter(|id| nested.contains(id))
                    .cloned()
                    .collect();
                if intersection.is_empty() {
                    return None;
                }
                intersection
            }
        };

        let keyword = self
            .keyword
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let timezone = self
            .timezone
            .filter(|tz| !tz.is_empty())
            .unwrap_or_else(|| default_timezone.to_string());

        Some(AssignedStudentListQuery {
            purchase_method: self.purchase_method,
            limit,
            cursor,
            timezone,
            keyword,
            course_ids: filter.course_ids,
            student_ids: filter.student_ids,
            location_ids,
            statuses: filter.statuses,
            start_date: filter.start_date,
            end_date: filter.end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> GetAssignedStudentListRequest {
        GetAssignedStudentListRequest {
            purchase_method: PurchaseMethod::Slot,
            paging: None,
            keyword: None,
            timezone: None,
            location_ids: vec![],
            filter: None,
        }
    }

    #[test]
    fn test_normalize_intersects_location_filters() {
        let mut req = base_request();
        req.location_ids = vec!["center-1".into(), "center-2".into()];
        req.filter = Some(AssignedStudentFilter {
            location_ids: vec!["center-2".into(), "center-3".into()],
            ..Default::default()
        });

        let query = req.normalize(10, None, "UTC").unwrap();
        assert_eq!(query.location_ids, vec!["center-2".to_string()]);
    }

    #[test]
    fn test_normalize_disjoint_locations_short_circuits() {
        let mut req = base_request();
        req.location_ids = vec!["center-1".into()];
        req.filter = Some(AssignedStudentFilter {
            location_ids: vec!["center-9".into()],
            ..Default::default()
        });

        assert!(req.normalize(10, None, "UTC").is_none());
    }

    #[test]
    fn test_normalize_single_side_location_filter_passes_through() {
        let mut req = base_request();
        req.filter = Some(AssignedStudentFilter {
            location_ids: vec!["center-5".into()],
            ..Default::default()
        });
        let query = req.normalize(10, None, "UTC").unwrap();
        assert_eq!(query.location_ids, vec!["center-5".to_string()]);
    }

    #[test]
    fn test_normalize_blank_keyword_and_timezone_fall_back() {
        let mut req = base_request();
        req.keyword = Some("   ".into());
        req.timezone = Some(String::new());

        let query = req.normalize(10, None, "Asia/Tokyo").unwrap();
        assert_eq!(query.keyword, None);
        assert_eq!(query.timezone, "Asia/Tokyo");
    }
}
