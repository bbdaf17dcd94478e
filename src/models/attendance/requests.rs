use chrono::NaiveDate;
use serde::Deserialize;

use super::entities::AttendanceStatus;
use crate::models::common::pagination::OffsetPaging;

// 出席记录列表查询请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct GetStudentAttendanceRequest {
    // paging 为必填块，缺失由 service 层以 400 拒绝
    pub paging: Option<OffsetPaging>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub filter: Option<AttendanceFilter>,
}

// 出席记录筛选条件
#[derive(Debug, Default, Deserialize)]
pub struct AttendanceFilter {
    #[serde(default)]
    pub student_ids: Vec<String>,
    #[serde(default)]
    pub course_ids: Vec<String>,
    #[serde(default)]
    pub location_ids: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<AttendanceStatus>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

// 归一化后的出席记录查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct AttendanceListQuery {
    pub limit: u64,
    pub offset: u64,
    pub keyword: Option<String>,
    pub student_ids: Vec<String>,
    pub course_ids: Vec<String>,
    pub location_ids: Vec<String>,
    pub statuses: Vec<AttendanceStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl GetStudentAttendanceRequest {
    /// 把原始请求归一化为存储层查询参数
    pub fn normalize(self, limit: u64, offset: u64) -> AttendanceListQuery {
        let filter = self.filter.unwrap_or_default();
        let keyword = self
            .keyword
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        AttendanceListQuery {
            limit,
            offset,
            keyword,
            student_ids: filter.student_ids,
            course_ids: filter.course_ids,
            location_ids: filter.location_ids,
            statuses: filter.statuses,
            start_date: filter.start_date,
            end_date: filter.end_date,
        }
    }
}

impl AttendanceListQuery {
    /// 把查询日期范围裁剪到指定学年范围内
    ///
    /// 两侧都取更紧的一端；未设置的一侧直接采用学年边界。
    pub fn clip_to_academic_year(&mut self, first_day: NaiveDate, last_day: NaiveDate) {
        self.start_date = Some(match self.start_date {
            Some(start) => start.max(first_day),
            None => first_day,
        });
        self.end_date = Some(match self.end_date {
            Some(end) => end.min(last_day),
            None => last_day,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_to_academic_year_tightens_both_ends() {
        let mut query = GetStudentAttendanceRequest {
            paging: None,
            keyword: None,
            filter: Some(AttendanceFilter {
                start_date: NaiveDate::from_ymd_opt(2026, 1, 1),
                end_date: NaiveDate::from_ymd_opt(2026, 12, 31),
                ..Default::default()
            }),
        }
        .normalize(20, 0);

        query.clip_to_academic_year(
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            NaiveDate::from_ymd_opt(2027, 3, 31).unwrap(),
        );

        assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2026, 4, 1));
        assert_eq!(query.end_date, NaiveDate::from_ymd_opt(2026, 12, 31));
    }

    #[test]
    fn test_clip_fills_missing_range_from_academic_year() {
        let mut query = GetStudentAttendanceRequest {
            paging: None,
            keyword: None,
            filter: None,
        }
        .normalize(20, 0);

        query.clip_to_academic_year(
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            NaiveDate::from_ymd_opt(2027, 3, 31).unwrap(),
        );

        assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2026, 4, 1));
        assert_eq!(query.end_date, NaiveDate::from_ymd_opt(2027, 3, 31));
    }
}
