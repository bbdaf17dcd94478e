use chrono::NaiveDate;

use crate::errors::{LessonMgmtError, Result};

const WEEK_START_FORMAT: &str = "%Y-%m-%d";

/// 组装周期性购买数据集的游标：`{unique_id}_{week_start}`
///
/// 同一个 unique_id 会按周展开成多行，拼上周起始日期才能唯一定位一行。
pub fn recurring_cursor(unique_id: &str, week_start: NaiveDate) -> String {
    format!("{}_{}", unique_id, week_start.format(WEEK_START_FORMAT))
}

/// 解析周期性购买数据集的游标，拆回 (unique_id, week_start)
///
/// unique_id 本身可能包含下划线，因此从右侧拆最后一段作为日期。
pub fn parse_recurring_cursor(cursor: &str) -> Result<(String, NaiveDate)> {
    let (unique_id, date_part) = cursor
        .rsplit_once('_')
        .ok_or_else(|| malformed_cursor(cursor))?;

    if unique_id.is_empty() {
        return Err(malformed_cursor(cursor));
    }

    let week_start = NaiveDate::parse_from_str(date_part, WEEK_START_FORMAT)
        .map_err(|_| malformed_cursor(cursor))?;

    Ok((unique_id.to_string(), week_start))
}

fn malformed_cursor(cursor: &str) -> LessonMgmtError {
    LessonMgmtError::cursor_parse(format!("Malformed recurring cursor: {}", cursor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurring_cursor_round_trip() {
        let week_start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let cursor = recurring_cursor("sub_01_course_02", week_start);
        assert_eq!(cursor, "sub_01_course_02_2026-03-02");

        let (unique_id, parsed) = parse_recurring_cursor(&cursor).unwrap();
        assert_eq!(unique_id, "sub_01_course_02");
        assert_eq!(parsed, week_start);
    }

    #[test]
    fn test_parse_rejects_cursor_without_date_suffix() {
        assert!(parse_recurring_cursor("sub-only").is_err());
        assert!(parse_recurring_cursor("sub_01").is_err());
        assert!(parse_recurring_cursor("sub_01_2026-13-40").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_unique_id() {
        assert!(parse_recurring_cursor("_2026-03-02").is_err());
    }
}
