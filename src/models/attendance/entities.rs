use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// 出席状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "STUDENT_ATTEND_STATUS_ATTEND")]
    Attend,
    #[serde(rename = "STUDENT_ATTEND_STATUS_ABSENT")]
    Absent,
    #[serde(rename = "STUDENT_ATTEND_STATUS_LATE")]
    Late,
    #[serde(rename = "STUDENT_ATTEND_STATUS_LEAVE_EARLY")]
    LeaveEarly,
    #[serde(rename = "STUDENT_ATTEND_STATUS_REALLOCATE")]
    Reallocate,
    #[serde(rename = "STUDENT_ATTEND_STATUS_EMPTY")]
    Empty,
}

impl AttendanceStatus {
    /// 数据库存储值
    pub fn as_db_value(&self) -> &'static str {
        match self {
            AttendanceStatus::Attend => "STUDENT_ATTEND_STATUS_ATTEND",
            AttendanceStatus::Absent => "STUDENT_ATTEND_STATUS_ABSENT",
            AttendanceStatus::Late => "STUDENT_ATTEND_STATUS_LATE",
            AttendanceStatus::LeaveEarly => "STUDENT_ATTEND_STATUS_LEAVE_EARLY",
            AttendanceStatus::Reallocate => "STUDENT_ATTEND_STATUS_REALLOCATE",
            AttendanceStatus::Empty => "STUDENT_ATTEND_STATUS_EMPTY",
        }
    }

    /// 从数据库存储值解析，未知值按未填写处理
    pub fn from_db_value(value: &str) -> Self {
        match value {
            "STUDENT_ATTEND_STATUS_ATTEND" => AttendanceStatus::Attend,
            "STUDENT_ATTEND_STATUS_ABSENT" => AttendanceStatus::Absent,
            "STUDENT_ATTEND_STATUS_LATE" => AttendanceStatus::Late,
            "STUDENT_ATTEND_STATUS_LEAVE_EARLY" => AttendanceStatus::LeaveEarly,
            "STUDENT_ATTEND_STATUS_REALLOCATE" => AttendanceStatus::Reallocate,
            _ => AttendanceStatus::Empty,
        }
    }
}

// 学生出席记录行
//
// 每页查询构造一次，Attendance Enricher 就地回填
// reallocated_lesson_id 后序列化返回，不落库。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAttendance {
    pub lesson_id: String,
    pub student_id: String,
    pub course_id: String,
    pub location_id: String,
    pub student_name: String,
    pub lesson_date: NaiveDate,
    pub status: AttendanceStatus,
    // 仅当 status 为 Reallocate 时非空
    pub reallocated_lesson_id: String,
}

// 学年（用于把出席查询的日期范围裁剪到当前学年）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcademicYear {
    pub academic_year_id: String,
    pub name: String,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

// 已生效的调课记录（原课次 + 学生 -> 新课次）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReallocatedLesson {
    pub original_lesson_id: String,
    pub student_id: String,
    pub new_lesson_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_db_value_round_trip() {
        for status in [
            AttendanceStatus::Attend,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
            AttendanceStatus::LeaveEarly,
            AttendanceStatus::Reallocate,
            AttendanceStatus::Empty,
        ] {
            assert_eq!(AttendanceStatus::from_db_value(status.as_db_value()), status);
        }
    }

    #[test]
    fn test_unknown_status_maps_to_empty() {
        assert_eq!(
            AttendanceStatus::from_db_value("SOMETHING_ELSE"),
            AttendanceStatus::Empty
        );
    }
}
