use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// 购课方式：决定选用哪一套底层列表数据集
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseMethod {
    #[serde(rename = "PURCHASE_METHOD_SLOT")]
    Slot,
    #[serde(rename = "PURCHASE_METHOD_RECURRING")]
    Recurring,
}

// 学生排课状态：由已购课次与已排课次之差推导
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignedStudentStatus {
    #[serde(rename = "STUDENT_STATUS_UNDER_ASSIGNED")]
    UnderAssigned,
    #[serde(rename = "STUDENT_STATUS_JUST_ASSIGNED")]
    JustAssigned,
    #[serde(rename = "STUDENT_STATUS_OVER_ASSIGNED")]
    OverAssigned,
}

impl AssignedStudentStatus {
    /// 由课次差推导状态（slot_gap = 已排 - 已购）
    pub fn from_slot_gap(slot_gap: i32) -> Self {
        match slot_gap {
            g if g < 0 => AssignedStudentStatus::UnderAssigned,
            0 => AssignedStudentStatus::JustAssigned,
            _ => AssignedStudentStatus::OverAssigned,
        }
    }
}

// 排课学生列表行
//
// 由分页引擎从只读查询构造，构造后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedStudent {
    // 学生ID
    pub student_id: String,
    // 课程ID
    pub course_id: String,
    // 校区ID
    pub location_id: String,
    // 学生姓名
    pub student_name: String,
    // 购课周期的可读描述，如 "2026/04/01 - 2026/09/30"
    pub duration: String,
    // 已购课次（导入数据中 0 会被置 NULL）
    pub purchased_slot: Option<i32>,
    // 已排课次
    pub assigned_slot: i32,
    // 课次差 = 已排 - 已购
    pub slot_gap: i32,
    // 排课状态
    pub status: AssignedStudentStatus,
    // 订阅标识，作为前向分页游标
    pub student_subscription_id: String,
}

impl AssignedStudent {
    pub fn builder() -> AssignedStudentBuilder {
        AssignedStudentBuilder::default()
    }
}

// AssignedStudent 的组装器
//
// slot_gap 与 status 总是在 build() 时由课次数推导，避免调用方各自计算。
#[derive(Debug, Default)]
pub struct AssignedStudentBuilder {
    student_id: String,
    course_id: String,
    location_id: String,
    student_name: String,
    duration: String,
    purchased_slot: Option<i32>,
    assigned_slot: i32,
    student_subscription_id: String,
}

impl AssignedStudentBuilder {
    pub fn student_id(mut self, v: impl Into<String>) -> Self {
        self.student_id = v.into();
        self
    }

    pub fn course_id(mut self, v: impl Into<String>) -> Self {
        self.course_id = v.into();
        self
    }

    pub fn location_id(mut self, v: impl Into<String>) -> Self {
        self.location_id = v.into();
        self
    }

    pub fn student_name(mut self, v: impl Into<String>) -> Self {
        self.student_name = v.into();
        self
    }

    /// 由购课周期的起止日期生成可读描述
    pub fn duration(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.duration = format!("{} - {}", start.format("%Y/%m/%d"), end.format("%Y/%m/%d"));
        self
    }

    pub fn purchased_slot(mut self, v: Option<i32>) -> Self {
        self.purchased_slot = v;
        self
    }

    pub fn assigned_slot(mut self, v: i32) -> Self {
        self.assigned_slot = v;
        self
    }

    pub fn student_subscription_id(mut self, v: impl Into<String>) -> Self {
        self.student_subscription_id = v.into();
        self
    }

    pub fn build(self) -> AssignedStudent {
        let slot_gap = self.assigned_slot - self.purchased_slot.unwrap_or(0);
        AssignedStudent {
            student_id: self.student_id,
            course_id: self.course_id,
            location_id: self.location_id,
            student_name: self.student_name,
            duration: self.duration,
            purchased_slot: self.purchased_slot,
            assigned_slot: self.assigned_slot,
            slot_gap,
            status: AssignedStudentStatus::from_slot_gap(slot_gap),
            student_subscription_id: self.student_subscription_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_slot_gap() {
        assert_eq!(
            AssignedStudentStatus::from_slot_gap(-2),
            AssignedStudentStatus::UnderAssigned
        );
        assert_eq!(
            AssignedStudentStatus::from_slot_gap(0),
            AssignedStudentStatus::JustAssigned
        );
        assert_eq!(
            AssignedStudentStatus::from_slot_gap(3),
            AssignedStudentStatus::OverAssigned
        );
    }

    #[test]
    fn test_builder_derives_gap_and_status() {
        let student = AssignedStudent::builder()
            .student_id("student-1")
            .course_id("course-1")
            .location_id("center-1")
            .student_name("山田 太郎")
            .duration(
                NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
            )
            .purchased_slot(Some(10))
            .assigned_slot(7)
            .student_subscription_id("sub-1")
            .build();

        assert_eq!(student.slot_gap, -3);
        assert_eq!(student.status, AssignedStudentStatus::UnderAssigned);
        assert_eq!(student.duration, "2026/04/01 - 2026/09/30");
    }

    #[test]
    fn test_builder_null_purchased_slot_counts_as_zero() {
        let student = AssignedStudent::builder()
            .purchased_slot(None)
            .assigned_slot(2)
            .build();
        assert_eq!(student.slot_gap, 2);
        assert_eq!(student.status, AssignedStudentStatus::OverAssigned);
    }
}
