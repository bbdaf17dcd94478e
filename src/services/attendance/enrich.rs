//! 出席记录调课回填
//!
//! 页内凡是状态为调课的行，都要补上调到的新课次 ID。
//! 一整页只允许一次批量查询：先线性扫出键，再一条 IN 查询，
//! 最后线性回填；页内没有调课行时一次查询都不下发。

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::attendance::entities::{AttendanceStatus, StudentAttendance};
use crate::storage::Storage;

/// 为一页出席记录回填调课信息
pub async fn enrich_reallocations(
    storage: &Arc<dyn Storage>,
    items: &mut [StudentAttendance],
) -> Result<()> {
    let keys = collect_reallocate_keys(items);
    if keys.is_empty() {
        return Ok(());
    }

    let reallocated = storage.get_reallocated_lessons(&keys).await?;
    let map: HashMap<(String, String), String> = reallocated
        .into_iter()
        .map(|r| ((r.original_lesson_id, r.student_id), r.new_lesson_id))
        .collect();

    apply_reallocation_map(items, &map);
    Ok(())
}

// 收集状态为调课的 (课次ID, 学生ID) 键
fn collect_reallocate_keys(items: &[StudentAttendance]) -> Vec<(String, String)> {
    items
        .iter()
        .filter(|item| item.status == AttendanceStatus::Reallocate)
        .map(|item| (item.lesson_id.clone(), item.student_id.clone()))
        .collect()
}

// 回填新课次 ID；查不到调课记录的行保持空串
fn apply_reallocation_map(
    items: &mut [StudentAttendance],
    map: &HashMap<(String, String), String>,
) {
    for item in items {
        if item.status != AttendanceStatus::Reallocate {
            continue;
        }
        let key = (item.lesson_id.clone(), item.student_id.clone());
        if let Some(new_lesson_id) = map.get(&key) {
            item.reallocated_lesson_id = new_lesson_id.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        assigned_students::{
            requests::AssignedStudentListQuery, responses::AssignedStudentListResponse,
        },
        attendance::{
            entities::{AcademicYear, ReallocatedLesson},
            requests::AttendanceListQuery,
            responses::AttendanceListResponse,
        },
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn attendance_row(lesson_id: &str, student_id: &str, status: AttendanceStatus) -> StudentAttendance {
        StudentAttendance {
            lesson_id: lesson_id.to_string(),
            student_id: student_id.to_string(),
            course_id: "course-1".to_string(),
            location_id: "center-1".to_string(),
            student_name: "Yamada Taro".to_string(),
            lesson_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            status,
            reallocated_lesson_id: String::new(),
        }
    }

    // 记录调用次数的存储替身，只响应调课查询
    struct CountingStorage {
        lookups: AtomicUsize,
        reallocated: Vec<ReallocatedLesson>,
    }

    #[async_trait::async_trait]
    impl Storage for CountingStorage {
        async fn list_assigned_students(
            &self,
            _query: AssignedStudentListQuery,
        ) -> crate::errors::Result<AssignedStudentListResponse> {
            unimplemented!("not used in enrich tests")
        }

        async fn list_student_attendance(
            &self,
            _query: AttendanceListQuery,
        ) -> crate::errors::Result<AttendanceListResponse> {
            unimplemented!("not used in enrich tests")
        }

        async fn get_reallocated_lessons(
            &self,
            keys: &[(String, String)],
        ) -> crate::errors::Result<Vec<ReallocatedLesson>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .reallocated
                .iter()
                .filter(|r| {
                    keys.contains(&(r.original_lesson_id.clone(), r.student_id.clone()))
                })
                .cloned()
                .collect())
        }

        async fn get_current_academic_year(
            &self,
        ) -> crate::errors::Result<Option<AcademicYear>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_enrich_uses_single_lookup_per_page() {
        let counting = Arc::new(CountingStorage {
            lookups: AtomicUsize::new(0),
            reallocated: vec![
                ReallocatedLesson {
                    original_lesson_id: "lesson-1".to_string(),
                    student_id: "student-1".to_string(),
                    new_lesson_id: "lesson-9".to_string(),
                },
                ReallocatedLesson {
                    original_lesson_id: "lesson-2".to_string(),
                    student_id: "student-2".to_string(),
                    new_lesson_id: "lesson-8".to_string(),
                },
            ],
        });
        let storage: Arc<dyn Storage> = counting.clone();

        let mut items = vec![
            attendance_row("lesson-1", "student-1", AttendanceStatus::Reallocate),
            attendance_row("lesson-1", "student-3", AttendanceStatus::Attend),
            attendance_row("lesson-2", "student-2", AttendanceStatus::Reallocate),
        ];

        enrich_reallocations(&storage, &mut items).await.unwrap();

        assert_eq!(counting.lookups.load(Ordering::SeqCst), 1);
        assert_eq!(items[0].reallocated_lesson_id, "lesson-9");
        assert_eq!(items[1].reallocated_lesson_id, "");
        assert_eq!(items[2].reallocated_lesson_id, "lesson-8");
    }

    #[tokio::test]
    async fn test_enrich_skips_lookup_without_reallocate_rows() {
        let counting = Arc::new(CountingStorage {
            lookups: AtomicUsize::new(0),
            reallocated: vec![],
        });
        let storage: Arc<dyn Storage> = counting.clone();

        let mut items = vec![
            attendance_row("lesson-1", "student-1", AttendanceStatus::Attend),
            attendance_row("lesson-1", "student-2", AttendanceStatus::Absent),
        ];

        enrich_reallocations(&storage, &mut items).await.unwrap();

        assert_eq!(counting.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_reallocate_row_without_record_keeps_empty_id() {
        let counting = Arc::new(CountingStorage {
            lookups: AtomicUsize::new(0),
            reallocated: vec![],
        });
        let storage: Arc<dyn Storage> = counting.clone();

        let mut items = vec![attendance_row(
            "lesson-7",
            "student-7",
            AttendanceStatus::Reallocate,
        )];

        enrich_reallocations(&storage, &mut items).await.unwrap();

        assert_eq!(counting.lookups.load(Ordering::SeqCst), 1);
        assert_eq!(items[0].reallocated_lesson_id, "");
    }
}
