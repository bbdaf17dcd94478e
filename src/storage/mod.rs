use std::sync::Arc;

use crate::models::{
    assigned_students::{requests::AssignedStudentListQuery, responses::AssignedStudentListResponse},
    attendance::{
        entities::{AcademicYear, ReallocatedLesson},
        requests::AttendanceListQuery,
        responses::AttendanceListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 排课学生列表方法
    // 按游标分页列出排课学生（单次调用最多 3 条查询：计数、取页、上一页探测）
    async fn list_assigned_students(
        &self,
        query: AssignedStudentListQuery,
    ) -> Result<AssignedStudentListResponse>;

    /// 出席记录方法
    // 按偏移量分页列出出席记录
    async fn list_student_attendance(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse>;
    // 批量查询已生效的调课记录，键为 (原课次ID, 学生ID)
    async fn get_reallocated_lessons(
        &self,
        keys: &[(String, String)],
    ) -> Result<Vec<ReallocatedLesson>>;
    // 获取覆盖今天的学年（不存在时返回 None）
    async fn get_current_academic_year(&self) -> Result<Option<AcademicYear>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
