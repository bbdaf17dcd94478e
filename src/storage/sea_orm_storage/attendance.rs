//! 出席记录存储操作
//!
//! 出席列表量级小且会被前端整页刷新，用偏移量分页即可；
//! 总数单独一条 COUNT 查询，与取页共两条。

use super::SeaOrmStorage;
use crate::entity::lesson_attendance::{Column, Entity as LessonAttendance};
use crate::errors::{LessonMgmtError, Result};
use crate::models::{
    OffsetPageInfo,
    attendance::{
        entities::StudentAttendance, requests::AttendanceListQuery,
        responses::AttendanceListResponse,
    },
};
use crate::utils::sql::name_match_pattern;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 按偏移量分页列出出席记录
    pub async fn list_student_attendance_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        let cond = attendance_filter_condition(&query);

        let total = LessonAttendance::find()
            .filter(cond.clone())
            .count(&self.db)
            .await
            .map_err(|e| {
                LessonMgmtError::database_operation(format!("查询出席记录总数失败: {e}"))
            })?;

        // 最新课次在前，同一天内按课次和学生稳定排序
        let rows = LessonAttendance::find()
            .filter(cond)
            .order_by_desc(Column::LessonDate)
            .order_by_asc(Column::LessonId)
            .order_by_asc(Column::StudentId)
            .offset(query.offset)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                LessonMgmtError::database_operation(format!("查询出席记录列表失败: {e}"))
            })?;

        let items: Vec<StudentAttendance> = rows
            .into_iter()
            .map(|m| m.into_student_attendance())
            .collect();

        Ok(AttendanceListResponse {
            pagination: OffsetPageInfo {
                limit: query.limit,
                offset: query.offset,
                total,
            },
            items,
        })
    }
}

fn attendance_filter_condition(query: &AttendanceListQuery) -> Condition {
    let mut cond = Condition::all();

    if !query.student_ids.is_empty() {
        cond = cond.add(Column::StudentId.is_in(query.student_ids.clone()));
    }
    if !query.course_ids.is_empty() {
        cond = cond.add(Column::CourseId.is_in(query.course_ids.clone()));
    }
    if !query.location_ids.is_empty() {
        cond = cond.add(Column::LocationId.is_in(query.location_ids.clone()));
    }
    if !query.statuses.is_empty() {
        let values: Vec<&'static str> = query.statuses.iter().map(|s| s.as_db_value()).collect();
        cond = cond.add(Column::AttendanceStatus.is_in(values));
    }
    if let Some(ref keyword) = query.keyword {
        cond = cond.add(Expr::cust_with_values(
            "REPLACE(LOWER(student_name), ' ', '') LIKE ? ESCAPE '\\'",
            [name_match_pattern(keyword)],
        ));
    }
    if let Some(start) = query.start_date {
        cond = cond.add(Column::LessonDate.gte(start));
    }
    if let Some(end) = query.end_date {
        cond = cond.add(Column::LessonDate.lte(end));
    }

    cond
}
