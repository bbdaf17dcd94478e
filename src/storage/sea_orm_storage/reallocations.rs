//! 调课记录存储操作

use super::SeaOrmStorage;
use crate::entity::reallocations::{Column, Entity as Reallocations};
use crate::errors::{LessonMgmtError, Result};
use crate::models::attendance::entities::ReallocatedLesson;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, sea_query::Expr, sea_query::ExprTrait};

impl SeaOrmStorage {
    /// 批量查询已生效的调课记录
    ///
    /// 键为 (原课次ID, 学生ID)，一整页用一条 IN 元组查询取回；
    /// 已撤销（软删除）或尚未指定新课次的记录不算生效。
    pub async fn get_reallocated_lessons_impl(
        &self,
        keys: &[(String, String)],
    ) -> Result<Vec<ReallocatedLesson>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let tuples: Vec<(String, String)> = keys.to_vec();
        let rows = Reallocations::find()
            .filter(
                Expr::tuple([
                    Expr::col(Column::OriginalLessonId).into(),
                    Expr::col(Column::StudentId).into(),
                ])
                .in_tuples(tuples),
            )
            .filter(Column::DeletedAt.is_null())
            .filter(Column::NewLessonId.is_not_null())
            .all(&self.db)
            .await
            .map_err(|e| LessonMgmtError::database_operation(format!("查询调课记录失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|m| {
                m.new_lesson_id.map(|new_lesson_id| ReallocatedLesson {
                    original_lesson_id: m.original_lesson_id,
                    student_id: m.student_id,
                    new_lesson_id,
                })
            })
            .collect())
    }
}
