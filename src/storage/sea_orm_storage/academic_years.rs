//! 学年存储操作

use super::SeaOrmStorage;
use crate::entity::academic_years::{Column, Entity as AcademicYears};
use crate::errors::{LessonMgmtError, Result};
use crate::models::attendance::entities::AcademicYear;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

impl SeaOrmStorage {
    /// 获取覆盖今天的学年
    pub async fn get_current_academic_year_impl(&self) -> Result<Option<AcademicYear>> {
        let today = chrono::Utc::now().date_naive();

        let row = AcademicYears::find()
            .filter(Column::FirstDay.lte(today))
            .filter(Column::LastDay.gte(today))
            .one(&self.db)
            .await
            .map_err(|e| LessonMgmtError::database_operation(format!("查询当前学年失败: {e}")))?;

        Ok(row.map(|m| AcademicYear {
            academic_year_id: m.academic_year_id,
            name: m.name,
            first_day: m.first_day,
            last_day: m.last_day,
        }))
    }
}
