//! SeaORM 存储实现
//!
//! PostgreSQL 专用的存储层：核心列表查询依赖行比较
//! 与 AT TIME ZONE 等 PostgreSQL 语法，不接受其他数据库的连接 URL。

mod academic_years;
mod assigned_students;
mod attendance;
mod reallocations;

use crate::config::AppConfig;
use crate::errors::{LessonMgmtError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::check_database_url(&config.database.url)?;

        let db = Self::connect(db_url, config).await?;

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LessonMgmtError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    async fn connect(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LessonMgmtError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 校验连接 URL，只接受 PostgreSQL
    fn check_database_url(url: &str) -> Result<&str> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(url)
        } else {
            Err(LessonMgmtError::database_config(format!(
                "不支持的数据库 URL: {url}. 仅支持 postgres:// 或 postgresql://"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assigned_students::{requests::AssignedStudentListQuery, responses::AssignedStudentListResponse},
    attendance::{
        entities::{AcademicYear, ReallocatedLesson},
        requests::AttendanceListQuery,
        responses::AttendanceListResponse,
    },
};
use crate::storage::Storage;

#[async_trait::async_trait]
impl Storage for SeaOrmStorage {
    async fn list_assigned_students(
        &self,
        query: AssignedStudentListQuery,
    ) -> Result<AssignedStudentListResponse> {
        self.list_assigned_students_impl(query).await
    }

    async fn list_student_attendance(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        self.list_student_attendance_impl(query).await
    }

    async fn get_reallocated_lessons(
        &self,
        keys: &[(String, String)],
    ) -> Result<Vec<ReallocatedLesson>> {
        self.get_reallocated_lessons_impl(keys).await
    }

    async fn get_current_academic_year(&self) -> Result<Option<AcademicYear>> {
        self.get_current_academic_year_impl().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_database_url_accepts_postgres_only() {
        assert!(
            SeaOrmStorage::check_database_url("postgres://u:p@localhost/lessonmgmt").is_ok()
        );
        assert!(
            SeaOrmStorage::check_database_url("postgresql://u:p@localhost/lessonmgmt").is_ok()
        );
        assert!(SeaOrmStorage::check_database_url("sqlite://data.db").is_err());
        assert!(SeaOrmStorage::check_database_url("mysql://u:p@localhost/db").is_err());
        assert!(SeaOrmStorage::check_database_url("lessonmgmt.db").is_err());
    }
}
