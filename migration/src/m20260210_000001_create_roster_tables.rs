use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建按课次购课列表关系表
        manager
            .create_table(
                Table::create()
                    .table(SlotInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SlotInfo::UniqueId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SlotInfo::StudentId).string().not_null())
                    .col(ColumnDef::new(SlotInfo::CourseId).string().not_null())
                    .col(ColumnDef::new(SlotInfo::LocationId).string().not_null())
                    .col(ColumnDef::new(SlotInfo::StudentName).string().not_null())
                    .col(
                        ColumnDef::new(SlotInfo::StudentStartDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SlotInfo::StudentEndDate).date().not_null())
                    .col(ColumnDef::new(SlotInfo::PurchasedSlot).integer().null())
                    .col(ColumnDef::new(SlotInfo::AssignedSlot).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建周期购课列表关系表（按教学周展开）
        manager
            .create_table(
                Table::create()
                    .table(RecurringInfo::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RecurringInfo::UniqueId).string().not_null())
                    .col(ColumnDef::new(RecurringInfo::WeekStart).date().not_null())
                    .col(ColumnDef::new(RecurringInfo::WeekEnd).date().not_null())
                    .col(ColumnDef::new(RecurringInfo::StudentId).string().not_null())
                    .col(ColumnDef::new(RecurringInfo::CourseId).string().not_null())
                    .col(
                        ColumnDef::new(RecurringInfo::LocationId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecurringInfo::StudentName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecurringInfo::PurchasedSlot)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RecurringInfo::AssignedSlot)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(RecurringInfo::UniqueId)
                            .col(RecurringInfo::WeekStart),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建出席记录表
        manager
            .create_table(
                Table::create()
                    .table(LessonAttendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LessonAttendance::LessonId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LessonAttendance::StudentId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LessonAttendance::CourseId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LessonAttendance::LocationId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LessonAttendance::StudentName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LessonAttendance::LessonDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LessonAttendance::AttendanceStatus)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(LessonAttendance::LessonId)
                            .col(LessonAttendance::StudentId),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建调课记录表
        manager
            .create_table(
                Table::create()
                    .table(Reallocations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reallocations::OriginalLessonId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reallocations::StudentId).string().not_null())
                    .col(ColumnDef::new(Reallocations::CourseId).string().not_null())
                    .col(ColumnDef::new(Reallocations::NewLessonId).string().null())
                    .col(
                        ColumnDef::new(Reallocations::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Reallocations::OriginalLessonId)
                            .col(Reallocations::StudentId),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学年表
        manager
            .create_table(
                Table::create()
                    .table(AcademicYears::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicYears::AcademicYearId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AcademicYears::Name).string().not_null())
                    .col(ColumnDef::new(AcademicYears::FirstDay).date().not_null())
                    .col(ColumnDef::new(AcademicYears::LastDay).date().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 排序键复合索引，保证游标翻页走索引扫描
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_slot_info_sort_key")
                    .table(SlotInfo::Table)
                    .col(SlotInfo::StudentStartDate)
                    .col(SlotInfo::CourseId)
                    .col(SlotInfo::StudentId)
                    .col(SlotInfo::UniqueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_slot_info_location_id")
                    .table(SlotInfo::Table)
                    .col(SlotInfo::LocationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_recurring_info_sort_key")
                    .table(RecurringInfo::Table)
                    .col(RecurringInfo::WeekStart)
                    .col(RecurringInfo::CourseId)
                    .col(RecurringInfo::StudentId)
                    .col(RecurringInfo::UniqueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_recurring_info_location_id")
                    .table(RecurringInfo::Table)
                    .col(RecurringInfo::LocationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lesson_attendance_lesson_date")
                    .table(LessonAttendance::Table)
                    .col(LessonAttendance::LessonDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lesson_attendance_student_id")
                    .table(LessonAttendance::Table)
                    .col(LessonAttendance::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(AcademicYears::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reallocations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LessonAttendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RecurringInfo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SlotInfo::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum SlotInfo {
    #[sea_orm(iden = "student_course_slot_info")]
    Table,
    UniqueId,
    StudentId,
    CourseId,
    LocationId,
    StudentName,
    StudentStartDate,
    StudentEndDate,
    PurchasedSlot,
    AssignedSlot,
}

#[derive(DeriveIden)]
enum RecurringInfo {
    #[sea_orm(iden = "student_course_recurring_slot_info")]
    Table,
    UniqueId,
    WeekStart,
    WeekEnd,
    StudentId,
    CourseId,
    LocationId,
    StudentName,
    PurchasedSlot,
    AssignedSlot,
}

#[derive(DeriveIden)]
enum LessonAttendance {
    Table,
    LessonId,
    StudentId,
    CourseId,
    LocationId,
    StudentName,
    LessonDate,
    AttendanceStatus,
}

#[derive(DeriveIden)]
enum Reallocations {
    Table,
    OriginalLessonId,
    StudentId,
    CourseId,
    NewLessonId,
    DeletedAt,
}

#[derive(DeriveIden)]
enum AcademicYears {
    Table,
    AcademicYearId,
    Name,
    FirstDay,
    LastDay,
}
