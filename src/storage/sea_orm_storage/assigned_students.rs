//! 排课学生列表存储操作（游标分页引擎）
//!
//! 两个数据集各自维护一份四元排序键：
//! slot 为 (student_start_date, course_id, student_id, unique_id)，
//! recurring 为 (week_start, course_id, student_id, unique_id)。
//! 分页算法只有一份，由数据集描述对象提供各自的查询构造；
//! 一次列表调用最多下发三条查询：总数、取页、上一页探测，不开事务，
//! 三条查询各自读到的快照可能不同，总数只保证读已提交级别的近似。

use super::SeaOrmStorage;
use crate::entity::student_course_recurring_slots::{
    Column as RecurringColumn, Entity as RecurringSlots,
};
use crate::entity::student_course_slots::{Column as SlotColumn, Entity as Slots};
use crate::errors::{LessonMgmtError, Result};
use crate::models::{
    CursorPageInfo,
    assigned_students::{
        entities::{AssignedStudent, AssignedStudentStatus, PurchaseMethod},
        requests::AssignedStudentListQuery,
        responses::AssignedStudentListResponse,
    },
};
use crate::utils::cursor::{parse_recurring_cursor, recurring_cursor};
use crate::utils::sql::name_match_pattern;
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, sea_query::Expr,
};

impl SeaOrmStorage {
    /// 按游标分页列出排课学生
    pub async fn list_assigned_students_impl(
        &self,
        query: AssignedStudentListQuery,
    ) -> Result<AssignedStudentListResponse> {
        match query.purchase_method {
            PurchaseMethod::Slot => self.paginate(&SlotDataset, query).await,
            PurchaseMethod::Recurring => self.paginate(&RecurringDataset, query).await,
        }
    }

    // 分页算法主干，对两个数据集完全一致
    async fn paginate(
        &self,
        dataset: &dyn PagedDataset,
        query: AssignedStudentListQuery,
    ) -> Result<AssignedStudentListResponse> {
        let limit = query.limit;

        // 游标格式错误在下发任何查询之前拒绝
        if let Some(ref cursor) = query.cursor {
            dataset.check_cursor(cursor)?;
        }

        // 第一条查询：不带游标的总数
        let total = dataset.count(&self.db, &query).await?;

        // 第二条查询：当前页
        let (items, next_cursor) = dataset.fetch_page(&self.db, &query).await?;

        // 第三条查询：上一页探测，仅在带游标时下发
        let previous_cursor = match query.cursor {
            Some(_) => {
                let (pre_total, boundary) = dataset.probe_previous(&self.db, &query).await?;
                previous_cursor_from_probe(pre_total, limit, boundary)
            }
            None => String::new(),
        };

        Ok(AssignedStudentListResponse {
            pagination: CursorPageInfo {
                limit,
                total,
                next_cursor,
                previous_cursor,
            },
            items,
        })
    }
}

/// 数据集描述对象
///
/// 每个数据集提供自己的筛选条件、排序键与游标编解码；
/// 翻页次序、上一页抑制等算法行为由调用方统一掌握。
#[async_trait::async_trait]
trait PagedDataset: Send + Sync {
    /// 校验游标格式，必须在任何查询之前调用
    fn check_cursor(&self, cursor: &str) -> Result<()>;

    /// 满足筛选的总行数（不含游标）
    async fn count(&self, db: &DatabaseConnection, query: &AssignedStudentListQuery)
    -> Result<u64>;

    /// 取当前页，返回行与下一页游标（空页时游标为空串）
    async fn fetch_page(
        &self,
        db: &DatabaseConnection,
        query: &AssignedStudentListQuery,
    ) -> Result<(Vec<AssignedStudent>, String)>;

    /// 上一页探测：游标之前的总行数与倒序取 limit 行后的边界游标
    async fn probe_previous(
        &self,
        db: &DatabaseConnection,
        query: &AssignedStudentListQuery,
    ) -> Result<(u64, Option<String>)>;
}

struct SlotDataset;

struct RecurringDataset;

// 上一页探测行：pre_total 是窗口函数 COUNT(*) OVER()，
// 在 LIMIT 之前求值，因此等于游标之前的全部行数
#[derive(Debug, FromQueryResult)]
struct SlotProbeRow {
    pre_total: i64,
    unique_id: String,
}

#[derive(Debug, FromQueryResult)]
struct RecurringProbeRow {
    pre_total: i64,
    unique_id: String,
    week_start: NaiveDate,
}

#[async_trait::async_trait]
impl PagedDataset for SlotDataset {
    fn check_cursor(&self, _cursor: &str) -> Result<()> {
        // slot 游标就是 unique_id 本身，任意字符串均合法
        Ok(())
    }

    async fn count(
        &self,
        db: &DatabaseConnection,
        query: &AssignedStudentListQuery,
    ) -> Result<u64> {
        Slots::find()
            .filter(slot_filter_condition(query))
            .count(db)
            .await
            .map_err(|e| LessonMgmtError::database_operation(format!("查询排课学生总数失败: {e}")))
    }

    async fn fetch_page(
        &self,
        db: &DatabaseConnection,
        query: &AssignedStudentListQuery,
    ) -> Result<(Vec<AssignedStudent>, String)> {
        let mut select = Slots::find().filter(slot_filter_condition(query));
        if let Some(ref cursor) = query.cursor {
            select = select.filter(slot_keyset(">", cursor));
        }
        let rows = select
            .order_by_asc(SlotColumn::StudentStartDate)
            .order_by_asc(SlotColumn::CourseId)
            .order_by_asc(SlotColumn::StudentId)
            .order_by_asc(SlotColumn::UniqueId)
            .limit(query.limit)
            .all(db)
            .await
            .map_err(|e| {
                LessonMgmtError::database_operation(format!("查询排课学生列表失败: {e}"))
            })?;

        let next_cursor = rows
            .last()
            .map(|m| m.unique_id.clone())
            .unwrap_or_default();
        let items = rows.into_iter().map(|m| m.into_assigned_student()).collect();
        Ok((items, next_cursor))
    }

    async fn probe_previous(
        &self,
        db: &DatabaseConnection,
        query: &AssignedStudentListQuery,
    ) -> Result<(u64, Option<String>)> {
        let cursor = query.cursor.as_deref().unwrap_or_default();
        let probe = Slots::find()
            .filter(slot_filter_condition(query))
            .filter(slot_keyset("<", cursor))
            .select_only()
            .column(SlotColumn::UniqueId)
            .column_as(Expr::cust("COUNT(*) OVER ()"), "pre_total")
            .order_by_desc(SlotColumn::StudentStartDate)
            .order_by_desc(SlotColumn::CourseId)
            .order_by_desc(SlotColumn::StudentId)
            .order_by_desc(SlotColumn::UniqueId)
            .limit(query.limit)
            .into_model::<SlotProbeRow>()
            .all(db)
            .await
            .map_err(|e| LessonMgmtError::database_operation(format!("探测上一页失败: {e}")))?;

        let pre_total = probe.first().map(|r| r.pre_total as u64).unwrap_or(0);
        let boundary = probe.last().map(|r| r.unique_id.clone());
        Ok((pre_total, boundary))
    }
}

#[async_trait::async_trait]
impl PagedDataset for RecurringDataset {
    fn check_cursor(&self, cursor: &str) -> Result<()> {
        parse_recurring_cursor(cursor).map(|_| ())
    }

    async fn count(
        &self,
        db: &DatabaseConnection,
        query: &AssignedStudentListQuery,
    ) -> Result<u64> {
        RecurringSlots::find()
            .filter(recurring_filter_condition(query))
            .count(db)
            .await
            .map_err(|e| LessonMgmtError::database_operation(format!("查询排课学生总数失败: {e}")))
    }

    async fn fetch_page(
        &self,
        db: &DatabaseConnection,
        query: &AssignedStudentListQuery,
    ) -> Result<(Vec<AssignedStudent>, String)> {
        let mut select = RecurringSlots::find().filter(recurring_filter_condition(query));
        if let Some(ref cursor) = query.cursor {
            let (unique_id, week_start) = parse_recurring_cursor(cursor)?;
            select = select.filter(recurring_keyset(">", &unique_id, week_start));
        }
        let rows = select
            .order_by_asc(RecurringColumn::WeekStart)
            .order_by_asc(RecurringColumn::CourseId)
            .order_by_asc(RecurringColumn::StudentId)
            .order_by_asc(RecurringColumn::UniqueId)
            .limit(query.limit)
            .all(db)
            .await
            .map_err(|e| {
                LessonMgmtError::database_operation(format!("查询排课学生列表失败: {e}"))
            })?;

        let next_cursor = rows
            .last()
            .map(|m| recurring_cursor(&m.unique_id, m.week_start))
            .unwrap_or_default();
        let items = rows.into_iter().map(|m| m.into_assigned_student()).collect();
        Ok((items, next_cursor))
    }

    async fn probe_previous(
        &self,
        db: &DatabaseConnection,
        query: &AssignedStudentListQuery,
    ) -> Result<(u64, Option<String>)> {
        let cursor = query.cursor.as_deref().unwrap_or_default();
        let (unique_id, week_start) = parse_recurring_cursor(cursor)?;
        let probe = RecurringSlots::find()
            .filter(recurring_filter_condition(query))
            .filter(recurring_keyset("<", &unique_id, week_start))
            .select_only()
            .column(RecurringColumn::UniqueId)
            .column(RecurringColumn::WeekStart)
            .column_as(Expr::cust("COUNT(*) OVER ()"), "pre_total")
            .order_by_desc(RecurringColumn::WeekStart)
            .order_by_desc(RecurringColumn::CourseId)
            .order_by_desc(RecurringColumn::StudentId)
            .order_by_desc(RecurringColumn::UniqueId)
            .limit(query.limit)
            .into_model::<RecurringProbeRow>()
            .all(db)
            .await
            .map_err(|e| LessonMgmtError::database_operation(format!("探测上一页失败: {e}")))?;

        let pre_total = probe.first().map(|r| r.pre_total as u64).unwrap_or(0);
        let boundary = probe
            .last()
            .map(|r| recurring_cursor(&r.unique_id, r.week_start));
        Ok((pre_total, boundary))
    }
}

/// 根据探测结果决定 previous_cursor
///
/// pre_total 是游标之前满足筛选的全部行数。不超过一页说明
/// 上一页就是第一页，返回空游标让调用方直接查首页；
/// 否则返回探测取到的最后一行（也就是上一页的前一行）。
fn previous_cursor_from_probe(pre_total: u64, limit: u64, boundary: Option<String>) -> String {
    if pre_total <= limit {
        return String::new();
    }
    boundary.unwrap_or_default()
}

// slot 数据集的筛选条件（不含游标）
fn slot_filter_condition(query: &AssignedStudentListQuery) -> Condition {
    let mut cond = Condition::all().add(Expr::cust_with_values(
        "(CURRENT_TIMESTAMP AT TIME ZONE ?)::date < student_end_date",
        [query.timezone.clone()],
    ));

    if !query.course_ids.is_empty() {
        cond = cond.add(SlotColumn::CourseId.is_in(query.course_ids.clone()));
    }
    if !query.student_ids.is_empty() {
        cond = cond.add(SlotColumn::StudentId.is_in(query.student_ids.clone()));
    }
    if !query.location_ids.is_empty() {
        cond = cond.add(SlotColumn::LocationId.is_in(query.location_ids.clone()));
    }
    if !query.statuses.is_empty() {
        cond = cond.add(status_condition(&query.statuses));
    }
    if let Some(ref keyword) = query.keyword {
        cond = cond.add(name_match_expr(keyword));
    }
    // 日期范围按有效期区间相交处理
    if let Some(start) = query.start_date {
        cond = cond.add(SlotColumn::StudentEndDate.gte(start));
    }
    if let Some(end) = query.end_date {
        cond = cond.add(SlotColumn::StudentStartDate.lte(end));
    }

    cond
}

// recurring 数据集的筛选条件（不含游标）
fn recurring_filter_condition(query: &AssignedStudentListQuery) -> Condition {
    let mut cond = Condition::all().add(Expr::cust_with_values(
        "(CURRENT_TIMESTAMP AT TIME ZONE ?)::date < week_end",
        [query.timezone.clone()],
    ));

    if !query.course_ids.is_empty() {
        cond = cond.add(RecurringColumn::CourseId.is_in(query.course_ids.clone()));
    }
    if !query.student_ids.is_empty() {
        cond = cond.add(RecurringColumn::StudentId.is_in(query.student_ids.clone()));
    }
    if !query.location_ids.is_empty() {
        cond = cond.add(RecurringColumn::LocationId.is_in(query.location_ids.clone()));
    }
    if !query.statuses.is_empty() {
        cond = cond.add(status_condition(&query.statuses));
    }
    if let Some(ref keyword) = query.keyword {
        cond = cond.add(name_match_expr(keyword));
    }
    if let Some(start) = query.start_date {
        cond = cond.add(RecurringColumn::WeekEnd.gte(start));
    }
    if let Some(end) = query.end_date {
        cond = cond.add(RecurringColumn::WeekStart.lte(end));
    }

    cond
}

// 排课状态转换成课时数比较，未购课时按 0 处理
fn status_condition(statuses: &[AssignedStudentStatus]) -> Condition {
    let mut cond = Condition::any();
    for status in statuses {
        let sql = match status {
            AssignedStudentStatus::UnderAssigned => "assigned_slot < COALESCE(purchased_slot, 0)",
            AssignedStudentStatus::JustAssigned => "assigned_slot = COALESCE(purchased_slot, 0)",
            AssignedStudentStatus::OverAssigned => "assigned_slot > COALESCE(purchased_slot, 0)",
        };
        cond = cond.add(Expr::cust(sql));
    }
    cond
}

// 姓名匹配：两侧都去空格转小写，"Yamada Taro" 与 "yamadataro" 等价
fn name_match_expr(keyword: &str) -> Expr {
    Expr::cust_with_values(
        "REPLACE(LOWER(student_name), ' ', '') LIKE ? ESCAPE '\\'",
        [name_match_pattern(keyword)],
    )
}

// 游标行的排序键通过标量子查询取出，省掉一次独立查询
fn slot_keyset(op: &str, cursor: &str) -> Expr {
    Expr::cust_with_values(
        format!(
            "(student_start_date, course_id, student_id, unique_id) {op} \
             (SELECT student_start_date, course_id, student_id, unique_id \
              FROM student_course_slot_info WHERE unique_id = ?)"
        ),
        [cursor.to_string()],
    )
}

fn recurring_keyset(op: &str, unique_id: &str, week_start: NaiveDate) -> Expr {
    Expr::cust_with_values(
        format!(
            "(week_start, course_id, student_id, unique_id) {op} \
             (SELECT week_start, course_id, student_id, unique_id \
              FROM student_course_recurring_slot_info \
              WHERE unique_id = ? AND week_start = ?)"
        ),
        [
            sea_orm::Value::from(unique_id.to_string()),
            sea_orm::Value::from(week_start),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_cursor_suppressed_when_first_page_reaches_cursor() {
        // 游标之前只有 limit 行（或更少），上一页即首页
        assert_eq!(previous_cursor_from_probe(2, 2, Some("sub-02".into())), "");
        assert_eq!(previous_cursor_from_probe(1, 2, Some("sub-01".into())), "");
        assert_eq!(previous_cursor_from_probe(0, 2, None), "");
        // 恰好 3 行对 limit 5 也要抑制
        assert_eq!(previous_cursor_from_probe(3, 5, Some("sub-03".into())), "");
    }

    #[test]
    fn test_previous_cursor_is_probe_boundary_row() {
        // 游标之前有 3 行、页大小 2：探测按倒序取 2 行，
        // 最后一行正好是上一页的前一行
        assert_eq!(
            previous_cursor_from_probe(3, 2, Some("sub-01".into())),
            "sub-01"
        );
    }

    #[test]
    fn test_malformed_recurring_cursor_rejected_before_any_query() {
        assert!(RecurringDataset.check_cursor("sub-no-date").is_err());
        assert!(RecurringDataset.check_cursor("sub_01_2026-03-02").is_ok());
        // slot 游标不携带日期后缀，不做格式限制
        assert!(SlotDataset.check_cursor("sub-no-date").is_ok());
    }
}
