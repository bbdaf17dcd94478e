use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignedStudentService;
use crate::{
    config::AppConfig,
    errors::LessonMgmtError,
    models::{
        ApiResponse, ErrorCode,
        assigned_students::{
            requests::GetAssignedStudentListRequest, responses::AssignedStudentListResponse,
        },
    },
    utils::validate::{validate_limit, validate_timezone},
};

pub async fn list_assigned_students(
    service: &AssignedStudentService,
    request: &HttpRequest,
    req: GetAssignedStudentListRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let storage = service.get_storage(request);

    // paging 块必填
    let paging = match req.paging {
        Some(ref paging) => paging.clone(),
        None => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Missing paging parameters",
            )));
        }
    };

    if let Err(msg) = validate_limit(paging.limit, config.server.limits.max_page_limit) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if let Some(ref tz) = req.timezone
        && let Err(msg) = validate_timezone(tz)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 空游标等价于首页
    let cursor = paging.cursor.filter(|c| !c.is_empty());
    let limit = paging.limit;

    // 校区过滤交集为空时直接返回空页，不下发任何查询
    let query = match req.normalize(limit, cursor, &config.app.default_timezone) {
        Some(query) => query,
        None => {
            return Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignedStudentListResponse::empty(limit),
                "Assigned student list retrieved successfully",
            )));
        }
    };

    match storage.list_assigned_students(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Assigned student list retrieved successfully",
        ))),
        Err(e @ LessonMgmtError::CursorParse(_)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::BadRequest, e.message().to_string()),
        )),
        Err(e) => {
            tracing::error!("Failed to retrieve assigned student list: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve assigned student list",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        assigned_students::{
            entities::PurchaseMethod,
            requests::{AssignedStudentFilter, AssignedStudentListQuery},
        },
        attendance::{
            entities::{AcademicYear, ReallocatedLesson},
            requests::AttendanceListQuery,
            responses::AttendanceListResponse,
        },
        common::pagination::CursorPaging,
    };
    use crate::storage::Storage;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // 记录所有存储调用次数的替身
    struct CountingStorage {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Storage for CountingStorage {
        async fn list_assigned_students(
            &self,
            _query: AssignedStudentListQuery,
        ) -> crate::errors::Result<AssignedStudentListResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AssignedStudentListResponse::empty(0))
        }

        async fn list_student_attendance(
            &self,
            _query: AttendanceListQuery,
        ) -> crate::errors::Result<AttendanceListResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AttendanceListResponse::empty(0, 0))
        }

        async fn get_reallocated_lessons(
            &self,
            _keys: &[(String, String)],
        ) -> crate::errors::Result<Vec<ReallocatedLesson>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn get_current_academic_year(
            &self,
        ) -> crate::errors::Result<Option<AcademicYear>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }
    }

    #[actix_web::test]
    async fn test_disjoint_location_filters_issue_no_storage_calls() {
        let counting = Arc::new(CountingStorage {
            calls: AtomicUsize::new(0),
        });
        let storage: Arc<dyn Storage> = counting.clone();
        let service = AssignedStudentService {
            storage: Some(storage),
        };
        let http_req = actix_web::test::TestRequest::default().to_http_request();

        // 全局校区过滤与嵌套校区过滤没有交集
        let req = GetAssignedStudentListRequest {
            purchase_method: PurchaseMethod::Slot,
            paging: Some(CursorPaging {
                limit: 10,
                cursor: None,
            }),
            keyword: None,
            timezone: None,
            location_ids: vec!["center-1".into()],
            filter: Some(AssignedStudentFilter {
                location_ids: vec!["center-9".into()],
                ..Default::default()
            }),
        };

        let resp = list_assigned_students(&service, &http_req, req)
            .await
            .unwrap();
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["pagination"]["total"], 0);
        assert_eq!(json["data"]["pagination"]["next_cursor"], "");
        assert_eq!(json["data"]["items"].as_array().map(Vec::len), Some(0));

        // 短路路径下一条存储查询都不允许下发
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }
}
