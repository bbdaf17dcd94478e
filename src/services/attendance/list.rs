use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AttendanceService, enrich};
use crate::{
    config::AppConfig,
    models::{
        ApiResponse, ErrorCode,
        attendance::requests::GetStudentAttendanceRequest,
    },
    utils::validate::validate_limit,
};

pub async fn list_student_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    req: GetStudentAttendanceRequest,
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

    let mut query = req.normalize(paging.limit, paging.offset);

    // 按开关把查询范围裁剪到当前学年
    if config.features.clip_attendance_to_academic_year {
        match storage.get_current_academic_year().await {
            Ok(Some(year)) => query.clip_to_academic_year(year.first_day, year.last_day),
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Failed to resolve current academic year: {}", e);
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to retrieve attendance list",
                    ),
                ));
            }
        }
    }

    let mut response = match storage.list_student_attendance(query).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to retrieve attendance list: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve attendance list",
                )),
            );
        }
    };

    // 回填调课信息（页内无调课行时不产生额外查询）
    if let Err(e) = enrich::enrich_reallocations(&storage, &mut response.items).await {
        tracing::error!("Failed to enrich reallocated lessons: {}", e);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to retrieve attendance list",
            )),
        );
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Attendance list retrieved successfully",
    )))
}
