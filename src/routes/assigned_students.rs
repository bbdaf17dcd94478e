use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assigned_students::requests::GetAssignedStudentListRequest;
use crate::services::AssignedStudentService;

// 懒加载的全局 ASSIGNED_STUDENT_SERVICE 实例
static ASSIGNED_STUDENT_SERVICE: Lazy<AssignedStudentService> =
    Lazy::new(AssignedStudentService::new_lazy);

// HTTP处理程序
pub async fn list_assigned_students(
    req: HttpRequest,
    body: web::Json<GetAssignedStudentListRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNED_STUDENT_SERVICE
        .list_assigned_students(&req, body.into_inner())
        .await
}

// 配置路由
pub fn configure_assigned_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assigned-students")
            // 筛选条件嵌套较深，列表查询统一走 POST
            .service(web::resource("/list").route(web::post().to(list_assigned_students))),
    );
}
