pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assigned_students::requests::GetAssignedStudentListRequest;
use crate::storage::Storage;

pub struct AssignedStudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignedStudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取排课学生列表
    pub async fn list_assigned_students(
        &self,
        request: &HttpRequest,
        req: GetAssignedStudentListRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_assigned_students(self, request, req).await
    }
}
