// API 统一错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 400,
    NotFound = 404,
    InternalServerError = 500,
}
