//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_lessonmgmt_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum LessonMgmtError {
            $($variant(String),)*
        }

        impl LessonMgmtError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(LessonMgmtError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(LessonMgmtError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(LessonMgmtError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl LessonMgmtError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        LessonMgmtError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_lessonmgmt_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    CursorParse("E004", "Cursor Parse Error"),
}

impl LessonMgmtError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LessonMgmtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LessonMgmtError {}

impl From<sea_orm::DbErr> for LessonMgmtError {
    fn from(err: sea_orm::DbErr) -> Self {
        LessonMgmtError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LessonMgmtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LessonMgmtError::database_config("test").code(), "E001");
        assert_eq!(LessonMgmtError::database_operation("test").code(), "E003");
        assert_eq!(LessonMgmtError::cursor_parse("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            LessonMgmtError::cursor_parse("test").error_type(),
            "Cursor Parse Error"
        );
        assert_eq!(
            LessonMgmtError::database_connection("test").error_type(),
            "Database Connection Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = LessonMgmtError::database_operation("query failed");
        assert_eq!(err.message(), "query failed");
    }

    #[test]
    fn test_from_db_err() {
        let err: LessonMgmtError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_format_simple() {
        let err = LessonMgmtError::cursor_parse("bad offset string");
        let formatted = err.format_simple();
        assert!(formatted.contains("Cursor Parse Error"));
        assert!(formatted.contains("bad offset string"));
    }
}
