//! 崩溃上报错误类型

use axum::{
    Json,
    response::{IntoResponse, Response},
};

use super::types::{ErrorCode, IntakeResponse};

/// 上报处理错误
///
/// 两类错误都以 HTTP 200 + JSON 失败载荷返回，底层原因不暴露给客户端
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// 缺少 exception 参数或参数为空
    #[error("Missing Parameter")]
    MissingParameter,

    /// 存储写入失败
    #[error("Database Error")]
    Database(#[source] anyhow::Error),
}

impl IntakeError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingParameter => ErrorCode::MissingParameter,
            Self::Database(_) => ErrorCode::DatabaseError,
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        Json(IntakeResponse::failure(self.error_code())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            IntakeError::MissingParameter.error_code(),
            ErrorCode::MissingParameter
        );
        let err = IntakeError::Database(anyhow::anyhow!("disk I/O error"));
        assert_eq!(err.error_code(), ErrorCode::DatabaseError);
        // 对外信息不包含底层原因
        assert_eq!(err.to_string(), "Database Error");
    }
}
