//! 崩溃上报 API 请求/响应类型

use serde::Serialize;

/// 失败响应中的错误码
///
/// 线上取值固定：DatabaseError = 0，MissingParameter = 1，不可重新编号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    DatabaseError = 0,
    MissingParameter = 1,
}

impl ErrorCode {
    /// 线上数值
    pub fn code(self) -> i32 {
        self as i32
    }

    /// 对外展示的错误信息
    pub fn message(self) -> &'static str {
        match self {
            Self::DatabaseError => "Database Error",
            Self::MissingParameter => "Missing Parameter",
        }
    }
}

/// 上报结果响应
///
/// 成功：`{"success":true}`
/// 失败：`{"success":false,"errorCode":<int>,"errorMessage":"<string>"}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<&'static str>,
}

impl IntakeResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            error_code: None,
            error_message: None,
        }
    }

    pub fn failure(code: ErrorCode) -> Self {
        Self {
            success: false,
            error_code: Some(code.code()),
            error_message: Some(code.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_values() {
        assert_eq!(ErrorCode::DatabaseError.code(), 0);
        assert_eq!(ErrorCode::MissingParameter.code(), 1);
        assert_eq!(ErrorCode::DatabaseError.message(), "Database Error");
        assert_eq!(ErrorCode::MissingParameter.message(), "Missing Parameter");
    }

    #[test]
    fn test_success_json_shape() {
        let json = serde_json::to_string(&IntakeResponse::success()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_failure_json_shape() {
        let json = serde_json::to_string(&IntakeResponse::failure(ErrorCode::MissingParameter))
            .unwrap();
        assert_eq!(
            json,
            r#"{"success":false,"errorCode":1,"errorMessage":"Missing Parameter"}"#
        );

        let json =
            serde_json::to_string(&IntakeResponse::failure(ErrorCode::DatabaseError)).unwrap();
        assert_eq!(
            json,
            r#"{"success":false,"errorCode":0,"errorMessage":"Database Error"}"#
        );
    }
}
