//! 崩溃上报 HTTP 处理器

use axum::{
    Form, Json,
    extract::{FromRequest, Query, Request, State},
    response::{IntoResponse, Response},
};
use http::{Method, StatusCode, header};

use crate::common::exception_for_log;

use super::error::IntakeError;
use super::model::CrashRecord;
use super::router::IntakeState;
use super::types::IntakeResponse;

/// 必填参数名
const EXCEPTION_PARAM: &str = "exception";

type FormPairs = Vec<(String, String)>;

/// GET|POST /
/// 接收崩溃上报，其他方法返回 501
pub async fn handle_crash_report(State(state): State<IntakeState>, request: Request) -> Response {
    let method = request.method().clone();
    if method != Method::GET && method != Method::POST {
        tracing::debug!(%method, "不支持的请求方法");
        return unimplemented();
    }

    match save_crash_report(&state, request).await {
        Ok(()) => Json(IntakeResponse::success()).into_response(),
        Err(e) => e.into_response(),
    }
}

/// 校验参数、构建记录并写入存储
async fn save_crash_report(state: &IntakeState, request: Request) -> Result<(), IntakeError> {
    let exception = match extract_exception(request).await {
        Some(exception) if !exception.is_empty() => exception,
        _ => {
            tracing::debug!("缺少 exception 参数");
            return Err(IntakeError::MissingParameter);
        }
    };

    let record = CrashRecord::new(exception);
    tracing::info!(
        timestamp = record.timestamp,
        exception = %exception_for_log(&record.exception),
        "收到崩溃上报"
    );

    let store = state.store.clone();
    let result = tokio::task::spawn_blocking(move || store.put(&record))
        .await
        .map_err(anyhow::Error::from)
        .and_then(|r| r);

    result.map_err(|e| {
        tracing::error!("写入崩溃记录失败: {:#}", e);
        IntakeError::Database(e)
    })
}

/// 提取 exception 参数
///
/// POST 表单体中的值优先于查询字符串；同名参数取第一个值
async fn extract_exception(request: Request) -> Option<String> {
    let from_query = Query::<FormPairs>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(pairs)| first_value(pairs, EXCEPTION_PARAM));

    if request.method() == Method::POST {
        // 非表单 Content-Type 或超出大小限制时忽略请求体
        match Form::<FormPairs>::from_request(request, &()).await {
            Ok(Form(pairs)) => {
                if let Some(value) = first_value(pairs, EXCEPTION_PARAM) {
                    return Some(value);
                }
            }
            Err(rejection) => {
                tracing::debug!("未读取表单请求体: {}", rejection);
            }
        }
    }

    from_query
}

fn first_value(pairs: FormPairs, name: &str) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// 501 Not Implemented，用于 GET/POST 以外的方法
fn unimplemented() -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        [(header::ALLOW, "GET, POST"), (header::CONTENT_TYPE, "text/html")],
    )
        .into_response()
}
