//! 公共工具模块

use std::borrow::Cow;

/// 日志中异常文本的最大预览长度（字节）
pub const LOG_PREVIEW_BYTES: usize = 200;

/// 生成用于日志输出的文本预览
///
/// 超过 `max_bytes` 时在合法的 UTF-8 字符边界处截断并追加 `...`，
/// 不超过时原样借用，避免额外分配
pub fn log_preview(text: &str, max_bytes: usize) -> Cow<'_, str> {
    if text.len() <= max_bytes {
        return Cow::Borrowed(text);
    }

    // 为省略号预留空间
    let mut end = max_bytes.saturating_sub(3);
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }

    Cow::Owned(format!("{}...", &text[..end]))
}

/// 按编译特性决定异常文本在日志中的呈现方式
///
/// 启用 `sensitive-logs` 时输出完整文本
pub fn exception_for_log(exception: &str) -> Cow<'_, str> {
    if cfg!(feature = "sensitive-logs") {
        Cow::Borrowed(exception)
    } else {
        log_preview(exception, LOG_PREVIEW_BYTES)
    }
}
