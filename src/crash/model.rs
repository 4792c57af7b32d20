//! 崩溃记录数据模型

/// 崩溃记录
///
/// 每个请求在内存中创建一次，交给存储写入后即丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashRecord {
    /// 服务端接收时间（Unix 秒）
    pub timestamp: i64,
    /// 客户端上报的异常原文
    pub exception: String,
}

impl CrashRecord {
    /// 以当前时间创建记录
    pub fn new(exception: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp(),
            exception: exception.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_current_time() {
        let before = chrono::Utc::now().timestamp();
        let record = CrashRecord::new("Error: boom");
        let after = chrono::Utc::now().timestamp();

        assert_eq!(record.exception, "Error: boom");
        assert!(record.timestamp >= before && record.timestamp <= after);
    }
}
