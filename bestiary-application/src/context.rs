/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息，目前仅有请求标识，
/// 由接口层（例如 GraphQL 请求数据）注入，处理器用于日志关联。
///
/// 典型用法：
/// ```rust
/// use bestiary_application::context::AppContext;
///
/// let ctx = AppContext::with_request_id("req-123");
/// assert_eq!(ctx.request_id.as_deref(), Some("req-123"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    /// 请求标识（可选）：为空时日志中不关联请求
    pub request_id: Option<String>,
}

impl AppContext {
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
        }
    }
}
