//! Client-side error taxonomy.
//!
//! What a browser client can observe when talking to the REST backend:
//! an HTTP error status, a transport failure (no response at all), or a
//! response body it cannot decode. Each class drives a different reaction
//! in the UI, so they stay distinct here instead of collapsing into strings.

use core::fmt;

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401：会话失效或凭据被拒 → 清会话并跳转登录
    Unauthorized,
    /// 400：后端拒绝了请求体 → 提示后由用户改正重提
    BadRequest,
    /// 404：资源不存在
    NotFound,
    /// 其他非 2xx 状态码
    Server(u16),
    /// 请求没有得到任何响应（网络层失败）
    Network,
    /// 响应体无法解码
    Parse,
}

impl ErrorKind {
    fn label(&self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Server(_) => "SERVER_ERROR",
            ErrorKind::Network => "NETWORK_ERROR",
            ErrorKind::Parse => "PARSE_ERROR",
        }
    }
}

/// API 调用错误
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    // --- Convenience constructors ---

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Classify a non-2xx HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            other => ErrorKind::Server(other),
        };
        Self::new(kind, message)
    }

    // --- Accessors ---

    /// 是否应触发「会话失效」处理（清会话 + 跳转登录）
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }

    /// 是否为网络层失败（未收到响应）
    pub fn is_network(&self) -> bool {
        self.kind == ErrorKind::Network
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.label(), self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert_eq!(ApiError::from_status(400, "").kind, ErrorKind::BadRequest);
        assert_eq!(ApiError::from_status(401, "").kind, ErrorKind::Unauthorized);
        assert_eq!(ApiError::from_status(404, "").kind, ErrorKind::NotFound);
        assert_eq!(ApiError::from_status(500, "").kind, ErrorKind::Server(500));
        assert_eq!(ApiError::from_status(502, "").kind, ErrorKind::Server(502));
    }

    #[test]
    fn test_predicates() {
        assert!(ApiError::unauthorized("x").is_unauthorized());
        assert!(!ApiError::network("x").is_unauthorized());
        assert!(ApiError::network("x").is_network());
    }

    #[test]
    fn test_display_carries_label_and_message() {
        let error = ApiError::from_status(401, "session invalid");
        assert_eq!(error.to_string(), "[UNAUTHORIZED] session invalid");
    }
}
