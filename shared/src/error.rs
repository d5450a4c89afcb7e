//! 客户端错误模型
//!
//! 把传输层、序列化与服务端业务失败统一为 `ApiError`：
//! - kind: 错误语义（由 HTTP 状态码与载荷共同推导）
//! - message: 服务端原文，未做改写，直接交给 UI 展示
//!
//! 预订冲突没有专用状态码时退回到消息文本嗅探，见 `from_response`。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 服务端在预订冲突时给出的结构化错误码（优先于文本嗅探）
pub const AVAILABILITY_CONFLICT_CODE: &str = "ROOM_NOT_AVAILABLE";
/// 仅有人类可读消息的服务端的冲突标记文本
pub const AVAILABILITY_MARKER: &str = "not available";

// =========================================================
// 错误语义枚举
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// 网络不可达、请求未发出或未收到响应
    Transport,
    /// 响应体无法解析
    Serialization,
    /// 400: 输入校验失败
    Validation,
    /// 401: 未认证
    Unauthorized,
    /// 403: 已认证但无权限
    Forbidden,
    /// 404: 资源不存在
    NotFound,
    /// 预订冲突（房间在所选日期不可用）
    Conflict,
    /// 5xx 及其他服务端失败
    Server,
}

impl ApiErrorKind {
    /// 由 HTTP 状态码推导错误语义
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiErrorKind::Validation,
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            409 => ApiErrorKind::Conflict,
            _ => ApiErrorKind::Server,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorKind::Transport => "TRANSPORT_ERROR",
            ApiErrorKind::Serialization => "DECODE_ERROR",
            ApiErrorKind::Validation => "INVALID_INPUT",
            ApiErrorKind::Unauthorized => "UNAUTHORIZED",
            ApiErrorKind::Forbidden => "FORBIDDEN",
            ApiErrorKind::NotFound => "RESOURCE_NOT_FOUND",
            ApiErrorKind::Conflict => "ROOM_NOT_AVAILABLE",
            ApiErrorKind::Server => "SERVER_ERROR",
        }
    }
}

// =========================================================
// 服务端错误载荷
// =========================================================

/// 服务端错误响应体；字段均可缺省，未知字段忽略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// 机器可读错误码（若服务端提供）
    #[serde(default)]
    pub error: Option<String>,
}

// =========================================================
// 核心错误类型
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    /// 原始 HTTP 状态码；传输/解析失败时为 None
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    // --- 便捷构造 ---

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Transport, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Serialization, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound, message)
    }

    /// 由非 2xx 响应构造错误
    ///
    /// 优先采用载荷中的消息；冲突判定先看结构化错误码，
    /// 再退回消息文本嗅探（兼容只回文本的服务端）。
    pub fn from_response(status: u16, payload: Option<ErrorResponse>, fallback: &str) -> Self {
        let (message, code) = match payload {
            Some(p) => (
                p.message.filter(|m| !m.is_empty()),
                p.error.filter(|c| !c.is_empty()),
            ),
            None => (None, None),
        };
        let message = message.unwrap_or_else(|| {
            if fallback.is_empty() {
                format!("request failed with status {}", status)
            } else {
                fallback.to_string()
            }
        });

        let mut kind = ApiErrorKind::from_status(status);
        let structured_conflict = code.as_deref() == Some(AVAILABILITY_CONFLICT_CODE);
        if structured_conflict || message.to_lowercase().contains(AVAILABILITY_MARKER) {
            kind = ApiErrorKind::Conflict;
        }

        Self {
            kind,
            message,
            status: Some(status),
        }
    }

    // --- 判定 ---

    /// 是否为预订冲突（房间在所选日期不可用）
    pub fn is_availability_conflict(&self) -> bool {
        self.kind == ApiErrorKind::Conflict
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_kinds() {
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthorized);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Forbidden);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(409), ApiErrorKind::Conflict);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Server);
    }

    #[test]
    fn conflict_detected_from_structured_code() {
        let payload = ErrorResponse {
            message: Some("booking rejected".into()),
            error: Some(AVAILABILITY_CONFLICT_CODE.into()),
        };
        let err = ApiError::from_response(400, Some(payload), "");
        assert!(err.is_availability_conflict());
    }

    #[test]
    fn conflict_detected_from_message_text() {
        let payload = ErrorResponse {
            message: Some("Room 101 is not available for the selected dates".into()),
            error: None,
        };
        let err = ApiError::from_response(500, Some(payload), "");
        assert!(err.is_availability_conflict());
        assert!(err.message.contains("Room 101"));
    }

    #[test]
    fn plain_validation_failure_is_not_a_conflict() {
        let payload = ErrorResponse {
            message: Some("check-out date must be after check-in date".into()),
            error: None,
        };
        let err = ApiError::from_response(400, Some(payload), "");
        assert!(!err.is_availability_conflict());
        assert_eq!(err.kind, ApiErrorKind::Validation);
    }

    #[test]
    fn missing_payload_falls_back_to_status_message() {
        let err = ApiError::from_response(503, None, "");
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert!(err.message.contains("503"));

        let err = ApiError::from_response(404, None, "no such room");
        assert_eq!(err.message, "no such room");
    }
}
