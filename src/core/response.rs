//! 核心响应处理模块

use serde::Serialize;

/// 响应状态标识
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// API 统一响应结构
/// data 和 message 为 None 时不参与序列化
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            message: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            message: Some(message.into()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_message() {
        let value = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"], 42);
        assert!(value.get("message").is_none());
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn error_envelope_omits_data() {
        let value = serde_json::to_value(ApiResponse::error("出错了")).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "出错了");
        assert!(value.get("data").is_none());
    }
}
