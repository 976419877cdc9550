//! 核心层统一错误定义
//!
//! 仅覆盖序列化与通道发布两类最小必要错误；
//! 转换器与聚合器在正常输入下没有错误路径。

use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EventsError {
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("channel error: {reason}")]
    Channel { reason: String },
}

impl EventsError {
    pub fn channel(reason: impl Into<String>) -> Self {
        EventsError::Channel {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type EventsResult<T> = Result<T, EventsError>;
