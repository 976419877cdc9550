//! 执行边界统一错误定义

use flowcast_events::error::EventsError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum RuntimeError {
    #[error("events: {0}")]
    Events(#[from] EventsError),

    #[error("command failed: {reason}")]
    Command { reason: String },
}

/// 统一 Result 类型别名
pub type RuntimeResult<T> = Result<T, RuntimeError>;
