use serde::{Deserialize, Serialize};
use std::fmt;

/// 云事件类型
///
/// 固定枚举，与引擎原始事件种类一一对应，另含跨领域的 `*_UPDATED`。
/// 序列化形式为大写下划线字符串（如 `TASK_CREATED`），即外部消费者
/// 看到的 `eventType` 字段取值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    TaskCreated,
    TaskAssigned,
    TaskCompleted,
    TaskCancelled,
    TaskUpdated,
    ProcessStarted,
    ProcessCompleted,
    ProcessCancelled,
    ProcessSuspended,
    ProcessResumed,
}

impl EventType {
    /// 与序列化形式一致的字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::TaskCreated => "TASK_CREATED",
            EventType::TaskAssigned => "TASK_ASSIGNED",
            EventType::TaskCompleted => "TASK_COMPLETED",
            EventType::TaskCancelled => "TASK_CANCELLED",
            EventType::TaskUpdated => "TASK_UPDATED",
            EventType::ProcessStarted => "PROCESS_STARTED",
            EventType::ProcessCompleted => "PROCESS_COMPLETED",
            EventType::ProcessCancelled => "PROCESS_CANCELLED",
            EventType::ProcessSuspended => "PROCESS_SUSPENDED",
            EventType::ProcessResumed => "PROCESS_RESUMED",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
