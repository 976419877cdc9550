//! 批次线格式（wire）
//!
//! 真实传输实现把一次冲刷的批次序列化为单个 JSON 数组载荷，
//! 载荷内保持列表顺序；消费侧按同样格式还原。

use crate::error::EventsResult;
use crate::event::CloudEvent;

/// 将有序批次编码为单个 JSON 数组载荷
pub fn encode_batch(events: &[CloudEvent]) -> EventsResult<String> {
    Ok(serde_json::to_string(events)?)
}

/// 从 JSON 数组载荷还原批次，顺序与编码时一致
pub fn decode_batch(payload: &str) -> EventsResult<Vec<CloudEvent>> {
    Ok(serde_json::from_str(payload)?)
}
