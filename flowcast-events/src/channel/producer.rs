//! 通道生产者（ChannelProducer）协议
//!
//! 定义向外部消息传输发布有序事件批次的统一抽象。

use crate::error::EventsResult;
use crate::event::CloudEvent;
use async_trait::async_trait;

/// 通道生产者：把一次冲刷产出的有序批次作为一次逻辑发送发布出去。
///
/// 契约：
/// - 批次内事件的相对顺序在载荷中保持不变；
/// - 投递语义为至少一次，消费者需容忍重复；
/// - 发布失败通过错误返回给调用方，由调用方决定整批重试，
///   聚合器自身不重试、不回填缓冲区。
#[async_trait]
pub trait ChannelProducer: Send + Sync {
    async fn send(&self, events: &[CloudEvent]) -> EventsResult<()>;
}
