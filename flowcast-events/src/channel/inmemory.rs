//! 内存版通道（InMemoryChannel）
//!
//! 面向测试与本地开发的 `ChannelProducer` 实现。一次冲刷产出的
//! 整个批次是广播的最小单位：`Vec<CloudEvent>` 原样进入广播缓冲区，
//! 订阅者要么收到完整批次、要么什么都收不到，不存在批内拆分或
//! 跨批交织。`subscribe` 返回的批次流具有 `'static` 生命周期。
//!
//! 无订阅者时发送的批次直接丢弃，不算发布失败。

use crate::error::{EventsError, EventsResult};
use crate::event::CloudEvent;
use async_trait::async_trait;
use futures_core::stream::BoxStream;
use futures_util::StreamExt;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use super::producer::ChannelProducer;

/// 简单的内存通道实现
#[derive(Clone)]
pub struct InMemoryChannel {
    tx: broadcast::Sender<Vec<CloudEvent>>,
}

impl InMemoryChannel {
    /// 创建一个内存通道，`capacity` 为广播缓冲区容量（批次个数）
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// 返回一个 `'static` 生命周期的批次流
    pub fn subscribe(&self) -> BoxStream<'static, EventsResult<Vec<CloudEvent>>> {
        let rx = self.tx.subscribe();
        let stream =
            BroadcastStream::new(rx).map(|r| r.map_err(|e| EventsError::channel(e.to_string())));
        Box::pin(stream)
    }
}

#[async_trait]
impl ChannelProducer for InMemoryChannel {
    async fn send(&self, events: &[CloudEvent]) -> EventsResult<()> {
        // 无订阅者时 broadcast 的 send 会返回错误，这里视为非致命并忽略
        let _ = self.tx.send(events.to_vec());
        Ok(())
    }
}
